use crate::device::{Device, DeviceEvent};
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: String,
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Detail {
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfflineReport {
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub offline: Vec<String>,
}

/// HTTP client for the alarm panel API.
#[derive(Debug, Clone)]
pub struct PanelClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl PanelClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<Session, Error> {
        let request = self
            .client
            .post(self.url("/api/login"))
            .json(&json!({ "username": username, "password": password }));
        let session: Session = parse(send(request).await?).await?;
        log::info!("Logged in as '{}' ({})", session.username, session.role);
        self.token = Some(session.token.clone());
        Ok(session)
    }

    pub async fn logout(&mut self) -> Result<Detail, Error> {
        let request = self.authorized(self.client.post(self.url("/api/logout")));
        let detail = parse(send(request).await?).await?;
        self.token = None;
        Ok(detail)
    }

    pub async fn devices(&self) -> Result<Vec<Device>, Error> {
        let request = self.authorized(self.client.get(self.url("/api/devices")));
        parse(send(request).await?).await
    }

    pub async fn add_device(&self, id: &str, location: &str) -> Result<Detail, Error> {
        let request = self
            .authorized(self.client.post(self.url("/api/add")))
            .json(&json!({ "id": id, "location": location }));
        parse(send(request).await?).await
    }

    pub async fn resolve_alarm(&self, id: &str) -> Result<Detail, Error> {
        let url = self.device_url("resolve", id)?;
        let request = self.authorized(self.client.post(url));
        parse(send(request).await?).await
    }

    pub async fn delete_device(&self, id: &str) -> Result<Detail, Error> {
        let url = self.device_url("delete", id)?;
        let request = self.authorized(self.client.delete(url));
        parse(send(request).await?).await
    }

    pub async fn send_event(&self, event: &DeviceEvent) -> Result<Detail, Error> {
        let request = self.client.post(self.url("/api/event")).json(event);
        parse(send(request).await?).await
    }

    pub async fn check_offline(&self) -> Result<OfflineReport, Error> {
        let request = self.client.get(self.url("/api/check_offline"));
        parse(send(request).await?).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `/api/{action}/{id}` with the id percent-encoded as a single path segment.
    fn device_url(&self, action: &str, id: &str) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_url).handle_err(location!())?;
        url.path_segments_mut()
            .map_err(|()| format!("'{}' cannot be a base URL", self.base_url))
            .handle_err(location!())?
            .pop_if_empty()
            .extend(["api", action, id]);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn send(request: RequestBuilder) -> Result<Response, Error> {
    let response = request.send().await.handle_err(location!())?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<Detail>()
        .await
        .map(|d| d.detail)
        .unwrap_or_default();
    Err(format!("Request failed with status {status}: {detail}")).handle_err(location!())
}

async fn parse<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, Error> {
    response.json::<T>().await.handle_err(location!())
}
