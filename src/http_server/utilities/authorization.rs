use crate::app_context::AppContext;
use crate::http_server::utilities::error_json::ErrorJson;
use crate::sessions::Session;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{HttpRequest, HttpResponse};

pub fn extract_authorization_token(request: &HttpRequest) -> Option<String> {
    let value = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .unwrap_or(value)
        .trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Resolves the session of the caller, or the 401 response to send back.
pub async fn require_session(
    request: &HttpRequest,
    context: &AppContext,
) -> Result<Session, HttpResponse> {
    let Some(token) = extract_authorization_token(request) else {
        return Err(HttpResponse::Unauthorized().json(ErrorJson::from("Not authenticated")));
    };
    context
        .sessions
        .get(&token)
        .await
        .ok_or_else(|| HttpResponse::Unauthorized().json(ErrorJson::from("Not authenticated")))
}

/// Like [`require_session`], additionally answering 403 to non-admin users.
pub async fn require_admin(
    request: &HttpRequest,
    context: &AppContext,
) -> Result<Session, HttpResponse> {
    let session = require_session(request, context).await?;
    if !session.is_admin() {
        log::warn!("User '{}' attempted an admin action", session.username);
        return Err(HttpResponse::Forbidden().json(ErrorJson::from("Access denied")));
    }
    Ok(session)
}
