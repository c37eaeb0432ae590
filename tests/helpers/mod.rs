use bsmart::app_context::AppContext;
use bsmart::config::Config;
use bsmart::http_server::bind_http_server;
use libbsmart::PanelClient;

pub const NUM_ITER: usize = 3;

pub fn test_config() -> Config {
    Config {
        bcrypt_cost: 4,
        ..Config::default()
    }
}

pub fn context_setup(config: Config) -> AppContext {
    AppContext::new(":memory:", config).unwrap()
}

/// Starts a server on a free local port and returns its context and base URL.
pub fn server_setup(config: Config) -> (AppContext, String) {
    let context = context_setup(config);
    let (server, addr) = bind_http_server(context.clone(), "127.0.0.1:0").unwrap();
    tokio::spawn(server);
    (context, format!("http://{addr}"))
}

pub async fn client_setup(url: &str, username: &str, password: &str) -> PanelClient {
    let mut client = PanelClient::new(url);
    client.login(username, password).await.unwrap();
    client
}
