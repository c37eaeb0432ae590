use crate::constants::{DEFAULT_HTTP_ADDR, HTTP_ADDR_ENV};
use crate::helpers::get_env;

pub struct HttpServerConfig {
    pub addr: String,
}

impl HttpServerConfig {
    pub fn from_env() -> Self {
        Self {
            addr: get_env(HTTP_ADDR_ENV, DEFAULT_HTTP_ADDR, "HTTP listening address"),
        }
    }
}
