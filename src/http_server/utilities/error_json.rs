use nullnet_liberror::Error;
use serde::Serialize;

/// Error body returned by every endpoint: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub detail: String,
}

impl From<&str> for ErrorJson {
    fn from(detail: &str) -> Self {
        Self {
            detail: detail.to_string(),
        }
    }
}

impl From<String> for ErrorJson {
    fn from(detail: String) -> Self {
        Self { detail }
    }
}

impl From<Error> for ErrorJson {
    fn from(err: Error) -> Self {
        Self {
            detail: err.to_str().to_string(),
        }
    }
}
