use chrono::{DateTime, FixedOffset, Utc};
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use rand::distr::Alphanumeric;
use rand::Rng;
use std::time::Duration;

pub fn get_timestamp_string() -> String {
    Utc::now().to_rfc3339()
}

/// Time elapsed from `timestamp` until `now`; zero if `timestamp` is in the future.
pub fn elapsed_since(timestamp: &str, now: DateTime<Utc>) -> Result<Duration, Error> {
    let datetime: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339(timestamp).handle_err(location!())?;
    let time_delta = now.signed_duration_since(datetime);
    Ok(time_delta.to_std().unwrap_or_default())
}

pub fn get_env(key: &str, default: &str, what: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            log::warn!("{what} not set ('{key}'); using '{default}'");
            default.to_string()
        }
    }
}

pub fn generate_random_string(length: usize) -> String {
    rand::rngs::ThreadRng::default()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
