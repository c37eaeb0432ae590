use std::time::Duration;

// project-level constants
pub const BSMART_VERSION: &str = env!("CARGO_PKG_VERSION");

// -------------------------------------------------------------------------------------------------

// server constants
pub const HTTP_ADDR_ENV: &str = "BSMART_HTTP_ADDR";

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8000";

// -------------------------------------------------------------------------------------------------

// config constants
#[cfg(not(debug_assertions))]
pub const CONFIG_FILE: &str = "/opt/config/config.json";
#[cfg(debug_assertions)]
pub const CONFIG_FILE: &str = "./test_material/config/config.json";

// -------------------------------------------------------------------------------------------------

// database constants
#[cfg(not(debug_assertions))]
const SQLITE_DIR: &str = "/opt/db";
#[cfg(debug_assertions)]
const SQLITE_DIR: &str = "./test_material";

pub static SQLITE_PATH: once_cell::sync::Lazy<String> = once_cell::sync::Lazy::new(|| {
    std::fs::create_dir_all(SQLITE_DIR).unwrap_or_default();
    format!("{SQLITE_DIR}/db.sqlite")
});

// -------------------------------------------------------------------------------------------------

// account constants
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Accounts created when the users table is empty: (username, password, role).
pub const DEFAULT_USERS: [(&str, &str, &str); 2] = [
    ("admin", "admin123", ROLE_ADMIN),
    ("user", "user123", ROLE_USER),
];

pub const SESSION_TOKEN_LEN: usize = 32;

// -------------------------------------------------------------------------------------------------

// dashboard constants
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5);

pub const DEFAULT_PANEL_URL: &str = "http://localhost:8000";
