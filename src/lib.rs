pub mod app_context;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod db;
pub mod entrypoint;
pub mod helpers;
pub mod http_server;
pub mod monitor;
pub mod sessions;
