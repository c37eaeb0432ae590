use std::panic;
use std::process;

use crate::app_context::AppContext;
use crate::config::Config;
use crate::constants::{BSMART_VERSION, CONFIG_FILE, SQLITE_PATH};
use crate::http_server::run_http_server;
use crate::monitor::monitor_devices;
use nullnet_liberror::{location, Error, ErrorHandler, Location};

#[tokio::main]
pub async fn start_server() -> Result<(), Error> {
    init_logger();
    log::info!("Starting BSmart server v{BSMART_VERSION}");

    install_termination_handlers()?;

    let config = Config::load(CONFIG_FILE)?;
    let context = AppContext::new(SQLITE_PATH.as_str(), config)?;

    tokio::spawn(monitor_devices(context.clone()));

    run_http_server(context).await
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn install_termination_handlers() -> Result<(), Error> {
    if cfg!(not(debug_assertions)) {
        // a panicking background task must take the whole server down
        let orig_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            orig_hook(panic_info);
            terminate_server(1);
        }));
    }

    // handle termination signals: SIGINT, SIGTERM, SIGHUP
    ctrlc::set_handler(move || terminate_server(130)).handle_err(location!())
}

pub fn terminate_server(exit_code: i32) {
    log::info!("Shutting down BSmart server...");
    log::info!("Exiting with code {exit_code}");
    process::exit(exit_code);
}
