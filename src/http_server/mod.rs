use crate::app_context::AppContext;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use api::{
    add_device, check_offline, delete_device, device_event, get_devices, login, logout,
    resolve_alarm,
};
use config::HttpServerConfig;
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use std::net::SocketAddr;

mod api;
mod config;
pub mod utilities;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/login", web::post().to(login))
        .route("/api/logout", web::post().to(logout))
        .route("/api/devices", web::get().to(get_devices))
        .route("/api/add", web::post().to(add_device))
        .route("/api/resolve/{device_id}", web::post().to(resolve_alarm))
        .route("/api/delete/{device_id}", web::delete().to(delete_device))
        .route("/api/event", web::post().to(device_event))
        .route("/api/check_offline", web::get().to(check_offline));
}

/// Binds the API to `addr` and returns the server together with the bound address.
pub fn bind_http_server(context: AppContext, addr: &str) -> Result<(Server, SocketAddr), Error> {
    let context = web::Data::new(context);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec![
                http::header::CONTENT_TYPE,
                http::header::AUTHORIZATION,
            ])
            .max_age(3600);

        App::new()
            .app_data(context.clone())
            .wrap(cors)
            .configure(routes)
    })
    .bind(addr)
    .handle_err(location!())?;

    let bound = server
        .addrs()
        .first()
        .copied()
        .ok_or("HTTP server is not bound to any address")
        .handle_err(location!())?;

    Ok((server.run(), bound))
}

pub async fn run_http_server(context: AppContext) -> Result<(), Error> {
    let config = HttpServerConfig::from_env();
    let (server, addr) = bind_http_server(context, &config.addr)?;
    log::info!("HTTP server listening on {addr}");

    server.await.handle_err(location!())
}
