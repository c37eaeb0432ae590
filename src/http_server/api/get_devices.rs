use crate::app_context::AppContext;
use crate::http_server::utilities::error_json::ErrorJson;
use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};

pub async fn get_devices(context: Data<AppContext>) -> impl Responder {
    match context.devices.all_devices() {
        Ok(devices) => HttpResponse::Ok().json(devices),
        Err(err) => HttpResponse::InternalServerError().json(ErrorJson::from(err)),
    }
}
