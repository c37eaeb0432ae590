use crate::app_context::AppContext;
use crate::http_server::utilities::error_json::ErrorJson;
use crate::monitor;
use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub async fn check_offline(context: Data<AppContext>) -> impl Responder {
    match monitor::check_offline(&context) {
        Ok(offline) => HttpResponse::Ok().json(json!({
            "detail": "Device status updated",
            "offline": offline,
        })),
        Err(err) => HttpResponse::InternalServerError().json(ErrorJson::from(err)),
    }
}
