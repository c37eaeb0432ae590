use crate::app_context::AppContext;
use crate::http_server::utilities::error_json::ErrorJson;
use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, Responder};
use libbsmart::DeviceEvent;
use serde_json::json;

pub async fn device_event(context: Data<AppContext>, body: Json<DeviceEvent>) -> impl Responder {
    let event = body.into_inner();

    match context.devices.record_event(&event) {
        Ok(true) => {
            if event.button != libbsmart::NO_ALARM {
                log::warn!(
                    "Alarm {} from device '{}' (battery {}%)",
                    event.button,
                    event.id,
                    event.battery
                );
            } else {
                log::debug!("Heartbeat from device '{}'", event.id);
            }
            HttpResponse::Ok().json(json!({ "detail": format!("Event recorded for device {}", event.id) }))
        }
        Ok(false) => HttpResponse::NotFound().json(ErrorJson::from("Device does not exist")),
        Err(err) => HttpResponse::InternalServerError().json(ErrorJson::from(err)),
    }
}
