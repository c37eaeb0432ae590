use crate::app_context::AppContext;
use crate::db::AddDeviceError;
use crate::http_server::utilities::authorization;
use crate::http_server::utilities::error_json::ErrorJson;
use actix_web::web::{Data, Json};
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct AddDevicePayload {
    #[serde(default)]
    id: String,
    #[serde(default)]
    location: String,
}

pub async fn add_device(
    request: HttpRequest,
    context: Data<AppContext>,
    body: Json<AddDevicePayload>,
) -> impl Responder {
    if let Err(response) = authorization::require_admin(&request, &context).await {
        return response;
    }

    match context.devices.insert_device(&body.id, &body.location) {
        Ok(()) => HttpResponse::Ok().json(json!({ "detail": format!("Device {} added", body.id.trim()) })),
        Err(AddDeviceError::MissingFields) => {
            HttpResponse::BadRequest().json(ErrorJson::from("Device id and location are required"))
        }
        Err(AddDeviceError::AlreadyExists) => {
            HttpResponse::BadRequest().json(ErrorJson::from("Device already exists"))
        }
        Err(AddDeviceError::Storage(err)) => {
            HttpResponse::InternalServerError().json(ErrorJson::from(err))
        }
    }
}
