use crate::app_context::AppContext;
use crate::http_server::utilities::authorization;
use crate::http_server::utilities::error_json::ErrorJson;
use actix_web::web::{Data, Path};
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde_json::json;

pub async fn delete_device(
    request: HttpRequest,
    context: Data<AppContext>,
    device_id: Path<String>,
) -> impl Responder {
    let session = match authorization::require_admin(&request, &context).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    match context.devices.delete_device(&device_id) {
        Ok(found) => {
            if found {
                log::info!("Device '{device_id}' deleted by '{}'", session.username);
            }
            HttpResponse::Ok().json(json!({ "detail": format!("Device {device_id} deleted") }))
        }
        Err(err) => HttpResponse::InternalServerError().json(ErrorJson::from(err)),
    }
}
