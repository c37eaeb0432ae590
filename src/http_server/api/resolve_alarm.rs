use crate::app_context::AppContext;
use crate::http_server::utilities::authorization;
use crate::http_server::utilities::error_json::ErrorJson;
use actix_web::web::{Data, Path};
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde_json::json;

pub async fn resolve_alarm(
    request: HttpRequest,
    context: Data<AppContext>,
    device_id: Path<String>,
) -> impl Responder {
    let session = match authorization::require_admin(&request, &context).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    match context.devices.resolve_alarm(&device_id) {
        Ok(found) => {
            if found {
                log::info!("Alarm of '{device_id}' resolved by '{}'", session.username);
            } else {
                log::debug!("Resolve requested for unknown device '{device_id}'");
            }
            HttpResponse::Ok().json(json!({ "detail": format!("Alarm for {device_id} resolved") }))
        }
        Err(err) => HttpResponse::InternalServerError().json(ErrorJson::from(err)),
    }
}
