use crate::app_context::AppContext;
use crate::http_server::utilities::authorization;
use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde_json::json;

pub async fn logout(request: HttpRequest, context: Data<AppContext>) -> impl Responder {
    if let Some(token) = authorization::extract_authorization_token(&request) {
        if let Some(session) = context.sessions.remove(&token).await {
            log::info!("User '{}' logged out", session.username);
        }
    }

    HttpResponse::Ok().json(json!({ "detail": "Logged out" }))
}
