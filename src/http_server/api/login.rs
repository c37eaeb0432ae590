use crate::app_context::AppContext;
use crate::http_server::utilities::error_json::ErrorJson;
use actix_web::web::{self, Data, Json};
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub async fn login(context: Data<AppContext>, body: Json<LoginPayload>) -> impl Responder {
    let LoginPayload { username, password } = body.into_inner();
    let users = context.users.clone();
    let attempted = username.clone();

    // bcrypt verification blocks for the whole configured cost
    let verified = web::block(move || users.verify_user(&username, &password)).await;

    let user = match verified {
        Ok(Ok(Some(user))) => user,
        Ok(Ok(None)) => {
            log::warn!("Failed login attempt for '{attempted}'");
            return HttpResponse::Unauthorized()
                .json(ErrorJson::from("Incorrect username or password"));
        }
        Ok(Err(err)) => return HttpResponse::InternalServerError().json(ErrorJson::from(err)),
        Err(err) => {
            log::error!("Login verification task failed: {err}");
            return HttpResponse::InternalServerError().json(ErrorJson::from(err.to_string()));
        }
    };

    let token = context.sessions.create(&user).await;
    log::info!("User '{}' logged in", user.username);

    HttpResponse::Ok().json(json!({
        "role": user.role,
        "username": user.username,
        "token": token,
    }))
}
