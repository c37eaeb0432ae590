use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use bsmart::http_server::routes;
use libbsmart::Device;

use crate::helpers::{context_setup, test_config};

mod helpers;

macro_rules! login {
    ($app:expr, $username:expr, $password:expr) => {{
        let request = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": $username, "password": $password }))
            .to_request();
        let body: Value = test::call_and_read_body_json($app, request).await;
        body["token"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_login() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(context_setup(test_config())))
            .configure(routes),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "admin", "password": "admin123" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["role"], "admin");
    assert_eq!(body["username"], "admin");
    assert_eq!(body["token"].as_str().unwrap().len(), 32);

    for (username, password) in [("admin", "wrong"), ("nobody", "admin123"), ("", "")] {
        let request = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["detail"], "Incorrect username or password");
    }
}

#[actix_web::test]
async fn test_admin_actions_require_admin_session() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(context_setup(test_config())))
            .configure(routes),
    )
    .await;

    let add = || {
        test::TestRequest::post()
            .uri("/api/add")
            .set_json(json!({ "id": "d1", "location": "Hall" }))
    };

    // no session
    let response = test::call_service(&app, add().to_request()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // unknown token
    let request = add()
        .insert_header((AUTHORIZATION, "Bearer not-a-token"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // regular user
    let user_token = login!(&app, "user", "user123");
    for request in [
        add(),
        test::TestRequest::post().uri("/api/resolve/d1"),
        test::TestRequest::delete().uri("/api/delete/d1"),
    ] {
        let request = request
            .insert_header((AUTHORIZATION, format!("Bearer {user_token}")))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    // nothing was added
    let request = test::TestRequest::get().uri("/api/devices").to_request();
    let devices: Vec<Device> = test::call_and_read_body_json(&app, request).await;
    assert!(devices.is_empty());
}

#[actix_web::test]
async fn test_device_lifecycle() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(context_setup(test_config())))
            .configure(routes),
    )
    .await;
    let token = login!(&app, "admin", "admin123");
    let auth = (AUTHORIZATION, format!("Bearer {token}"));

    // add
    let request = test::TestRequest::post()
        .uri("/api/add")
        .insert_header(auth.clone())
        .set_json(json!({ "id": "d1", "location": "Hall" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // duplicate and incomplete
    for payload in [
        json!({ "id": "d1", "location": "Garage" }),
        json!({ "id": "d2" }),
        json!({ "location": "Garage" }),
    ] {
        let request = test::TestRequest::post()
            .uri("/api/add")
            .insert_header(auth.clone())
            .set_json(payload)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // button press
    let request = test::TestRequest::post()
        .uri("/api/event")
        .set_json(json!({ "id": "d1", "button": 4, "battery": 57 }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = test::TestRequest::get().uri("/api/devices").to_request();
    let devices: Vec<Device> = test::call_and_read_body_json(&app, request).await;
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].id, "d1");
    assert_eq!(devices[0].location, "Hall");
    assert_eq!((devices[0].button, devices[0].battery), (4, 57));
    assert!(devices[0].online);

    // event for an unknown device
    let request = test::TestRequest::post()
        .uri("/api/event")
        .set_json(json!({ "id": "ghost" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // resolve
    let request = test::TestRequest::post()
        .uri("/api/resolve/d1")
        .insert_header(auth.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["detail"], "Alarm for d1 resolved");

    let request = test::TestRequest::get().uri("/api/devices").to_request();
    let devices: Vec<Device> = test::call_and_read_body_json(&app, request).await;
    assert!(!devices[0].has_alarm());
    assert_eq!(devices[0].battery, 57);

    // delete
    let request = test::TestRequest::delete()
        .uri("/api/delete/d1")
        .insert_header(auth.clone())
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = test::TestRequest::get().uri("/api/devices").to_request();
    let devices: Vec<Device> = test::call_and_read_body_json(&app, request).await;
    assert!(devices.is_empty());
}

#[actix_web::test]
async fn test_logout_invalidates_token() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(context_setup(test_config())))
            .configure(routes),
    )
    .await;
    let token = login!(&app, "admin", "admin123");

    let request = test::TestRequest::post()
        .uri("/api/logout")
        .insert_header((AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["detail"], "Logged out");

    let request = test::TestRequest::post()
        .uri("/api/resolve/d1")
        .insert_header((AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // logging out without a session still succeeds
    let request = test::TestRequest::post().uri("/api/logout").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_check_offline() {
    let mut config = test_config();
    config.ping_timeout_sec = 0;
    let context = context_setup(config);
    context.devices.insert_device("d1", "Hall").unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(context))
            .configure(routes),
    )
    .await;

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let request = test::TestRequest::get().uri("/api/check_offline").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["offline"], json!(["d1"]));

    let request = test::TestRequest::get().uri("/api/devices").to_request();
    let devices: Vec<Device> = test::call_and_read_body_json(&app, request).await;
    assert!(!devices[0].online);
}
