//! End-to-end authentication flow over the HTTP surface, backed by the
//! in-memory mock repositories.

mod common;

use actix_web::test;
use serde_json::json;

use tf_api::app::create_app;
use tf_shared::config::CorsConfig;

use common::{bearer, test_state};

fn register_body(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "password": "hunter2hunter2",
        "first_name": "Grace",
        "last_name": "Hopper",
        "role": "student",
    })
}

#[actix_web::test]
async fn test_register_login_me_flow() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    // Register
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("grace@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], "grace@example.com");
    assert_eq!(body["user"]["role"], "student");
    assert!(body["user"]["password_hash"].is_null());
    assert_eq!(body["profile"]["first_name"], "Grace");

    // Login
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "grace@example.com", "password": "hunter2hunter2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let access_token = body["tokens"]["access_token"].as_str().unwrap().to_string();
    let refresh_token = body["tokens"]["refresh_token"].as_str().unwrap().to_string();
    assert!(body["tokens"]["expires_in"].as_i64().unwrap() > 0);

    // Current user
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer(&access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "grace@example.com");

    // Refresh
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(json!({"refresh_token": refresh_token}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["access_token"].as_str().unwrap().len() > 20);
}

#[actix_web::test]
async fn test_register_duplicate_email_conflicts() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("dup@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("dup@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "EMAIL_TAKEN");
}

#[actix_web::test]
async fn test_register_rejects_short_password() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let mut body = register_body("short@example.com");
    body["password"] = json!("short");
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_login_wrong_password_unauthorized() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("lock@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "lock@example.com", "password": "wrong-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Unknown email reads the same as a wrong password
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "nobody@example.com", "password": "hunter2hunter2"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}

#[actix_web::test]
async fn test_me_requires_token() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_refresh_token_cannot_authenticate_requests() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body("swap@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "swap@example.com", "password": "hunter2hunter2"}))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let refresh_token = body["tokens"]["refresh_token"].as_str().unwrap().to_string();

    // A refresh token in the Authorization header must not pass the guard
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer(&refresh_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}

#[actix_web::test]
async fn test_health_check_is_public() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
