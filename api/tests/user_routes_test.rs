//! Profile, tutor-directory and admin endpoints, including role guards.

mod common;

use actix_web::test;
use serde_json::json;

use tf_api::app::create_app;
use tf_core::domain::entities::UserRole;
use tf_shared::config::CorsConfig;

use common::{bearer, seed_tutor, seed_user, test_state};

#[actix_web::test]
async fn test_profile_round_trip() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (_, token) = seed_user(&state, "profile@example.com", UserRole::Student).await;

    // No profile yet
    let req = test::TestRequest::get()
        .uri("/api/v1/users/profile")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::put()
        .uri("/api/v1/users/profile")
        .insert_header(bearer(&token))
        .set_json(json!({
            "first_name": "Alan",
            "last_name": "Turing",
            "bio": "Enjoys puzzles",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["first_name"], "Alan");
    assert_eq!(body["bio"], "Enjoys puzzles");

    let req = test::TestRequest::get()
        .uri("/api/v1/users/profile")
        .insert_header(bearer(&token))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["last_name"], "Turing");
}

#[actix_web::test]
async fn test_tutor_directory_is_public() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, _) = seed_tutor(
        &state,
        "tutor@example.com",
        Some(r#"{"monday": [["09:00", "12:00"]]}"#),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users/tutors")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["data"][0]["user_id"].as_str().unwrap(),
        tutor_id.to_string()
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/tutors/{tutor_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["hourly_rate"], 50.0);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/tutors/{}", uuid::Uuid::new_v4()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_tutor_profile_requires_tutor_role() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (_, student_token) = seed_user(&state, "student@example.com", UserRole::Student).await;
    let (_, tutor_token) = seed_user(&state, "tutor@example.com", UserRole::Tutor).await;

    let body = json!({
        "subjects": ["math", "physics"],
        "hourly_rate": 42.5,
        "availability": {"monday": [["09:00", "12:00"]]},
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/users/tutor/profile")
        .insert_header(bearer(&student_token))
        .set_json(body.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    let req = test::TestRequest::post()
        .uri("/api/v1/users/tutor/profile")
        .insert_header(bearer(&tutor_token))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["subjects"].as_array().unwrap().len(), 2);
    assert_eq!(body["is_verified"], false);
    assert!(body["availability"]["monday"].is_array());
}

#[actix_web::test]
async fn test_tutor_profile_rejects_malformed_schedule() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (_, tutor_token) = seed_user(&state, "tutor@example.com", UserRole::Tutor).await;

    // Write paths validate the schedule even though read paths tolerate
    // corrupt stored blobs
    let req = test::TestRequest::post()
        .uri("/api/v1/users/tutor/profile")
        .insert_header(bearer(&tutor_token))
        .set_json(json!({
            "subjects": ["math"],
            "hourly_rate": 30.0,
            "availability": {"monday": [["9am", "noon"]]},
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_admin_listing_role_guard() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (_, student_token) = seed_user(&state, "student@example.com", UserRole::Student).await;
    let (_, admin_token) = seed_user(&state, "admin@example.com", UserRole::Admin).await;

    let req = test::TestRequest::get().uri("/api/v1/users").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    let req = test::TestRequest::get()
        .uri("/api/v1/users")
        .insert_header(bearer(&student_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    let req = test::TestRequest::get()
        .uri("/api/v1/users?role=student")
        .insert_header(bearer(&admin_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["email"], "student@example.com");
}
