//! Booking endpoints over the HTTP surface: creation and conflicts, the
//! public slot resolver, the availability probe and role enforcement.

mod common;

use actix_web::test;
use serde_json::json;

use tf_api::app::create_app;
use tf_core::domain::entities::UserRole;
use tf_shared::config::CorsConfig;

use common::{bearer, seed_tutor, seed_user, test_state};

const WEEKDAY_SCHEDULE: &str =
    r#"{"monday": [["09:00", "12:00"]], "tuesday": [["09:00", "12:00"]]}"#;

/// A Monday comfortably in the future
const MONDAY: &str = "2030-03-11";

fn booking_body(tutor_id: uuid::Uuid, start: &str, end: &str) -> serde_json::Value {
    json!({
        "tutor_id": tutor_id,
        "subject": "math",
        "start_time": format!("{MONDAY}T{start}:00"),
        "end_time": format!("{MONDAY}T{end}:00"),
    })
}

#[actix_web::test]
async fn test_create_booking_and_conflict() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, _) = seed_tutor(&state, "tutor@example.com", Some(WEEKDAY_SCHEDULE)).await;
    let (_, student_token) = seed_user(&state, "student@example.com", UserRole::Student).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&student_token))
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["tutor_id"].as_str().unwrap(), tutor_id.to_string());

    // Overlapping interval conflicts
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&student_token))
        .set_json(booking_body(tutor_id, "09:30", "10:30"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BOOKING_CONFLICT");

    // Back-to-back is allowed at creation: the conflict check is zero-buffer
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&student_token))
        .set_json(booking_body(tutor_id, "10:00", "11:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);
}

#[actix_web::test]
async fn test_create_booking_requires_student_role() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, tutor_token) =
        seed_tutor(&state, "tutor@example.com", Some(WEEKDAY_SCHEDULE)).await;

    // Anonymous
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    // Tutors cannot book themselves
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&tutor_token))
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    // Parents and admins do not book sessions either
    let (_, parent_token) = seed_user(&state, "parent@example.com", UserRole::Parent).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&parent_token))
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    let (_, admin_token) = seed_user(&state, "admin@example.com", UserRole::Admin).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&admin_token))
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
}

#[actix_web::test]
async fn test_availability_slots_are_public_and_buffered() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, _) = seed_tutor(&state, "tutor@example.com", Some(WEEKDAY_SCHEDULE)).await;
    let (_, student_token) = seed_user(&state, "student@example.com", UserRole::Student).await;

    // Book 09:00-10:00 on the Monday
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&student_token))
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    // No auth header: the resolver is public
    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/bookings/availability-slots?tutor_id={tutor_id}&date={MONDAY}&duration=60"
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let slots: Vec<String> = body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap().to_string())
        .collect();

    // The booking blocks through 10:15 (15-minute trailing buffer), so the
    // first bookable hour starts at 10:15
    assert_eq!(slots, vec!["10:15", "10:30", "10:45", "11:00"]);
}

#[actix_web::test]
async fn test_availability_slots_validation() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, _) = seed_tutor(&state, "tutor@example.com", Some(WEEKDAY_SCHEDULE)).await;

    // 45 is not an allowed duration
    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/bookings/availability-slots?tutor_id={tutor_id}&date={MONDAY}&duration=45"
        ))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    // Unparseable date
    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/bookings/availability-slots?tutor_id={tutor_id}&date=11-03-2030&duration=60"
        ))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    // Unknown tutor
    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/bookings/availability-slots?tutor_id={}&date={MONDAY}&duration=60",
            uuid::Uuid::new_v4()
        ))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_corrupt_schedule_yields_empty_slots() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, _) = seed_tutor(&state, "tutor@example.com", Some("{broken")).await;

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/bookings/availability-slots?tutor_id={tutor_id}&date={MONDAY}&duration=30"
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["slots"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_check_availability_reports_conflicts() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, _) = seed_tutor(&state, "tutor@example.com", Some(WEEKDAY_SCHEDULE)).await;
    let (_, student_token) = seed_user(&state, "student@example.com", UserRole::Student).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&student_token))
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    // Probe directly adjacent: zero buffer, no conflict
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings/check-availability")
        .insert_header(bearer(&student_token))
        .set_json(json!({
            "tutor_id": tutor_id,
            "start_time": format!("{MONDAY}T10:00:00"),
            "end_time": format!("{MONDAY}T11:00:00"),
        }))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["is_available"], true);

    // Probe overlapping: conflict listed
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings/check-availability")
        .insert_header(bearer(&student_token))
        .set_json(json!({
            "tutor_id": tutor_id,
            "start_time": format!("{MONDAY}T09:30:00"),
            "end_time": format!("{MONDAY}T10:30:00"),
        }))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["is_available"], false);
    assert_eq!(body["conflicting_bookings"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_booking_detail_hidden_from_strangers() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, _) = seed_tutor(&state, "tutor@example.com", Some(WEEKDAY_SCHEDULE)).await;
    let (_, student_token) = seed_user(&state, "student@example.com", UserRole::Student).await;
    let (_, stranger_token) = seed_user(&state, "other@example.com", UserRole::Student).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&student_token))
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let booking_id = body["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/{booking_id}"))
        .insert_header(bearer(&student_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/{booking_id}"))
        .insert_header(bearer(&stranger_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
}

#[actix_web::test]
async fn test_cancel_before_window() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, _) = seed_tutor(&state, "tutor@example.com", Some(WEEKDAY_SCHEDULE)).await;
    let (_, student_token) = seed_user(&state, "student@example.com", UserRole::Student).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&student_token))
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let booking_id = body["id"].as_str().unwrap().to_string();

    // The session is years away, so the 24h window is open
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/bookings/{booking_id}"))
        .insert_header(bearer(&student_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "cancelled");

    // A cancelled booking cannot be cancelled again
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/bookings/{booking_id}"))
        .insert_header(bearer(&student_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_status_change_reserved_for_tutor() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, tutor_token) =
        seed_tutor(&state, "tutor@example.com", Some(WEEKDAY_SCHEDULE)).await;
    let (_, student_token) = seed_user(&state, "student@example.com", UserRole::Student).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&student_token))
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let booking_id = body["id"].as_str().unwrap().to_string();

    // The student may not confirm their own booking
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/bookings/{booking_id}"))
        .insert_header(bearer(&student_token))
        .set_json(json!({"status": "confirmed"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    // The tutor may
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/bookings/{booking_id}"))
        .insert_header(bearer(&tutor_token))
        .set_json(json!({"status": "confirmed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "confirmed");
}

#[actix_web::test]
async fn test_list_bookings_scoped_to_caller() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let (tutor_id, tutor_token) =
        seed_tutor(&state, "tutor@example.com", Some(WEEKDAY_SCHEDULE)).await;
    let (_, alice_token) = seed_user(&state, "alice@example.com", UserRole::Student).await;
    let (_, bob_token) = seed_user(&state, "bob@example.com", UserRole::Student).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&alice_token))
        .set_json(booking_body(tutor_id, "09:00", "10:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&bob_token))
        .set_json(booking_body(tutor_id, "10:00", "11:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    // Alice sees only her booking, even when asking for everything
    let req = test::TestRequest::get()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&alice_token))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // The tutor sees both sessions on their calendar
    let req = test::TestRequest::get()
        .uri("/api/v1/bookings")
        .insert_header(bearer(&tutor_token))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
