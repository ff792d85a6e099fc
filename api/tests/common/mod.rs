//! Shared fixtures for API integration tests: an application state built
//! on the in-memory mock repositories, plus seeding helpers.
#![allow(dead_code)] // each test binary uses a different subset

use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use tf_core::domain::entities::{TutorProfile, User, UserProfile, UserRole};
use tf_core::repositories::{
    MockBookingRepository, MockTutorRepository, MockUserRepository, UserRepository,
};
use tf_core::services::auth::{AuthService, AuthServiceConfig};
use tf_core::services::booking::BookingService;
use tf_core::services::token::{TokenService, TokenServiceConfig};

use tf_api::routes::AppState;

pub const TEST_SECRET: &str = "test-secret-at-least-32-bytes!!";

pub type TestState = AppState<MockUserRepository, MockTutorRepository, MockBookingRepository>;

pub fn test_state() -> web::Data<TestState> {
    let user_repository = Arc::new(MockUserRepository::new());
    let tutor_repository = Arc::new(MockTutorRepository::new());
    let booking_repository = Arc::new(MockBookingRepository::new());

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
        AuthServiceConfig::fast_for_tests(),
    ));
    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&booking_repository),
        Arc::clone(&tutor_repository),
    ));

    web::Data::new(AppState {
        auth_service,
        booking_service,
        token_service,
        user_repository,
        tutor_repository,
    })
}

/// Create an active user and mint an access token for them
pub async fn seed_user(state: &web::Data<TestState>, email: &str, role: UserRole) -> (Uuid, String) {
    let user = User::new(email.to_string(), "irrelevant-hash".to_string(), role);
    let user_id = user.id;
    state
        .user_repository
        .create(user)
        .await
        .expect("seed user");

    let token = state
        .token_service
        .generate_access_token(user_id, role)
        .expect("mint token");
    (user_id, token)
}

/// Create a tutor account with a profile and weekly schedule, visible to
/// both the user and tutor repositories
pub async fn seed_tutor(
    state: &web::Data<TestState>,
    email: &str,
    schedule_json: Option<&str>,
) -> (Uuid, String) {
    let (user_id, token) = seed_user(state, email, UserRole::Tutor).await;

    let user = state
        .user_repository
        .find_by_id(user_id)
        .await
        .expect("lookup")
        .expect("seeded user");
    let profile = UserProfile::new(user_id, "Ada".to_string(), "Lovelace".to_string());

    let mut tutor = TutorProfile::new(user_id, vec!["math".to_string()], 50.0);
    tutor.availability_schedule = schedule_json.map(str::to_string);
    tutor.is_verified = true;

    state.tutor_repository.seed(user, profile, tutor).await;

    (user_id, token)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
