use actix_web::{web, HttpResponse};
use validator::Validate;

use tf_core::domain::entities::UserProfile;
use tf_core::errors::DomainError;
use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};

use crate::dto::user::{ProfileResponse, UpdateProfileRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/users/profile
pub async fn get_profile<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    context: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.user_repository.find_profile(context.user_id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(ProfileResponse::from(profile)),
        Ok(None) => handle_domain_error(DomainError::not_found("Profile")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/users/profile
///
/// Full replacement: optional fields omitted from the body are cleared.
pub async fn update_profile<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    context: AuthContext,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let request = request.into_inner();
    let mut profile = UserProfile::new(context.user_id, request.first_name, request.last_name);
    profile.phone = request.phone;
    profile.address = request.address;
    profile.bio = request.bio;
    profile.avatar_url = request.avatar_url;

    match state.user_repository.upsert_profile(profile).await {
        Ok(profile) => HttpResponse::Ok().json(ProfileResponse::from(profile)),
        Err(error) => handle_domain_error(error),
    }
}
