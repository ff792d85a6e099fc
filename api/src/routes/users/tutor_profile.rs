use actix_web::{web, HttpResponse};
use validator::Validate;

use tf_core::domain::entities::TutorProfile;
use tf_core::domain::value_objects::WeeklySchedule;
use tf_core::errors::DomainError;
use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};

use crate::dto::tutor::{TutorProfileRequest, TutorResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/users/tutor/profile
pub async fn get_tutor_profile<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    context: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .tutor_repository
        .find_by_user_id(context.user_id)
        .await
    {
        Ok(Some(tutor)) => HttpResponse::Ok().json(TutorResponse::from(tutor)),
        Ok(None) => handle_domain_error(DomainError::not_found("Tutor profile")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/users/tutor/profile
///
/// Creates or replaces the caller's tutor profile. The availability blob
/// is validated on write; verification status and rating are preserved on
/// update and never settable through this endpoint.
pub async fn upsert_tutor_profile<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    context: AuthContext,
    request: web::Json<TutorProfileRequest>,
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

    let schedule = match request.availability {
        Some(value) => match WeeklySchedule::from_json(&value.to_string()) {
            Ok(schedule) => Some(schedule),
            Err(error) => return handle_domain_error(error),
        },
        None => None,
    };

    let existing = match state
        .tutor_repository
        .find_by_user_id(context.user_id)
        .await
    {
        Ok(existing) => existing,
        Err(error) => return handle_domain_error(error),
    };

    let mut profile = match existing {
        Some(mut profile) => {
            profile.update_offering(request.subjects, request.hourly_rate);
            profile
        }
        None => TutorProfile::new(context.user_id, request.subjects, request.hourly_rate),
    };
    if let Some(schedule) = schedule {
        profile.set_schedule(&schedule);
    }

    match state.tutor_repository.upsert(profile).await {
        Ok(profile) => HttpResponse::Ok().json(TutorResponse::from(profile)),
        Err(error) => handle_domain_error(error),
    }
}
