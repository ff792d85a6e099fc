use actix_web::{web, HttpResponse};
use validator::Validate;

use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};
use tf_core::services::auth::RegisterData;

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Creates a user account with its profile. Returns 201 with the new
/// account, 409 when the email is already registered.
pub async fn register<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    request: web::Json<RegisterRequest>,
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
    let data = RegisterData {
        email: request.email,
        password: request.password,
        first_name: request.first_name,
        last_name: request.last_name,
        role: request.role,
    };

    match state.auth_service.register(data).await {
        Ok((user, profile)) => HttpResponse::Created().json(RegisterResponse {
            user: user.into(),
            profile: profile.into(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
