use actix_web::{web, HttpResponse};
use validator::Validate;

use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};

use crate::dto::auth::{AuthResponse, LoginRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Verifies credentials and issues a token pair. Wrong email and wrong
/// password are indistinguishable to the caller (both 401).
pub async fn login<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(authenticated) => HttpResponse::Ok().json(AuthResponse {
            user: authenticated.user.into(),
            profile: authenticated.profile.map(Into::into),
            tokens: authenticated.tokens.into(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
