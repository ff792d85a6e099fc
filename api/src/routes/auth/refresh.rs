use actix_web::{web, HttpResponse};

use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};

use crate::dto::auth::{RefreshResponse, RefreshTokenRequest};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a valid refresh token for a fresh access token. The refresh
/// token itself is not rotated.
pub async fn refresh<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(access_token) => HttpResponse::Ok().json(RefreshResponse { access_token }),
        Err(error) => handle_domain_error(error),
    }
}
