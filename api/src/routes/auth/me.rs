use actix_web::{web, HttpResponse};

use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};

use crate::dto::user::UserWithProfileResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/auth/me
///
/// Returns the authenticated account with its profile.
pub async fn me<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    context: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.auth_service.current_user(context.user_id).await {
        Ok((user, profile)) => HttpResponse::Ok().json(UserWithProfileResponse::new(user, profile)),
        Err(error) => handle_domain_error(error),
    }
}
