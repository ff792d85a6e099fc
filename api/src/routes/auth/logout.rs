use actix_web::HttpResponse;

use crate::dto::auth::LogoutResponse;
use crate::middleware::AuthContext;

/// Handler for POST /api/v1/auth/logout
///
/// Tokens are stateless, so logout is a client-side discard; the endpoint
/// exists so clients have a definite point to drop their tokens, and the
/// JWT ID lands in the log for audit.
pub async fn logout(context: AuthContext) -> HttpResponse {
    log::info!("user {} logged out (jti {})", context.user_id, context.jti);

    HttpResponse::Ok().json(LogoutResponse {
        message: "Logged out".to_string(),
    })
}
