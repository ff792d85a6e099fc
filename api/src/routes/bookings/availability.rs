use actix_web::{web, HttpResponse};

use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};

use crate::dto::booking::{AvailabilityResponse, CheckAvailabilityRequest};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /api/v1/bookings/check-availability
///
/// Zero-buffer probe of a proposed interval against the tutor's active
/// bookings. This is advisory only; the store re-checks atomically on
/// insert, so a "free" answer here can still lose to a concurrent booking.
pub async fn check_availability<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    request: web::Json<CheckAvailabilityRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .booking_service
        .check_availability(request.tutor_id, request.start_time, request.end_time)
        .await
    {
        Ok(check) => HttpResponse::Ok().json(AvailabilityResponse::from(check)),
        Err(error) => handle_domain_error(error),
    }
}
