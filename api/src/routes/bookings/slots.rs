use actix_web::{web, HttpResponse};

use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};

use crate::dto::booking::{SlotQuery, SlotsResponse};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/bookings/availability-slots (public)
///
/// Resolves the bookable session start times for a tutor on a date.
/// Existing active bookings block their interval plus a 15-minute trailing
/// buffer. A tutor without a usable schedule for that weekday yields an
/// empty list, not an error.
pub async fn availability_slots<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    query: web::Query<SlotQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    let query = query.into_inner();

    match state
        .booking_service
        .available_slots(query.tutor_id, &query.date, query.duration)
        .await
    {
        Ok(slots) => HttpResponse::Ok().json(SlotsResponse {
            tutor_id: query.tutor_id,
            date: query.date,
            duration_minutes: query.duration,
            slots,
        }),
        Err(error) => handle_domain_error(error),
    }
}
