use actix_web::{web, HttpResponse};
use validator::Validate;

use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};
use tf_core::services::booking::CreateBookingData;

use crate::dto::booking::{BookingResponse, CreateBookingRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /api/v1/bookings (students and parents)
///
/// Creates a pending booking. Returns 201 with the booking, 409 when the
/// interval conflicts with an active booking on the tutor's calendar.
pub async fn create_booking<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    context: AuthContext,
    request: web::Json<CreateBookingRequest>,
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
    let data = CreateBookingData {
        tutor_id: request.tutor_id,
        subject: request.subject,
        start_time: request.start_time,
        end_time: request.end_time,
        notes: request.notes,
    };

    match state
        .booking_service
        .create_booking(context.user_id, data)
        .await
    {
        Ok(booking) => HttpResponse::Created().json(BookingResponse::from(booking)),
        Err(error) => handle_domain_error(error),
    }
}
