use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};
use tf_core::services::booking::UpdateBookingData;

use crate::dto::booking::{BookingResponse, UpdateBookingRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/bookings/{id}
///
/// Visible only to the booking's parties and admins; strangers get 403.
pub async fn get_booking<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    context: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .booking_service
        .get_booking(context.principal(), path.into_inner())
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(BookingResponse::from(booking)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/bookings/{id}
///
/// Any party may edit notes; status changes are reserved for the booking's
/// tutor and admins.
pub async fn update_booking<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    context: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateBookingRequest>,
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
    let data = UpdateBookingData {
        notes: request.notes,
        status: request.status,
    };

    match state
        .booking_service
        .update_booking(context.principal(), path.into_inner(), data)
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(BookingResponse::from(booking)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/bookings/{id}
///
/// Cancels a pending or confirmed booking. Parties must cancel at least
/// 24 hours before the session; admins are exempt from the window.
pub async fn cancel_booking<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    context: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .booking_service
        .cancel_booking(context.principal(), path.into_inner())
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(BookingResponse::from(booking)),
        Err(error) => handle_domain_error(error),
    }
}
