use actix_web::{web, HttpResponse};

use tf_core::repositories::{
    BookingListFilter, BookingRepository, TutorRepository, UserRepository,
};

use crate::dto::booking::{BookingListQuery, BookingResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/bookings
///
/// Students and parents see bookings they made, tutors see their calendar,
/// admins see whatever the filter selects.
pub async fn list_bookings<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    context: AuthContext,
    query: web::Query<BookingListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    let query = query.into_inner();
    let filter = BookingListFilter {
        student_id: query.student_id,
        tutor_id: query.tutor_id,
        status: query.status,
        start_from: query.start_from,
        end_until: query.end_until,
    };

    match state
        .booking_service
        .list_bookings(context.principal(), filter)
        .await
    {
        Ok(bookings) => {
            let rows: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();
            HttpResponse::Ok().json(rows)
        }
        Err(error) => handle_domain_error(error),
    }
}
