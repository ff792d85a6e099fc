use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tf_core::errors::DomainError;
use tf_core::repositories::{BookingRepository, TutorListFilter, TutorRepository, UserRepository};
use tf_shared::types::{PaginatedResponse, Pagination};

use crate::dto::tutor::{TutorListQuery, TutorListingResponse};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/users/tutors
///
/// Public tutor directory. Unverified tutors are hidden unless the query
/// asks for them.
pub async fn list_tutors<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    query: web::Query<TutorListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    let query = query.into_inner();
    let filter = TutorListFilter {
        subject: query.subject,
        min_rate: query.min_rate,
        max_rate: query.max_rate,
        verified_only: query.verified_only.unwrap_or(true),
    };
    let pagination = match query.limit {
        Some(limit) => Pagination::new(query.skip, limit),
        None => Pagination {
            skip: query.skip,
            ..Pagination::default()
        },
    };

    match state.tutor_repository.list(&filter, &pagination).await {
        Ok(listings) => {
            let rows: Vec<TutorListingResponse> =
                listings.into_iter().map(Into::into).collect();
            HttpResponse::Ok().json(PaginatedResponse::new(rows, &pagination))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/users/tutors/{id}
pub async fn get_tutor<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.tutor_repository.find_listing(path.into_inner()).await {
        Ok(Some(listing)) => HttpResponse::Ok().json(TutorListingResponse::from(listing)),
        Ok(None) => handle_domain_error(DomainError::not_found("Tutor")),
        Err(error) => handle_domain_error(error),
    }
}
