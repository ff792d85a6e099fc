use actix_web::{web, HttpResponse};

use tf_core::repositories::{BookingRepository, TutorRepository, UserListFilter, UserRepository};
use tf_shared::types::{PaginatedResponse, Pagination};

use crate::dto::user::{UserListQuery, UserWithProfileResponse};
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /api/v1/users (admin only)
///
/// Paginated account listing with role and name/email search filters.
pub async fn list_users<U, T, B>(
    state: web::Data<AppState<U, T, B>>,
    query: web::Query<UserListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    let query = query.into_inner();
    let filter = UserListFilter {
        role: query.role,
        search: query.search,
    };
    let pagination = match query.limit {
        Some(limit) => Pagination::new(query.skip, limit),
        None => Pagination {
            skip: query.skip,
            ..Pagination::default()
        },
    };

    match state.user_repository.list(&filter, &pagination).await {
        Ok(users) => {
            let rows: Vec<UserWithProfileResponse> = users
                .into_iter()
                .map(|(user, profile)| UserWithProfileResponse::new(user, profile))
                .collect();
            HttpResponse::Ok().json(PaginatedResponse::new(rows, &pagination))
        }
        Err(error) => handle_domain_error(error),
    }
}
