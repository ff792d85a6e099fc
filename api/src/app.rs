//! Application factory.
//!
//! Builds the actix `App` with all routes and middleware. Kept separate
//! from `main` so integration tests can assemble the same application on
//! top of the in-memory mock repositories.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use tf_core::repositories::{BookingRepository, TutorRepository, UserRepository};
use tf_shared::config::CorsConfig;
use tf_shared::errors::{error_codes, ErrorResponse};

use crate::middleware::{create_cors, JwtAuth, RequireRole};
use crate::routes::{auth, bookings, users, AppState};

/// Create and configure the application with all routes and middleware.
///
/// Per-route `JwtAuth` wrapping keeps public and authenticated endpoints
/// side by side in the same scopes; `RequireRole` sits inside the auth
/// wrap on role-restricted routes.
pub fn create_app<U, T, B>(
    app_state: web::Data<AppState<U, T, B>>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TutorRepository + 'static,
    B: BookingRepository + 'static,
{
    let tokens = Arc::clone(&app_state.token_service);
    let cors = create_cors(cors_config);

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::register::<U, T, B>))
                        .route("/login", web::post().to(auth::login::login::<U, T, B>))
                        .route("/refresh", web::post().to(auth::refresh::refresh::<U, T, B>))
                        .route(
                            "/logout",
                            web::post()
                                .to(auth::logout::logout)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/me",
                            web::get()
                                .to(auth::me::me::<U, T, B>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        ),
                )
                .service(
                    web::scope("/users")
                        .route(
                            "/profile",
                            web::get()
                                .to(users::profile::get_profile::<U, T, B>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/profile",
                            web::put()
                                .to(users::profile::update_profile::<U, T, B>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/tutor/profile",
                            web::get()
                                .to(users::tutor_profile::get_tutor_profile::<U, T, B>)
                                .wrap(RequireRole::tutor())
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/tutor/profile",
                            web::post()
                                .to(users::tutor_profile::upsert_tutor_profile::<U, T, B>)
                                .wrap(RequireRole::tutor())
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route("/tutors", web::get().to(users::tutors::list_tutors::<U, T, B>))
                        .route(
                            "/tutors/{id}",
                            web::get().to(users::tutors::get_tutor::<U, T, B>),
                        )
                        .route(
                            "",
                            web::get()
                                .to(users::admin::list_users::<U, T, B>)
                                .wrap(RequireRole::admin())
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        ),
                )
                .service(
                    web::scope("/bookings")
                        .route(
                            "/availability-slots",
                            web::get().to(bookings::slots::availability_slots::<U, T, B>),
                        )
                        .route(
                            "/check-availability",
                            web::post()
                                .to(bookings::availability::check_availability::<U, T, B>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "",
                            web::post()
                                .to(bookings::create::create_booking::<U, T, B>)
                                .wrap(RequireRole::student())
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "",
                            web::get()
                                .to(bookings::list::list_bookings::<U, T, B>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}",
                            web::get()
                                .to(bookings::detail::get_booking::<U, T, B>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}",
                            web::put()
                                .to(bookings::detail::update_booking::<U, T, B>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(bookings::detail::cancel_booking::<U, T, B>)
                                .wrap(JwtAuth::new(Arc::clone(&tokens))),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tutorflow-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
