use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use tf_core::services::auth::{AuthService, AuthServiceConfig};
use tf_core::services::booking::BookingService;
use tf_core::services::token::{TokenService, TokenServiceConfig};
use tf_infra::{
    DatabasePool, MySqlBookingRepository, MySqlTutorRepository, MySqlUserRepository,
};

use tf_api::app::create_app;
use tf_api::config;
use tf_api::routes::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting TutorFlow API server");

    let app_config = config::load()?;
    let bind_address = app_config.server.bind_address();

    let pool = DatabasePool::new(&app_config.database)
        .await
        .context("failed to connect to the database")?;
    pool.health_check()
        .await
        .context("database health check failed")?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let tutor_repository = Arc::new(MySqlTutorRepository::new(pool.get_pool().clone()));
    let booking_repository = Arc::new(MySqlBookingRepository::new(pool.get_pool().clone()));

    let token_config = TokenServiceConfig {
        jwt_secret: app_config.auth.jwt_secret.clone(),
        access_token_expiry_minutes: app_config.auth.access_token_expire_minutes,
        refresh_token_expiry_days: app_config.auth.refresh_token_expire_days,
    };
    let token_service = Arc::new(TokenService::new(token_config));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
        AuthServiceConfig {
            bcrypt_cost: app_config.auth.bcrypt_cost,
        },
    ));
    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&booking_repository),
        Arc::clone(&tutor_repository),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        booking_service,
        token_service,
        user_repository,
        tutor_repository,
    });

    let cors_config = app_config.cors.clone();
    let workers = app_config.server.workers;

    info!("Server binding to {bind_address}");

    let mut server =
        HttpServer::new(move || create_app(app_state.clone(), &cors_config));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await?;

    Ok(())
}
