//! Environment-based configuration loading for the API binary.

use std::env;

use anyhow::{Context, Result};

use tf_shared::config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, ServerConfig,
};

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().with_context(|| format!("invalid {key}")),
        Err(_) => Ok(default),
    }
}

/// Assemble the full application configuration from environment variables.
///
/// `DATABASE_URL` and `JWT_SECRET` are required; everything else falls back
/// to development defaults.
pub fn load() -> Result<AppConfig> {
    let environment = Environment::from_str_or_default(&var_or("ENVIRONMENT", "development"));

    let mut server = ServerConfig::new(
        var_or("SERVER_HOST", "127.0.0.1"),
        parse_var("SERVER_PORT", 8080u16)?,
    );
    server.workers = parse_var("SERVER_WORKERS", 0usize)?;

    let mut database =
        DatabaseConfig::new(env::var("DATABASE_URL").context("DATABASE_URL must be set")?);
    database.max_connections = parse_var("DATABASE_MAX_CONNECTIONS", database.max_connections)?;
    database.connect_timeout = parse_var("DATABASE_CONNECT_TIMEOUT", database.connect_timeout)?;

    let mut auth = AuthConfig::new(env::var("JWT_SECRET").context("JWT_SECRET must be set")?);
    auth.access_token_expire_minutes =
        parse_var("ACCESS_TOKEN_EXPIRE_MINUTES", auth.access_token_expire_minutes)?;
    auth.refresh_token_expire_days =
        parse_var("REFRESH_TOKEN_EXPIRE_DAYS", auth.refresh_token_expire_days)?;
    auth.bcrypt_cost = parse_var("BCRYPT_COST", auth.bcrypt_cost)?;

    let cors = match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(raw) => CorsConfig {
            allowed_origins: raw.split(',').map(|s| s.trim().to_string()).collect(),
            ..CorsConfig::default()
        },
        Err(_) if !environment.is_production() => CorsConfig::development(),
        Err(_) => CorsConfig::default(),
    };

    Ok(AppConfig {
        environment,
        server,
        database,
        auth,
        cors,
    })
}
