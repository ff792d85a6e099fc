//! CORS middleware built from the shared [`CorsConfig`].

use actix_cors::Cors;
use actix_web::http::{header, Method};

use tf_shared::config::CorsConfig;

/// Builds the CORS middleware from configuration.
///
/// A `"*"` entry in `allowed_origins` switches to any-origin mode, which
/// cannot carry credentials; explicit origins keep credential support.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age as usize);

    if config.allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    for origin in &config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_from_defaults() {
        let _cors = create_cors(&CorsConfig::default());
    }

    #[test]
    fn test_create_cors_permissive() {
        let _cors = create_cors(&CorsConfig::development());
    }
}
