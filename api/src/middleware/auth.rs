//! JWT authentication middleware.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! against the [`TokenService`] and injects an [`AuthContext`] into the
//! request extensions. Routes that need the caller's identity take
//! `AuthContext` as an extractor; routes behind this middleware can rely
//! on it being present.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use tf_core::domain::entities::{Claims, Principal, UserRole};
use tf_core::errors::{DomainError, TokenError};
use tf_core::services::token::TokenService;

use crate::handlers::ApiError;

/// Authenticated caller context, available behind [`JwtAuth`]
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID from the token subject
    pub user_id: Uuid,
    /// Role carried on the access token
    pub role: UserRole,
    /// JWT ID, for audit logging
    pub jti: String,
}

impl AuthContext {
    /// Builds a context from verified access-token claims.
    ///
    /// Fails if the subject is not a UUID or the role claim is missing,
    /// both of which mean the token was not minted by this service.
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims.user_id()?;
        let role = claims
            .user_role()
            .ok_or(DomainError::Token(TokenError::InvalidClaims))?;
        Ok(Self {
            user_id,
            role,
            jti: claims.jti,
        })
    }

    /// The caller as a domain principal, for role-scoped service calls
    pub fn principal(&self) -> Principal {
        Principal::new(self.user_id, self.role)
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(ApiError(DomainError::Unauthorized).into()),
            };

            let claims = token_service
                .verify_access_token(&token)
                .map_err(ApiError)?;
            let auth_context = AuthContext::from_claims(claims).map_err(ApiError)?;

            req.extensions_mut().insert(auth_context);

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError(DomainError::Unauthorized).into());

        ready(result)
    }
}
