//! Role-based access control middleware.
//!
//! Wraps routes that only certain roles may call. Must sit inside a
//! [`JwtAuth`](super::JwtAuth)-wrapped route: a request that reaches this
//! guard without an [`AuthContext`](super::AuthContext) gets a 401, a
//! request whose role is not on the allow-list gets a 403.

use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;

use tf_core::domain::entities::UserRole;
use tf_core::errors::DomainError;

use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Middleware factory restricting a route to an explicit set of roles
#[derive(Clone)]
pub struct RequireRole {
    allowed: Rc<Vec<UserRole>>,
}

impl RequireRole {
    pub fn new(allowed: impl Into<Vec<UserRole>>) -> Self {
        Self {
            allowed: Rc::new(allowed.into()),
        }
    }

    pub fn admin() -> Self {
        Self::new(vec![UserRole::Admin])
    }

    pub fn tutor() -> Self {
        Self::new(vec![UserRole::Tutor, UserRole::Admin])
    }

    /// Booking creation is a student-only action; parents and admins do not
    /// book sessions on a student's behalf
    pub fn student() -> Self {
        Self::new(vec![UserRole::Student])
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            allowed: Rc::clone(&self.allowed),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    allowed: Rc<Vec<UserRole>>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let allowed = Rc::clone(&self.allowed);

        Box::pin(async move {
            let role = req.extensions().get::<AuthContext>().map(|ctx| ctx.role);

            match role {
                None => Err(ApiError(DomainError::Unauthorized).into()),
                Some(role) if !allowed.contains(&role) => {
                    Err(ApiError(DomainError::Forbidden).into())
                }
                Some(_) => service.call(req).await,
            }
        })
    }
}
