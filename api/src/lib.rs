//! HTTP API layer for the TutorFlow backend.
//!
//! Routes are thin adapters: they validate input, call a core service and
//! translate `DomainError` into HTTP responses. Authentication and role
//! enforcement are explicit middleware, not annotations.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
