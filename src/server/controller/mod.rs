//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into parameters, call the service
//! layer and convert the resulting domain models back into DTOs. Every handler carries
//! a `utoipa::path` annotation which feeds the published OpenAPI document.

pub mod guess;
pub mod health;
pub mod maze;
