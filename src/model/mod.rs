//! Data transfer objects shared by the HTTP API.
//!
//! These are the request and response bodies described in the published OpenAPI
//! document. Server-side domain models live in `server::model` and are converted into
//! these types at the controller boundary.

pub mod api;
pub mod guess;
pub mod maze;
