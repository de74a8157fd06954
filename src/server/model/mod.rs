//! Domain and parameter models used inside the server.
//!
//! Repositories convert SeaORM entity models into these types so that entities never
//! leak past the data layer. Controllers convert them into DTOs for responses.

pub mod guess;
pub mod maze;
