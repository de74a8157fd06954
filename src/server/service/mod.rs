//! Business logic layer.
//!
//! Services orchestrate repositories and the maze core on behalf of controllers and
//! work with domain models rather than DTOs.

pub mod guess;
pub mod maze;
