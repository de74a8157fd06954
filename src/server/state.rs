//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::config::Config;

/// Upper bounds on the size of mazes clients may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeLimits {
    pub max_width: u32,
    pub max_height: u32,
}

impl MazeLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_width: config.maze_max_width,
            max_height: config.maze_max_height,
        }
    }
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and `MazeLimits` is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Size limits enforced when creating mazes.
    pub limits: MazeLimits,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `limits` - Maximum maze dimensions
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, limits: MazeLimits) -> Self {
        Self { db, limits }
    }
}
