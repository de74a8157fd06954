//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let maze = factory::create_maze(&db).await?;
//!     let guess = factory::create_guess(&db, maze.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let maze = factory::maze::MazeFactory::new(&db)
//!     .dimensions(8, 6)
//!     .secret("QWERTYUIOP")
//!     .build()
//!     .await?;
//! ```

pub mod guess;
pub mod helpers;
pub mod maze;

pub use guess::create_guess;
pub use maze::create_maze;
