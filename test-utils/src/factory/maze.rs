//! Maze factory for creating test maze entities.
//!
//! Inserts maze rows with a valid layout so that code decoding the stored maze
//! works against factory-created data.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{comb_layout, next_id, sequential_positions};

/// Secret assigned to factory mazes unless overridden.
pub const DEFAULT_SECRET: &str = "ABCDEFGHIJ";

/// Factory for creating test mazes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::maze::MazeFactory;
///
/// let maze = MazeFactory::new(&db)
///     .dimensions(6, 6)
///     .secret("ZYXWVUTSRQ")
///     .build()
///     .await?;
/// ```
pub struct MazeFactory<'a> {
    db: &'a DatabaseConnection,
    width: u32,
    height: u32,
    seed: i64,
    secret: String,
    layout: Option<String>,
    secret_positions: Option<String>,
}

impl<'a> MazeFactory<'a> {
    /// Creates a new MazeFactory with default values.
    ///
    /// Defaults:
    /// - dimensions: 5 x 4
    /// - seed: auto-incremented
    /// - secret: `DEFAULT_SECRET`
    /// - layout: comb layout matching the dimensions
    /// - secret positions: `1..=secret.len()`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            width: 5,
            height: 4,
            seed: next_id() as i64,
            secret: DEFAULT_SECRET.to_string(),
            layout: None,
            secret_positions: None,
        }
    }

    /// Sets the maze width and height.
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the stored seed.
    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the secret code.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Overrides the stored layout and secret positions verbatim.
    ///
    /// Useful for testing how corrupt rows are handled.
    pub fn raw_layout(mut self, layout: impl Into<String>, positions: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self.secret_positions = Some(positions.into());
        self
    }

    /// Builds and inserts the maze entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::maze::Model)` - Created maze entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::maze::Model, DbErr> {
        let layout = self
            .layout
            .unwrap_or_else(|| comb_layout(self.width, self.height));
        let secret_positions = self
            .secret_positions
            .unwrap_or_else(|| sequential_positions(self.secret.len()));

        entity::maze::ActiveModel {
            id: ActiveValue::NotSet,
            width: ActiveValue::Set(self.width as i32),
            height: ActiveValue::Set(self.height as i32),
            seed: ActiveValue::Set(self.seed),
            secret: ActiveValue::Set(self.secret),
            layout: ActiveValue::Set(layout),
            secret_positions: ActiveValue::Set(secret_positions),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a maze with default values.
///
/// Shorthand for `MazeFactory::new(db).build().await`.
pub async fn create_maze(db: &DatabaseConnection) -> Result<entity::maze::Model, DbErr> {
    MazeFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_maze_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let maze = create_maze(db).await?;

        assert_eq!(maze.width, 5);
        assert_eq!(maze.height, 4);
        assert_eq!(maze.secret, DEFAULT_SECRET);
        assert_eq!(maze.layout.len(), 20);
        assert_eq!(maze.secret_positions, "1,2,3,4,5,6,7,8,9,10");

        Ok(())
    }

    #[tokio::test]
    async fn creates_maze_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let maze = MazeFactory::new(db)
            .dimensions(8, 3)
            .seed(42)
            .secret("QWERTYUIOP")
            .build()
            .await?;

        assert_eq!(maze.width, 8);
        assert_eq!(maze.height, 3);
        assert_eq!(maze.seed, 42);
        assert_eq!(maze.secret, "QWERTYUIOP");
        assert_eq!(maze.layout.len(), 24);

        Ok(())
    }
}
