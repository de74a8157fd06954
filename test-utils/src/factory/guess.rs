//! Guess factory for creating test maze guess entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guesses against a maze.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guess::GuessFactory;
///
/// let guess = GuessFactory::new(&db, maze.id)
///     .guess("ABCDEFGHIJ")
///     .correct(true)
///     .build()
///     .await?;
/// ```
pub struct GuessFactory<'a> {
    db: &'a DatabaseConnection,
    maze_id: i32,
    guess: String,
    correct: bool,
}

impl<'a> GuessFactory<'a> {
    /// Creates a new GuessFactory with default values.
    ///
    /// Defaults:
    /// - guess: `"ZZZZZZZZZZ"`
    /// - correct: `false`
    pub fn new(db: &'a DatabaseConnection, maze_id: i32) -> Self {
        Self {
            db,
            maze_id,
            guess: "ZZZZZZZZZZ".to_string(),
            correct: false,
        }
    }

    /// Sets the guessed code.
    pub fn guess(mut self, guess: impl Into<String>) -> Self {
        self.guess = guess.into();
        self
    }

    /// Sets whether the guess matched the secret.
    pub fn correct(mut self, correct: bool) -> Self {
        self.correct = correct;
        self
    }

    /// Builds and inserts the guess entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::maze_guess::Model)` - Created guess entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::maze_guess::Model, DbErr> {
        entity::maze_guess::ActiveModel {
            id: ActiveValue::NotSet,
            maze_id: ActiveValue::Set(self.maze_id),
            guess: ActiveValue::Set(self.guess),
            correct: ActiveValue::Set(self.correct),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an incorrect guess with default values for the given maze.
pub async fn create_guess(
    db: &DatabaseConnection,
    maze_id: i32,
) -> Result<entity::maze_guess::Model, DbErr> {
    GuessFactory::new(db, maze_id).build().await
}
