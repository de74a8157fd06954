//! Guess service for business logic.
//!
//! Checks guesses against a maze's secret, records every attempt and only reveals the
//! secret once it has been guessed.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{guess::GuessRepository, maze::MazeRepository},
    error::AppError,
    model::{
        guess::{CreateGuessParam, Guess},
        maze::StoredMaze,
    },
    service::maze::not_found,
};

/// Result of checking a single guess.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub guess: Guess,
    /// Guesses made against the maze, this one included
    pub attempts: u64,
    pub maze: StoredMaze,
}

/// Every guess made against a maze, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessHistory {
    pub guesses: Vec<Guess>,
    pub maze: StoredMaze,
}

impl GuessHistory {
    /// Whether any guess so far was correct.
    pub fn solved(&self) -> bool {
        self.guesses.iter().any(|g| g.correct)
    }
}

/// Service providing business logic for guessing maze secrets.
pub struct GuessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a guess against the maze's secret and records it.
    ///
    /// The guess is trimmed and uppercased before comparison, so `" abc "` and `"ABC"`
    /// are the same guess.
    ///
    /// # Arguments
    /// - `maze_id` - ID of the maze being guessed
    /// - `guess` - The guessed secret as submitted
    ///
    /// # Returns
    /// - `Ok(GuessOutcome)` - The recorded guess and the running attempt count
    /// - `Err(AppError::BadRequest)` - The guess is empty after trimming
    /// - `Err(AppError::NotFound)` - No maze exists with that ID
    /// - `Err(AppError::DbErr)` - Database error while recording the guess
    pub async fn guess(&self, maze_id: i32, guess: &str) -> Result<GuessOutcome, AppError> {
        let normalized = normalize(guess);
        if normalized.is_empty() {
            return Err(AppError::BadRequest("Guess must not be empty".to_string()));
        }

        let txn = self.db.begin().await?;

        let Some(maze) = MazeRepository::new(&txn).find_by_id(maze_id).await? else {
            txn.rollback().await?;
            return Err(not_found(maze_id));
        };

        let correct = normalized == maze.secret;

        // Insert and count must share one transaction
        let guess_repo = GuessRepository::new(&txn);
        let guess = guess_repo
            .create(CreateGuessParam {
                maze_id,
                guess: normalized,
                correct,
            })
            .await?;
        let attempts = guess_repo.count_by_maze_id(maze_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Guess {} for maze {} was {} (attempt {})",
            guess.id,
            maze_id,
            if correct { "correct" } else { "wrong" },
            attempts
        );

        Ok(GuessOutcome {
            guess,
            attempts,
            maze,
        })
    }

    /// Lists every guess made against a maze.
    ///
    /// # Returns
    /// - `Ok(GuessHistory)` - Guesses oldest first
    /// - `Err(AppError::NotFound)` - No maze exists with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn history(&self, maze_id: i32) -> Result<GuessHistory, AppError> {
        let maze = MazeRepository::new(self.db)
            .find_by_id(maze_id)
            .await?
            .ok_or_else(|| not_found(maze_id))?;

        let guesses = GuessRepository::new(self.db)
            .get_by_maze_id(maze_id)
            .await?;

        Ok(GuessHistory { guesses, maze })
    }
}

fn normalize(guess: &str) -> String {
    guess.trim().to_uppercase()
}
