//! Domain & parameter models for guesses at a maze's secret

use chrono::{DateTime, Utc};

use crate::model::guess::GuessResultDto;

/// A recorded attempt at a maze's secret
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    pub id: i32,
    pub maze_id: i32,
    pub guess: String,
    pub correct: bool,
    pub created_at: DateTime<Utc>,
}

impl Guess {
    pub fn from_entity(entity: entity::maze_guess::Model) -> Self {
        Self {
            id: entity.id,
            maze_id: entity.maze_id,
            guess: entity.guess,
            correct: entity.correct,
            created_at: entity.created_at,
        }
    }

    /// Converts the guess into a DTO
    ///
    /// # Arguments
    /// - `attempts` - Guesses made against the maze up to and including this one
    /// - `secret` - The maze's secret, only exposed when this guess was correct
    pub fn into_dto(self, attempts: u64, secret: &str) -> GuessResultDto {
        GuessResultDto {
            id: self.id,
            maze_id: self.maze_id,
            secret: self.correct.then(|| secret.to_string()),
            guess: self.guess,
            correct: self.correct,
            attempts,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording a guess
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGuessParam {
    pub maze_id: i32,
    pub guess: String,
    pub correct: bool,
}
