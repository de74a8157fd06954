use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuessDto {
    pub guess: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuessResultDto {
    pub id: i32,
    pub maze_id: i32,
    pub guess: String,
    pub correct: bool,
    /// Number of guesses made against the maze so far, this one included
    pub attempts: u64,
    /// The secret, only revealed once guessed correctly
    pub secret: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuessHistoryDto {
    pub guesses: Vec<GuessResultDto>,
    pub solved: bool,
}
