//! Guess data repository for database operations
//!
//! Provides the `GuessRepository` for recording and querying guesses made at a maze's
//! secret.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::guess::{CreateGuessParam, Guess};

/// Repository providing database operations for maze guesses.
pub struct GuessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuessRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a guess.
    ///
    /// # Returns
    /// - `Ok(Guess)` - The recorded guess with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateGuessParam) -> Result<Guess, DbErr> {
        let entity = entity::maze_guess::ActiveModel {
            maze_id: ActiveValue::Set(param.maze_id),
            guess: ActiveValue::Set(param.guess),
            correct: ActiveValue::Set(param.correct),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Guess::from_entity(entity))
    }

    /// Gets every guess made against a maze in the order they were made.
    pub async fn get_by_maze_id(&self, maze_id: i32) -> Result<Vec<Guess>, DbErr> {
        let entities = entity::prelude::MazeGuess::find()
            .filter(entity::maze_guess::Column::MazeId.eq(maze_id))
            .order_by_asc(entity::maze_guess::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Guess::from_entity).collect())
    }

    /// Counts the guesses made against a maze.
    pub async fn count_by_maze_id(&self, maze_id: i32) -> Result<u64, DbErr> {
        entity::prelude::MazeGuess::find()
            .filter(entity::maze_guess::Column::MazeId.eq(maze_id))
            .count(self.db)
            .await
    }

    /// Deletes every guess made against a maze.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of guesses deleted
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete_by_maze_id(&self, maze_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MazeGuess::delete_many()
            .filter(entity::maze_guess::Column::MazeId.eq(maze_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
