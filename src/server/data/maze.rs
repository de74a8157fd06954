//! Maze data repository for database operations
//!
//! Provides the `MazeRepository` for managing maze rows in the database. Provides
//! methods to create, get, list and delete mazes as well as handles the conversion of
//! database entity models into domain models for usage within services & controllers.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::maze::{CreateMazeRecordParam, StoredMaze};

/// Repository providing database operations for maze management.
///
/// Generic over the connection so that services can run it inside a transaction.
pub struct MazeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MazeRepository<'a, C> {
    /// Creates a new MazeRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MazeRepository` - new repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a generated maze.
    ///
    /// # Arguments
    /// - `param` - Encoded maze and the seed it was generated from
    ///
    /// # Returns
    /// - `Ok(StoredMaze)` - The created maze with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateMazeRecordParam) -> Result<StoredMaze, DbErr> {
        let entity = entity::maze::ActiveModel {
            width: ActiveValue::Set(param.width as i32),
            height: ActiveValue::Set(param.height as i32),
            seed: ActiveValue::Set(param.seed as i64),
            secret: ActiveValue::Set(param.secret),
            layout: ActiveValue::Set(param.layout),
            secret_positions: ActiveValue::Set(param.secret_positions),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StoredMaze::from_entity(entity))
    }

    /// Finds a maze by ID
    ///
    /// # Returns
    /// - `Ok(Some(StoredMaze))` - The maze if found
    /// - `Ok(None)` - No maze exists with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<StoredMaze>, DbErr> {
        let entity = entity::prelude::Maze::find_by_id(id).one(self.db).await?;

        Ok(entity.map(StoredMaze::from_entity))
    }

    /// Gets a page of mazes ordered by ID, oldest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of mazes to return per page
    ///
    /// # Returns
    /// - `Ok((mazes, total))` - Mazes on the page and the total number of mazes
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<StoredMaze>, u64), DbErr> {
        let paginator = entity::prelude::Maze::find()
            .order_by_asc(entity::maze::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let mazes = entities.into_iter().map(StoredMaze::from_entity).collect();

        Ok((mazes, total))
    }

    /// Deletes the maze of the provided ID
    ///
    /// # Returns
    /// - `Ok(true)` - The maze was deleted
    /// - `Ok(false)` - No maze existed with that ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Maze::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
