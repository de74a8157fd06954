//! Maze service for business logic.
//!
//! Generates mazes within the configured limits, persists them, and serves cells and
//! renderings decoded from the stored layout.

use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    maze::{render, Cell, Maze},
    model::maze::RenderFormat,
    server::{
        data::{guess::GuessRepository, maze::MazeRepository},
        error::AppError,
        model::maze::{CreateMazeParam, CreateMazeRecordParam, PaginatedMazes, StoredMaze},
        state::MazeLimits,
    },
};

/// Largest page size clients may request.
pub const MAX_PER_PAGE: u64 = 100;

/// Service providing business logic for maze management.
pub struct MazeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MazeService<'a> {
    /// Creates a new MazeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MazeService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates and stores a new maze.
    ///
    /// Uses the requested seed when provided, otherwise draws one from the thread
    /// RNG. The seed is stored with the maze so it can be reproduced later.
    ///
    /// # Arguments
    /// - `param` - Requested dimensions and optional seed
    /// - `limits` - Maximum dimensions allowed by configuration
    ///
    /// # Returns
    /// - `Ok(StoredMaze)` - The stored maze
    /// - `Err(AppError::BadRequest)` - Dimensions exceed the configured limits
    /// - `Err(AppError::MazeErr(InvalidDimensions))` - Dimensions too small for a maze
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateMazeParam,
        limits: MazeLimits,
    ) -> Result<StoredMaze, AppError> {
        if param.width > limits.max_width || param.height > limits.max_height {
            return Err(AppError::BadRequest(format!(
                "Maze dimensions {}x{} exceed the maximum of {}x{}",
                param.width, param.height, limits.max_width, limits.max_height
            )));
        }

        let seed = param.seed.unwrap_or_else(|| rand::rng().random());
        let maze = Maze::generate(param.width, param.height, &mut StdRng::seed_from_u64(seed))?;

        let stored = MazeRepository::new(self.db)
            .create(CreateMazeRecordParam::from_maze(seed, &maze))
            .await?;

        tracing::info!(
            "Created maze {} ({}x{}, seed {})",
            stored.id,
            stored.width,
            stored.height,
            stored.seed
        );

        Ok(stored)
    }

    /// Gets a stored maze by ID.
    ///
    /// # Returns
    /// - `Ok(StoredMaze)` - The maze
    /// - `Err(AppError::NotFound)` - No maze exists with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, id: i32) -> Result<StoredMaze, AppError> {
        MazeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Gets a page of stored mazes.
    ///
    /// `per_page` is clamped to `1..=MAX_PER_PAGE`. The row offset `page * per_page` must
    /// fit in an `i64`, the widest offset SQLite accepts.
    ///
    /// # Returns
    /// - `Ok(PaginatedMazes)` - Mazes on the requested page with pagination metadata
    /// - `Err(AppError::BadRequest)` - The page lies beyond any representable offset
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn list(&self, page: u64, per_page: u64) -> Result<PaginatedMazes, AppError> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        if page
            .checked_mul(per_page)
            .filter(|offset| *offset <= i64::MAX as u64)
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Page {} is out of range for {} entries per page",
                page, per_page
            )));
        }

        let (mazes, total) = MazeRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedMazes {
            mazes,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    /// Gets a single cell of a stored maze.
    ///
    /// # Returns
    /// - `Ok(Cell)` - The cell with its walls and secret letter, if any
    /// - `Err(AppError::NotFound)` - No maze exists with that ID
    /// - `Err(AppError::BadRequest)` - Coordinates lie outside the maze
    /// - `Err(AppError::InternalErr)` - The stored layout is corrupt
    pub async fn get_cell(&self, id: i32, x: u32, y: u32) -> Result<Cell, AppError> {
        let maze = self.get(id).await?.to_maze()?;

        maze.cell(x, y).cloned().ok_or_else(|| {
            AppError::BadRequest(format!(
                "Cell {},{} lies outside the {}x{} maze",
                x,
                y,
                maze.width(),
                maze.height()
            ))
        })
    }

    /// Renders a stored maze in the requested format.
    ///
    /// # Returns
    /// - `Ok(String)` - ASCII drawing or SVG document
    /// - `Err(AppError::NotFound)` - No maze exists with that ID
    /// - `Err(AppError::InternalErr)` - The stored layout is corrupt
    pub async fn render(&self, id: i32, format: RenderFormat) -> Result<String, AppError> {
        let maze = self.get(id).await?.to_maze()?;

        Ok(match format {
            RenderFormat::Ascii => render::render_ascii(&maze),
            RenderFormat::Svg => render::render_svg(&maze),
        })
    }

    /// Deletes a maze together with its guesses.
    ///
    /// # Returns
    /// - `Ok(())` - The maze and its guesses were deleted
    /// - `Err(AppError::NotFound)` - No maze exists with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let guesses = GuessRepository::new(&txn).delete_by_maze_id(id).await?;
        let deleted = MazeRepository::new(&txn).delete(id).await?;

        if !deleted {
            txn.rollback().await?;
            return Err(not_found(id));
        }

        txn.commit().await?;

        tracing::info!("Deleted maze {} and {} guesses", id, guesses);

        Ok(())
    }
}

pub(super) fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Maze {} not found", id))
}
