//! Domain & parameter models for maze operations
//!
//! Defines the stored maze domain model, the parameters used to create mazes, and
//! the conversions between entity models, the maze core and DTOs.

use chrono::{DateTime, Utc};

use crate::{
    maze::{Cell, Maze, Wall},
    model::maze::{CellDto, CreateMazeDto, MazeDto, PaginatedMazesDto, WallDto},
    server::error::{internal::InternalError, AppError},
};

/// A maze as persisted in the database.
///
/// Holds the encoded layout rather than the decoded grid; call `to_maze` when the
/// cells are needed.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMaze {
    pub id: i32,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub secret: String,
    pub layout: String,
    pub secret_positions: String,
    pub created_at: DateTime<Utc>,
}

impl StoredMaze {
    /// Converts an entity model to the stored maze domain model
    ///
    /// The seed is stored bit-for-bit as a signed integer and converted back here.
    pub fn from_entity(entity: entity::maze::Model) -> Self {
        Self {
            id: entity.id,
            width: entity.width as u32,
            height: entity.height as u32,
            seed: entity.seed as u64,
            secret: entity.secret,
            layout: entity.layout,
            secret_positions: entity.secret_positions,
            created_at: entity.created_at,
        }
    }

    /// Decodes the stored layout into a maze
    ///
    /// # Returns
    /// - `Ok(Maze)` - The decoded maze
    /// - `Err(AppError::InternalErr)` - The stored row does not
    ///   describe a valid maze
    pub fn to_maze(&self) -> Result<Maze, AppError> {
        let maze = Maze::decode(
            self.width,
            self.height,
            &self.layout,
            &self.secret_positions,
            &self.secret,
        )
        .map_err(|source| InternalError::CorruptStoredMaze {
            id: self.id,
            source,
        })?;

        Ok(maze)
    }

    pub fn into_dto(self) -> MazeDto {
        MazeDto {
            id: self.id,
            width: self.width,
            height: self.height,
            seed: self.seed,
            secret_length: self.secret.chars().count(),
            created_at: self.created_at,
        }
    }
}

/// Page of stored mazes with pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMazes {
    pub mazes: Vec<StoredMaze>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMazes {
    pub fn into_dto(self) -> PaginatedMazesDto {
        PaginatedMazesDto {
            mazes: self.mazes.into_iter().map(StoredMaze::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for generating a new maze
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMazeParam {
    pub width: u32,
    pub height: u32,
    /// Seed for the generator, drawn at random when `None`
    pub seed: Option<u64>,
}

impl From<CreateMazeDto> for CreateMazeParam {
    fn from(dto: CreateMazeDto) -> Self {
        Self {
            width: dto.width,
            height: dto.height,
            seed: dto.seed,
        }
    }
}

/// Parameters for inserting a generated maze
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMazeRecordParam {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub secret: String,
    pub layout: String,
    pub secret_positions: String,
}

impl CreateMazeRecordParam {
    /// Captures everything needed to restore `maze` later
    pub fn from_maze(seed: u64, maze: &Maze) -> Self {
        Self {
            width: maze.width(),
            height: maze.height(),
            seed,
            secret: maze.secret().to_string(),
            layout: maze.encode_layout(),
            secret_positions: maze.encode_positions(),
        }
    }
}

impl From<Wall> for WallDto {
    fn from(wall: Wall) -> Self {
        match wall {
            Wall::North => WallDto::North,
            Wall::East => WallDto::East,
            Wall::South => WallDto::South,
            Wall::West => WallDto::West,
        }
    }
}

impl From<&Cell> for CellDto {
    fn from(cell: &Cell) -> Self {
        CellDto {
            x: cell.x(),
            y: cell.y(),
            walls: cell.walls().iter().map(WallDto::from).collect(),
            secret: cell.secret().map(String::from),
        }
    }
}
