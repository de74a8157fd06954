use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateMazeDto {
    pub width: u32,
    pub height: u32,
    /// Fixed seed to reproduce a maze, a random one is drawn when omitted
    #[serde(default)]
    pub seed: Option<u64>,
}

/// A stored maze. The secret is never part of this representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MazeDto {
    pub id: i32,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub secret_length: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedMazesDto {
    pub mazes: Vec<MazeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WallDto {
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CellDto {
    pub x: u32,
    pub y: u32,
    /// Walls still standing around the cell, clockwise from north
    pub walls: Vec<WallDto>,
    /// Letter of the secret code hidden in this cell
    pub secret: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Ascii,
    Svg,
}
