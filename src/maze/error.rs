use thiserror::Error;

use super::{MIN_DIMENSION, SECRET_LENGTH};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Requested dimensions cannot hold a maze with a hidden secret.
    ///
    /// Both sides must be at least `MIN_DIMENSION` and the grid must have more cells
    /// than `SECRET_LENGTH` since the first cell never carries a letter.
    #[error(
        "Invalid maze dimensions {width}x{height}: each side must be at least {} and the maze must have more than {} cells",
        MIN_DIMENSION,
        SECRET_LENGTH
    )]
    InvalidDimensions { width: u32, height: u32 },

    /// A stored layout could not be decoded back into a maze.
    #[error("Corrupt maze layout: {0}")]
    CorruptLayout(String),
}
