use thiserror::Error;

use crate::maze::MazeError;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A maze row in the database cannot be decoded back into a maze
    ///
    /// Only rows written by something other than this service should ever trigger
    /// this. Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored maze {id} is corrupt: {source}")]
    CorruptStoredMaze {
        /// ID of the maze row
        id: i32,
        /// The underlying decode error
        #[source]
        source: MazeError,
    },
}
