use super::wall::{Wall, Walls};

/// A single square of the maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(super) x: u32,
    pub(super) y: u32,
    pub(super) walls: Walls,
    pub(super) secret: Option<char>,
}

impl Cell {
    /// A closed cell: all four walls standing, no secret.
    pub fn new(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            walls: Walls::all(),
            secret: None,
        }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, wall: Wall) -> bool {
        self.walls.contains(wall)
    }

    /// Letter of the secret code hidden in this cell, if any.
    pub fn secret(&self) -> Option<char> {
        self.secret
    }
}
