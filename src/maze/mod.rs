//! Maze generation core.
//!
//! Builds rectangular "perfect" mazes (exactly one route between any two cells) with a
//! secret code hidden in a handful of cells. Generation carves passages with a
//! randomised depth-first search and takes the random number generator as a parameter,
//! so a seeded generator always reproduces the same maze.
//!
//! This module performs no I/O. Persistence stores the output of `encode_layout` and
//! `encode_positions`, and `decode` rebuilds the maze from them.

mod cell;
mod error;
mod layout;
pub mod render;
mod wall;

use rand::{seq::index, Rng};

pub use cell::Cell;
pub use error::MazeError;
pub use wall::{Wall, Walls};

/// Number of letters in a maze's secret code.
pub const SECRET_LENGTH: usize = 10;

/// Smallest allowed width or height.
pub const MIN_DIMENSION: u32 = 2;

/// A generated maze.
///
/// Cells are stored row-major, so the cell at `(x, y)` lives at index `x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    secret: String,
}

impl Maze {
    /// Generates a new maze of the given size.
    ///
    /// A secret of `SECRET_LENGTH` uppercase letters is spread over distinct cells in
    /// ascending row-major order, skipping the first cell. Passages are then carved
    /// from a random starting cell until every cell has been visited.
    ///
    /// # Arguments
    /// - `width` - Number of columns, at least `MIN_DIMENSION`
    /// - `height` - Number of rows, at least `MIN_DIMENSION`
    /// - `rng` - Source of randomness for the secret and the carving walk
    ///
    /// # Returns
    /// - `Ok(Maze)` - Fully carved maze
    /// - `Err(MazeError::InvalidDimensions)` - Dimensions too small to hold the secret
    pub fn generate<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let mut maze = Self::closed(width, height)?;

        maze.hide_secret(rng);
        maze.carve(rng);

        Ok(maze)
    }

    /// Grid of fully walled cells with no secret.
    fn closed(width: u32, height: u32) -> Result<Self, MazeError> {
        let cell_count = u64::from(width) * u64::from(height);
        if width < MIN_DIMENSION || height < MIN_DIMENSION || cell_count <= SECRET_LENGTH as u64
        {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
            secret: String::new(),
        })
    }

    fn hide_secret<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let secret: String = (0..SECRET_LENGTH)
            .map(|_| rng.random_range('A'..='Z'))
            .collect();

        // Cell 0 never holds a letter.
        let mut positions: Vec<usize> = index::sample(rng, self.cells.len() - 1, SECRET_LENGTH)
            .into_iter()
            .map(|p| p + 1)
            .collect();
        positions.sort_unstable();

        for (pos, letter) in positions.into_iter().zip(secret.chars()) {
            self.cells[pos].secret = Some(letter);
        }

        self.secret = secret;
    }

    /// Recursive backtracker driven by an explicit stack.
    fn carve<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let total = self.cells.len();
        let mut visited = vec![false; total];
        let mut stack = Vec::with_capacity(total);

        let mut current = rng.random_range(0..total);
        visited[current] = true;
        let mut visited_count = 1;

        while visited_count < total {
            let unvisited: Vec<(Wall, usize)> = self
                .neighbours(current)
                .filter(|(_, idx)| !visited[*idx])
                .collect();

            if unvisited.is_empty() {
                match stack.pop() {
                    Some(previous) => current = previous,
                    None => break,
                }
                continue;
            }

            let (heading, next) = unvisited[rng.random_range(0..unvisited.len())];
            self.cells[current].walls.remove(heading);
            self.cells[next].walls.remove(heading.opposite());

            stack.push(current);
            visited[next] = true;
            visited_count += 1;
            current = next;
        }
    }

    /// Neighbouring cell indices inside the grid, keyed by the wall between them.
    fn neighbours(&self, idx: usize) -> impl Iterator<Item = (Wall, usize)> + '_ {
        let cell = &self.cells[idx];
        let (x, y) = (cell.x, cell.y);
        Wall::ALL
            .into_iter()
            .filter_map(move |wall| self.neighbour_index(x, y, wall).map(|n| (wall, n)))
    }

    fn neighbour_index(&self, x: u32, y: u32, wall: Wall) -> Option<usize> {
        let (dx, dy) = wall.offset();
        let nx = u32::try_from(i64::from(x) + dx).ok()?;
        let ny = u32::try_from(i64::from(y) + dy).ok()?;
        self.index(nx, ny)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (x + y * self.width) as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full secret code.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Whether a passage leads from `(x, y)` through `wall` into a neighbouring cell.
    pub fn is_open(&self, x: u32, y: u32, wall: Wall) -> bool {
        match self.cell(x, y) {
            Some(cell) => !cell.has_wall(wall) && self.neighbour_index(x, y, wall).is_some(),
            None => false,
        }
    }

    /// Number of open walls between pairs of cells.
    pub fn passages(&self) -> usize {
        self.cells
            .iter()
            .map(|c| {
                usize::from(self.is_open(c.x, c.y, Wall::East))
                    + usize::from(self.is_open(c.x, c.y, Wall::South))
            })
            .sum()
    }

    /// Indices of the cells holding secret letters, ascending.
    pub fn secret_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.secret.map(|_| idx))
            .collect()
    }
}
