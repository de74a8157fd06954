//! Compact text encoding of a maze for storage.
//!
//! The layout is one lowercase hex digit per cell holding its wall mask, in row-major
//! order. Secret positions are the ascending cell indices holding letters, comma
//! separated. The secret itself is stored alongside and supplies the letters.

use super::{Maze, MazeError, Wall, Walls};

const HEX: &[u8; 16] = b"0123456789abcdef";

impl Maze {
    /// Encodes the wall masks of every cell.
    pub fn encode_layout(&self) -> String {
        self.cells
            .iter()
            .map(|cell| HEX[usize::from(cell.walls.bits())] as char)
            .collect()
    }

    /// Encodes the cell indices holding secret letters.
    pub fn encode_positions(&self) -> String {
        self.secret_positions()
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Rebuilds a maze from its stored encoding.
    ///
    /// # Arguments
    /// - `width` / `height` - Stored dimensions
    /// - `layout` - Output of `encode_layout`
    /// - `positions` - Output of `encode_positions`
    /// - `secret` - The secret code, one letter per position
    ///
    /// # Returns
    /// - `Ok(Maze)` - The decoded maze
    /// - `Err(MazeError::InvalidDimensions)` - Stored dimensions are not a valid maze
    /// - `Err(MazeError::CorruptLayout)` - Layout or positions do not describe a
    ///   consistent maze of that size
    pub fn decode(
        width: u32,
        height: u32,
        layout: &str,
        positions: &str,
        secret: &str,
    ) -> Result<Self, MazeError> {
        let mut maze = Self::closed(width, height)?;
        let total = maze.cells.len();

        let digits: Vec<char> = layout.chars().collect();
        if digits.len() != total {
            return Err(MazeError::CorruptLayout(format!(
                "expected {} cells, found {}",
                total,
                digits.len()
            )));
        }

        for (cell, digit) in maze.cells.iter_mut().zip(digits) {
            cell.walls = digit
                .to_digit(16)
                .and_then(|bits| Walls::from_bits(bits as u8))
                .ok_or_else(|| {
                    MazeError::CorruptLayout(format!("invalid wall digit '{}'", digit))
                })?;
        }

        let positions = parse_positions(positions, total)?;
        let letters: Vec<char> = secret.chars().collect();
        if positions.len() != letters.len() {
            return Err(MazeError::CorruptLayout(format!(
                "{} secret positions for a secret of {} letters",
                positions.len(),
                letters.len()
            )));
        }
        for (pos, letter) in positions.into_iter().zip(letters) {
            maze.cells[pos].secret = Some(letter);
        }
        maze.secret = secret.to_string();

        maze.check_walls()?;

        Ok(maze)
    }

    /// Border walls must stand and shared walls must agree on both sides.
    fn check_walls(&self) -> Result<(), MazeError> {
        for cell in &self.cells {
            for wall in Wall::ALL {
                let consistent = match self.neighbour_index(cell.x, cell.y, wall) {
                    Some(n) => cell.has_wall(wall) == self.cells[n].has_wall(wall.opposite()),
                    None => cell.has_wall(wall),
                };
                if !consistent {
                    return Err(MazeError::CorruptLayout(format!(
                        "inconsistent {:?} wall at {},{}",
                        wall, cell.x, cell.y
                    )));
                }
            }
        }

        Ok(())
    }
}

fn parse_positions(positions: &str, total: usize) -> Result<Vec<usize>, MazeError> {
    if positions.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut parsed: Vec<usize> = Vec::new();
    for raw in positions.split(',') {
        let pos = raw.trim().parse::<usize>().map_err(|e| {
            MazeError::CorruptLayout(format!("invalid secret position '{}': {}", raw, e))
        })?;
        if pos >= total {
            return Err(MazeError::CorruptLayout(format!(
                "secret position {} outside {} cells",
                pos, total
            )));
        }
        if parsed.last().is_some_and(|last| *last >= pos) {
            return Err(MazeError::CorruptLayout(
                "secret positions must be strictly ascending".to_string(),
            ));
        }
        parsed.push(pos);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn generated() -> Maze {
        Maze::generate(9, 7, &mut StdRng::seed_from_u64(21)).unwrap()
    }

    #[test]
    fn decode_restores_encoded_maze() {
        let maze = generated();

        let decoded = Maze::decode(
            maze.width(),
            maze.height(),
            &maze.encode_layout(),
            &maze.encode_positions(),
            maze.secret(),
        )
        .unwrap();

        assert_eq!(decoded, maze);
    }

    #[test]
    fn layout_uses_one_hex_digit_per_cell() {
        let maze = generated();
        let layout = maze.encode_layout();

        assert_eq!(layout.len(), 63);
        assert!(layout.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn rejects_wrong_cell_count() {
        let maze = generated();
        let mut layout = maze.encode_layout();
        layout.pop();

        let result = Maze::decode(9, 7, &layout, &maze.encode_positions(), maze.secret());

        assert!(matches!(result, Err(MazeError::CorruptLayout(_))));
    }

    #[test]
    fn rejects_non_hex_digits() {
        let maze = generated();
        let layout = format!("x{}", &maze.encode_layout()[1..]);

        let result = Maze::decode(9, 7, &layout, &maze.encode_positions(), maze.secret());

        assert!(matches!(result, Err(MazeError::CorruptLayout(_))));
    }

    #[test]
    fn rejects_bad_secret_positions() {
        let maze = generated();
        let layout = maze.encode_layout();

        for positions in [
            "1,2,3",
            "1,2,3,4,5,6,7,8,9,100",
            "2,1,3,4,5,6,7,8,9,10",
            "1,1,3,4,5,6,7,8,9,10",
            "a,2,3,4,5,6,7,8,9,10",
        ] {
            let result = Maze::decode(9, 7, &layout, positions, maze.secret());
            assert!(
                matches!(result, Err(MazeError::CorruptLayout(_))),
                "accepted positions {positions}"
            );
        }
    }

    #[test]
    fn rejects_asymmetric_walls() {
        // Every cell open on all sides breaks the border walls
        let layout = "0".repeat(63);

        let result = Maze::decode(9, 7, &layout, "", "");

        assert!(matches!(result, Err(MazeError::CorruptLayout(_))));
    }
}
