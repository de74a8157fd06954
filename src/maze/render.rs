//! Text and SVG drawings of a maze.

use super::{Maze, Wall};

/// Side length of one cell in the SVG drawing.
const CELL_SIZE: u32 = 25;

/// Draws the maze with ASCII box characters.
///
/// Corners are `+`, horizontal walls `---` and vertical walls `|`. Secret letters
/// sit in the middle of their cell. The drawing has `2 * height + 1` lines of
/// `4 * width + 1` characters each.
pub fn render_ascii(maze: &Maze) -> String {
    let mut out = String::new();

    for y in 0..maze.height() {
        for x in 0..maze.width() {
            out.push('+');
            out.push_str(horizontal(maze, x, y, Wall::North));
        }
        out.push_str("+\n");

        for x in 0..maze.width() {
            out.push(if has_wall(maze, x, y, Wall::West) { '|' } else { ' ' });
            let letter = maze.cell(x, y).and_then(|c| c.secret()).unwrap_or(' ');
            out.push(' ');
            out.push(letter);
            out.push(' ');
        }
        let last = maze.width() - 1;
        out.push(if has_wall(maze, last, y, Wall::East) { '|' } else { ' ' });
        out.push('\n');
    }

    let bottom = maze.height() - 1;
    for x in 0..maze.width() {
        out.push('+');
        out.push_str(horizontal(maze, x, bottom, Wall::South));
    }
    out.push_str("+\n");

    out
}

/// Draws the maze as a standalone SVG document.
///
/// Each cell is `CELL_SIZE` units square on a white background, walls are black
/// lines and secret letters are placed at offset (8, 18) within their cell.
pub fn render_svg(maze: &Maze) -> String {
    let width = maze.width() * CELL_SIZE + 1;
    let height = maze.height() * CELL_SIZE + 1;

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    );
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    out.push_str("<g stroke=\"black\" stroke-width=\"1\" stroke-linecap=\"square\">\n");
    for cell in maze.cells() {
        let x = cell.x() * CELL_SIZE;
        let y = cell.y() * CELL_SIZE;
        for wall in cell.walls().iter() {
            let (x1, y1, x2, y2) = match wall {
                Wall::North => (x, y, x + CELL_SIZE, y),
                Wall::East => (x + CELL_SIZE, y, x + CELL_SIZE, y + CELL_SIZE),
                Wall::South => (x, y + CELL_SIZE, x + CELL_SIZE, y + CELL_SIZE),
                Wall::West => (x, y, x, y + CELL_SIZE),
            };
            out.push_str(&format!(
                "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\"/>\n"
            ));
        }
    }
    out.push_str("</g>\n");

    out.push_str("<g font-family=\"monospace\" font-size=\"14\" fill=\"black\">\n");
    for cell in maze.cells() {
        if let Some(letter) = cell.secret() {
            let x = cell.x() * CELL_SIZE + 8;
            let y = cell.y() * CELL_SIZE + 18;
            out.push_str(&format!("<text x=\"{x}\" y=\"{y}\">{letter}</text>\n"));
        }
    }
    out.push_str("</g>\n</svg>\n");

    out
}

fn has_wall(maze: &Maze, x: u32, y: u32, wall: Wall) -> bool {
    maze.cell(x, y).is_some_and(|c| c.has_wall(wall))
}

fn horizontal(maze: &Maze, x: u32, y: u32, wall: Wall) -> &'static str {
    if has_wall(maze, x, y, wall) {
        "---"
    } else {
        "   "
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn maze() -> Maze {
        Maze::generate(6, 4, &mut StdRng::seed_from_u64(13)).unwrap()
    }

    #[test]
    fn ascii_has_expected_shape() {
        let maze = maze();
        let drawing = render_ascii(&maze);
        let lines: Vec<&str> = drawing.lines().collect();

        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|l| l.chars().count() == 25));
        assert_eq!(lines[0], "+---+---+---+---+---+---+");
        assert_eq!(lines[8], "+---+---+---+---+---+---+");
        assert!(lines[1].starts_with('|') && lines[1].ends_with('|'));
    }

    #[test]
    fn ascii_shows_secret_letters_in_order() {
        let maze = maze();
        let drawing = render_ascii(&maze);

        let letters: String = drawing.chars().filter(|c| c.is_ascii_uppercase()).collect();

        assert_eq!(letters, maze.secret());
    }

    #[test]
    fn svg_draws_every_wall_and_letter() {
        let maze = maze();
        let drawing = render_svg(&maze);

        let walls: usize = maze.cells().iter().map(|c| c.walls().len()).sum();

        assert!(drawing.starts_with("<svg"));
        assert!(drawing.contains("width=\"151\" height=\"101\""));
        assert_eq!(drawing.matches("<line ").count(), walls);
        assert_eq!(drawing.matches("<text ").count(), maze.secret().len());
    }
}
