//! ASCII rendering of a maze
//!
//! Legend: `S` start, `E` exit, `M` hazard, `*` solution path on normal
//! floor, `#` solution path on ice, `~` ice off the path.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::algorithm::generator::Maze;
use crate::spatial::{Direction, Position};

/// Three-character content of a cell
fn cell_glyph(maze: &Maze, pos: Position, path: &HashSet<Position>) -> &'static str {
    let icy = maze.floor().is_slippery(pos);
    if pos == maze.start() {
        " S "
    } else if pos == maze.end() {
        " E "
    } else if maze.is_hazard(pos) {
        " M "
    } else if path.contains(&pos) {
        if icy { " # " } else { " * " }
    } else if icy {
        " ~ "
    } else {
        "   "
    }
}

/// Render the maze as a block of text, one line per wall row
pub fn render_ascii(maze: &Maze) -> String {
    let path: HashSet<Position> = maze.solution_path().iter().copied().collect();
    let width = maze.width() as i32;
    let height = maze.height() as i32;
    let mut out = String::new();

    out.push('+');
    out.push_str(&"---+".repeat(maze.width()));
    out.push('\n');

    for y in 0..height {
        out.push('|');
        for x in 0..width {
            let pos = Position::new(x, y);
            out.push_str(cell_glyph(maze, pos, &path));
            out.push(if maze.grid().wall_towards(pos, Direction::Right) {
                '|'
            } else {
                ' '
            });
        }
        out.push('\n');

        out.push('+');
        for x in 0..width {
            let pos = Position::new(x, y);
            out.push_str(if maze.grid().wall_towards(pos, Direction::Down) {
                "---+"
            } else {
                "   +"
            });
        }
        out.push('\n');
    }

    let _ = write!(
        out,
        "Path ({} steps): {}",
        maze.solution_path().len().saturating_sub(1),
        maze.solution_path()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    );
    out
}
