//! Directional echo probes
//!
//! A probe travels up to [`ECHO_RANGE`] cells and reports only the first
//! thing it meets: a wall, a hazard or the exit. Nothing beyond that first
//! obstruction is revealed, and the delay grows by
//! [`ECHO_DELAY_PER_CELL`] for every cell the pulse crossed before it.

use std::fmt;

use crate::algorithm::generator::Maze;
use crate::io::configuration::{ECHO_DELAY_PER_CELL, ECHO_RANGE};
use crate::spatial::{Direction, Position};

/// Class of obstruction an echo bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EchoKind {
    /// A wall
    Wall,
    /// A hazard cell ("monster")
    Hazard,
    /// The exit
    Exit,
}

impl EchoKind {
    /// Label used in text output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Hazard => "monster",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for EchoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Echo {
    /// What the pulse hit
    pub kind: EchoKind,
    /// Even delay, `0` for the adjacent cell or wall
    pub delay: u32,
}

impl Echo {
    /// Whether the obstruction is right next to the prober
    pub const fn is_immediate(self) -> bool {
        self.delay == 0
    }

    /// Whether the prober would bump into or step onto this obstruction next
    pub const fn blocks_step(self) -> bool {
        self.is_immediate() && matches!(self.kind, EchoKind::Wall | EchoKind::Hazard)
    }
}

impl fmt::Display for Echo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} after {}", self.kind, self.delay)
    }
}

/// Probe from `origin` towards `direction`
///
/// Returns `None` when the pulse fades out or leaves the grid silently.
pub fn send_echo(maze: &Maze, origin: Position, direction: Direction) -> Option<Echo> {
    let grid = maze.grid();
    for distance in 1..=ECHO_RANGE {
        let delay = (distance - 1) as u32 * ECHO_DELAY_PER_CELL;
        let previous = origin.advance(direction, distance - 1);
        if grid.wall_towards(previous, direction) {
            return Some(Echo {
                kind: EchoKind::Wall,
                delay,
            });
        }

        let target = origin.advance(direction, distance);
        if !grid.in_bounds(target) {
            return None;
        }
        if maze.is_hazard(target) {
            return Some(Echo {
                kind: EchoKind::Hazard,
                delay,
            });
        }
        if target == maze.end() {
            return Some(Echo {
                kind: EchoKind::Exit,
                delay,
            });
        }
    }
    None
}
