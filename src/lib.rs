//! Procedural mazes explored by echo alone
//!
//! The generator carves a connected maze, scatters hazards away from the
//! shortest route and freezes some straight corridors into ice. Agents only
//! sense the maze through short-range echo probes; the bundled blind solver
//! reaches the exit with edge markers and a backtrack stack.

#![forbid(unsafe_code)]

/// Maze generation, sensing and solving
pub mod algorithm;
/// Statistics over batches of solver runs
pub mod analysis;
/// Command line, configuration, rendering and error handling
pub mod io;
/// Sampling utilities
pub mod math;
/// Grid model: directions, positions and walls
pub mod spatial;

pub use algorithm::generator::{Difficulty, Maze, MazeConfig};
pub use io::error::{MazeError, Result};
