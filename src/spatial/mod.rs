//! Spatial data structures
//!
//! This module contains the grid model:
//! - Directions and positions
//! - Wall storage, bounds and index arithmetic

/// Cardinal directions and integer positions
pub mod direction;
/// Wall grid with bounds and index arithmetic
pub mod grid;

pub use direction::{Direction, Position};
pub use grid::{Grid, Walls};
