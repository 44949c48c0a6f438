//! Ice assignment and slide precomputation
//!
//! Whole corridors are frozen at once. Stepping onto ice carries the walker
//! along the corridor until it reaches normal floor or runs into a wall.

use std::collections::{HashMap, HashSet};
use std::fmt;

use ndarray::Array2;

use crate::algorithm::corridors::Corridor;
use crate::math::sampling::{RandomSelector, at_least_one};
use crate::spatial::{Direction, Grid, Position};

/// Floor material of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Floor {
    /// Walkable without sliding
    #[default]
    Normal,
    /// Ice; entering it starts a slide
    Slippery,
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Slippery => f.write_str("slippery"),
        }
    }
}

/// Per-cell floor materials, stored row-major like the wall grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorMap {
    cells: Array2<Floor>,
}

impl FloorMap {
    /// Floor map with no ice at all
    pub fn normal(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Floor::Normal),
        }
    }

    /// Floor at `pos`; positions off the map read as normal floor
    pub fn get(&self, pos: Position) -> Floor {
        if pos.x < 0 || pos.y < 0 {
            return Floor::Normal;
        }
        self.cells
            .get([pos.y as usize, pos.x as usize])
            .copied()
            .unwrap_or(Floor::Normal)
    }

    /// Whether `pos` is ice
    pub fn is_slippery(&self, pos: Position) -> bool {
        self.get(pos) == Floor::Slippery
    }

    /// Freeze a single cell
    pub fn freeze(&mut self, pos: Position) {
        if pos.x < 0 || pos.y < 0 {
            return;
        }
        if let Some(cell) = self.cells.get_mut([pos.y as usize, pos.x as usize]) {
            *cell = Floor::Slippery;
        }
    }

    /// Number of slippery cells
    pub fn slippery_count(&self) -> usize {
        self.cells.iter().filter(|&&floor| floor == Floor::Slippery).count()
    }
}

/// Corridors that may be frozen
///
/// A corridor qualifies when it has intermediate cells and neither its cells
/// nor its end nodes hold a hazard, so a slide never starts on or lands on a
/// hazard.
pub fn eligible_corridors<'a>(
    corridors: &'a [Corridor],
    hazards: &HashSet<Position>,
) -> Vec<&'a Corridor> {
    corridors
        .iter()
        .filter(|corridor| !corridor.is_empty())
        .filter(|corridor| !corridor.all_cells().any(|pos| hazards.contains(&pos)))
        .collect()
}

/// Freeze a share of the eligible corridors
///
/// Samples `max(1, round(eligible * ratio))` corridors without replacement.
/// No eligible corridors, or a zero ratio, means no ice.
pub fn assign_ice(
    grid: &Grid,
    eligible: &[&Corridor],
    ratio: f64,
    rng: &mut RandomSelector,
) -> FloorMap {
    let mut floor = FloorMap::normal(grid.width(), grid.height());
    let count = at_least_one(eligible.len(), ratio);
    for corridor in rng.sample(eligible, count) {
        for &pos in &corridor.cells {
            floor.freeze(pos);
        }
    }
    log::debug!(
        "froze {count}/{} eligible corridors ({} cells)",
        eligible.len(),
        floor.slippery_count()
    );
    floor
}

/// Where a walker leaving `origin` in `direction` comes to rest
///
/// `None` when a wall blocks the first step. Otherwise the walker advances
/// one cell and keeps going while it stands on ice and the next step is
/// neither walled nor off the grid.
pub fn simulate_slide(
    grid: &Grid,
    floor: &FloorMap,
    origin: Position,
    direction: Direction,
) -> Option<Position> {
    if grid.wall_towards(origin, direction) {
        return None;
    }
    let mut current = grid.neighbor(origin, direction)?;
    while floor.is_slippery(current) && !grid.wall_towards(current, direction) {
        let Some(next) = grid.neighbor(current, direction) else {
            break;
        };
        current = next;
    }
    Some(current)
}

/// Precomputed slide destinations keyed by origin cell and direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideTable {
    destinations: HashMap<(Position, Direction), Position>,
}

impl SlideTable {
    /// Simulate every direction from every origin
    ///
    /// Blocked directions are left out of the table.
    pub fn build(
        grid: &Grid,
        floor: &FloorMap,
        origins: impl IntoIterator<Item = Position>,
    ) -> Self {
        let mut destinations = HashMap::new();
        for origin in origins {
            for direction in Direction::ALL {
                if let Some(dest) = simulate_slide(grid, floor, origin, direction) {
                    destinations.insert((origin, direction), dest);
                }
            }
        }
        Self { destinations }
    }

    /// Destination for a precomputed origin and direction
    pub fn get(&self, origin: Position, direction: Direction) -> Option<Position> {
        self.destinations.get(&(origin, direction)).copied()
    }

    /// All destinations reachable from `origin` in one slide
    pub fn from_origin(&self, origin: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.get(origin, direction))
    }

    /// Number of precomputed entries
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
