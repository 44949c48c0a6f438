//! Node and corridor extraction from a carved grid
//!
//! A node is any cell whose open degree differs from two, plus the start and
//! the exit. A corridor is a straight run between two nodes whose
//! intermediate cells all have open degree two and stay open along the run.
//! Extraction only reads the grid.

use crate::spatial::{Direction, Grid, Position};

/// Straight run of degree-two cells between two nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corridor {
    /// Node at the upper or left end
    pub from: Position,
    /// Node at the lower or right end
    pub to: Position,
    /// Cells strictly between the two nodes, ordered from `from` to `to`
    pub cells: Vec<Position>,
}

impl Corridor {
    /// Whether the corridor has no intermediate cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Nodes and intermediate cells together
    pub fn all_cells(&self) -> impl Iterator<Item = Position> + '_ {
        [self.from, self.to].into_iter().chain(self.cells.iter().copied())
    }
}

/// Whether `pos` counts as a node
pub fn is_node(grid: &Grid, pos: Position, start: Position, end: Position) -> bool {
    pos == start || pos == end || grid.open_degree(pos) != 2
}

/// All node cells in row-major order
pub fn find_nodes(grid: &Grid, start: Position, end: Position) -> Vec<Position> {
    grid.positions()
        .filter(|&pos| is_node(grid, pos, start, end))
        .collect()
}

/// Enumerate every corridor between the given nodes
///
/// Each node is walked rightwards and downwards only, so every corridor is
/// reported once. A walk that meets a wall or a bend before reaching another
/// node yields nothing.
pub fn extract_corridors(
    grid: &Grid,
    nodes: &[Position],
    start: Position,
    end: Position,
) -> Vec<Corridor> {
    let mut corridors = Vec::new();
    for &node in nodes {
        for direction in [Direction::Right, Direction::Down] {
            if let Some(corridor) = walk_corridor(grid, node, direction, start, end) {
                corridors.push(corridor);
            }
        }
    }
    log::debug!(
        "extracted {} corridors from {} nodes",
        corridors.len(),
        nodes.len()
    );
    corridors
}

fn walk_corridor(
    grid: &Grid,
    from: Position,
    direction: Direction,
    start: Position,
    end: Position,
) -> Option<Corridor> {
    let mut cells = Vec::new();
    let mut current = from;
    loop {
        if grid.wall_towards(current, direction) {
            return None;
        }
        current = grid.neighbor(current, direction)?;
        if is_node(grid, current, start, end) {
            return Some(Corridor {
                from,
                to: current,
                cells,
            });
        }
        cells.push(current);
    }
}
