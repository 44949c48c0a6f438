//! Wall grid with bounds and index arithmetic
//!
//! Every cell carries four wall flags packed into a [`Walls`] mask. Walls are
//! always removed in pairs so the flag between two neighbours agrees from both
//! sides. Storage is row-major (`[y, x]`), matching [`Grid::index`].

use ndarray::Array2;

use crate::spatial::direction::{Direction, Position};

/// Wall flags for a single cell, `true` meaning impassable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls {
    mask: u8,
}

impl Walls {
    /// All four walls present
    pub const CLOSED: Self = Self { mask: 0b1111 };

    /// Whether a wall blocks `direction`
    pub const fn has(self, direction: Direction) -> bool {
        self.mask & direction.bit() != 0
    }

    /// Number of open sides
    pub const fn open_count(self) -> usize {
        4 - self.mask.count_ones() as usize
    }

    const fn without(self, direction: Direction) -> Self {
        Self {
            mask: self.mask & !direction.bit(),
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::CLOSED
    }
}

/// Rectangular grid of cells and the walls between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    walls: Array2<Walls>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a fully walled grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            walls: Array2::from_elem((height, width), Walls::CLOSED),
            width,
            height,
        }
    }

    /// Create a grid with every interior wall removed
    ///
    /// Only the outer boundary stays walled.
    pub fn open(width: usize, height: usize) -> Self {
        let mut grid = Self::new(width, height);
        for pos in grid.positions() {
            grid.remove_wall(pos, Direction::Right);
            grid.remove_wall(pos, Direction::Down);
        }
        grid
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check whether a position lies on the grid
    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Row-major index of an in-bounds position
    ///
    /// Callers must bounds-check first; out-of-range input is a contract
    /// violation caught in debug builds.
    pub fn index(&self, pos: Position) -> usize {
        debug_assert!(self.in_bounds(pos), "position {pos} outside grid");
        pos.y as usize * self.width + pos.x as usize
    }

    /// Position for a row-major index
    pub const fn position(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Wall flags of a cell
    ///
    /// Out-of-range positions read as fully walled.
    pub fn walls(&self, pos: Position) -> Walls {
        debug_assert!(self.in_bounds(pos), "position {pos} outside grid");
        if !self.in_bounds(pos) {
            return Walls::CLOSED;
        }
        self.walls
            .get([pos.y as usize, pos.x as usize])
            .copied()
            .unwrap_or(Walls::CLOSED)
    }

    /// Whether a wall separates `pos` from its neighbour in `direction`
    pub fn wall_towards(&self, pos: Position, direction: Direction) -> bool {
        self.walls(pos).has(direction)
    }

    /// Directions without a wall, in canonical order
    pub fn open_directions(&self, pos: Position) -> impl Iterator<Item = Direction> + use<> {
        let walls = self.walls(pos);
        Direction::ALL.into_iter().filter(move |&dir| !walls.has(dir))
    }

    /// Number of open sides of a cell
    pub fn open_degree(&self, pos: Position) -> usize {
        self.walls(pos).open_count()
    }

    /// In-bounds neighbour of `pos` in `direction`
    pub const fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let next = pos.step(direction);
        if self.in_bounds(next) { Some(next) } else { None }
    }

    /// Remove the wall between `pos` and its neighbour in `direction`
    ///
    /// Both sides are updated. Returns `false` when the neighbour is off the
    /// grid or the wall was already open; boundary walls are never removed.
    pub fn remove_wall(&mut self, pos: Position, direction: Direction) -> bool {
        let Some(next) = self.neighbor(pos, direction) else {
            return false;
        };
        if !self.wall_towards(pos, direction) {
            return false;
        }
        self.clear(pos, direction);
        self.clear(next, direction.opposite());
        true
    }

    fn clear(&mut self, pos: Position, direction: Direction) {
        if let Some(cell) = self.walls.get_mut([pos.y as usize, pos.x as usize]) {
            *cell = cell.without(direction);
        }
    }

    /// Number of open walls between adjacent cells, each pair counted once
    pub fn open_wall_pairs(&self) -> usize {
        self.positions()
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| {
                        self.neighbor(pos, dir).is_some() && !self.wall_towards(pos, dir)
                    })
                    .count()
            })
            .sum()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}
