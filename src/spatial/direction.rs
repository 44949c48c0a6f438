//! Cardinal directions and integer grid positions

use std::fmt;

/// One of the four cardinal directions
///
/// The declaration order is the canonical scan order used by the solver and
/// the pathfinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Direction {
    /// Towards `y - 1` (north)
    Up,
    /// Towards `y + 1` (south)
    Down,
    /// Towards `x + 1` (east)
    Right,
    /// Towards `x - 1` (west)
    Left,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    /// Unit step `[dx, dy]` for this direction
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::Up => [0, -1],
            Self::Down => [0, 1],
            Self::Right => [1, 0],
            Self::Left => [-1, 0],
        }
    }

    /// Direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }

    /// Bit used for this direction in a packed wall mask
    pub const fn bit(self) -> u8 {
        match self {
            Self::Up => 0b0001,
            Self::Down => 0b0010,
            Self::Right => 0b0100,
            Self::Left => 0b1000,
        }
    }

    /// Direction whose unit step equals `delta`
    pub fn from_delta(delta: [i32; 2]) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.delta() == delta)
    }

    /// Upper-case label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Right => "RIGHT",
            Self::Left => "LEFT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell coordinates, `x` growing rightwards and `y` growing downwards
///
/// Signed so that stepping off the edge of the grid yields a representable
/// position the bounds check can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Position {
    /// Create a position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one cell away in `direction`, without bounds checking
    pub const fn step(self, direction: Direction) -> Self {
        let [dx, dy] = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Position `distance` cells away in `direction`
    pub const fn advance(self, direction: Direction, distance: i32) -> Self {
        let [dx, dy] = direction.delta();
        Self::new(self.x + dx * distance, self.y + dy * distance)
    }

    /// Manhattan distance to `other`
    pub const fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
