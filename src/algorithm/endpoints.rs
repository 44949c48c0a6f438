//! Start and exit selection

use crate::io::configuration::ENDPOINT_ATTEMPTS;
use crate::math::sampling::RandomSelector;
use crate::spatial::{Grid, Position};

/// Minimum Manhattan distance a preferred exit keeps from the start
pub const fn preferred_distance(width: usize, height: usize) -> u32 {
    ((width + height) / 2) as u32
}

/// Pick a uniformly random start and a distant exit
///
/// The exit is drawn uniformly until one lies at least
/// [`preferred_distance`] away from the start, for up to
/// [`ENDPOINT_ATTEMPTS`] draws. After that any cell other than the start is
/// accepted. The grid must hold at least two cells.
pub fn select_endpoints(grid: &Grid, rng: &mut RandomSelector) -> (Position, Position) {
    let cells = grid.cell_count();
    let start = grid.position(rng.index(cells).unwrap_or(0));
    let target = preferred_distance(grid.width(), grid.height());

    for _ in 0..ENDPOINT_ATTEMPTS {
        let candidate = grid.position(rng.index(cells).unwrap_or(0));
        if candidate != start && start.manhattan(candidate) >= target {
            return (start, candidate);
        }
    }

    log::debug!(
        "no exit at distance {target} from {start} after {ENDPOINT_ATTEMPTS} attempts, relaxing"
    );

    // Draw from the cells after removing the start from the index space
    let start_index = grid.index(start);
    let drawn = rng.index(cells.saturating_sub(1)).unwrap_or(0);
    let end_index = if drawn >= start_index { drawn + 1 } else { drawn };
    (start, grid.position(end_index))
}
