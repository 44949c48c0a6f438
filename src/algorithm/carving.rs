//! Passage carving and loop injection
//!
//! Carving is a randomized depth-first backtracker driven by an explicit
//! stack, so the grid size never translates into call depth. The result is a
//! spanning tree: exactly `cells - 1` open wall pairs and no cycles. Loop
//! injection is the only step allowed to add cycles afterwards.

use bitvec::prelude::{BitVec, bitvec};

use crate::math::sampling::RandomSelector;
use crate::spatial::{Direction, Grid, Position};

/// Carve a spanning tree over `grid` starting from `start`
///
/// Every cell ends up visited. The grid is expected to be fully walled.
pub fn carve_spanning_tree(grid: &mut Grid, start: Position, rng: &mut RandomSelector) {
    let mut visited: BitVec = bitvec![0; grid.cell_count()];
    visited.set(grid.index(start), true);

    let mut stack = vec![start];
    let mut candidates = Vec::with_capacity(Direction::ALL.len());

    while let Some(&current) = stack.last() {
        candidates.clear();
        candidates.extend(Direction::ALL.into_iter().filter(|&dir| {
            grid.neighbor(current, dir)
                .is_some_and(|next| !visited.get(grid.index(next)).is_some_and(|bit| *bit))
        }));

        let Some(&direction) = rng.choose(&candidates) else {
            // Dead end: resume from the previous cell
            stack.pop();
            continue;
        };

        let next = current.step(direction);
        grid.remove_wall(current, direction);
        visited.set(grid.index(next), true);
        stack.push(next);
    }
}

/// Open up to `extra_openings` additional walls at random
///
/// Each attempt picks a random cell and direction and removes the wall if one
/// exists towards an in-bounds neighbour. At most
/// `extra_openings * attempt_multiplier` attempts are made. Returns the number
/// of walls actually removed.
pub fn inject_loops(
    grid: &mut Grid,
    extra_openings: usize,
    attempt_multiplier: usize,
    rng: &mut RandomSelector,
) -> usize {
    let max_attempts = extra_openings.saturating_mul(attempt_multiplier);
    let mut added = 0;
    let mut attempts = 0;

    while added < extra_openings && attempts < max_attempts {
        attempts += 1;
        let Some(index) = rng.index(grid.cell_count()) else {
            break;
        };
        let Some(&direction) = rng.choose(&Direction::ALL) else {
            break;
        };
        if grid.remove_wall(grid.position(index), direction) {
            added += 1;
        }
    }

    log::debug!("loop injection opened {added}/{extra_openings} walls in {attempts} attempts");
    added
}
