//! Hazard placement

use std::collections::HashSet;

use crate::math::sampling::{RandomSelector, fraction_of};
use crate::spatial::{Grid, Position};

/// Which cells may receive hazards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HazardPlacement {
    /// Only cells off the canonical solution path
    #[default]
    OffSolutionPath,
    /// Any cell except the start and the exit
    ///
    /// Exposed for harder variants; no difficulty preset selects it.
    Anywhere,
}

/// How many hazards to place
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HazardAmount {
    /// Fraction of the candidate cells, rounded down
    Fraction(f64),
    /// Exact count, clamped to the number of candidates
    Count(usize),
}

/// Cells eligible for hazards under `placement`, in row-major order
pub fn hazard_candidates(
    grid: &Grid,
    solution: &[Position],
    start: Position,
    end: Position,
    placement: HazardPlacement,
) -> Vec<Position> {
    let excluded: HashSet<Position> = match placement {
        HazardPlacement::OffSolutionPath => solution
            .iter()
            .copied()
            .chain([start, end])
            .collect(),
        HazardPlacement::Anywhere => HashSet::from([start, end]),
    };
    grid.positions()
        .filter(|pos| !excluded.contains(pos))
        .collect()
}

/// Sample hazard cells uniformly without replacement
///
/// The returned positions are sorted row-major.
pub fn place_hazards(
    candidates: &[Position],
    amount: HazardAmount,
    rng: &mut RandomSelector,
) -> Vec<Position> {
    let count = match amount {
        HazardAmount::Fraction(fraction) => fraction_of(candidates.len(), fraction),
        HazardAmount::Count(count) => count.min(candidates.len()),
    };

    let mut hazards = rng.sample(candidates, count);
    hazards.sort_by_key(|pos| (pos.y, pos.x));
    log::debug!(
        "placed {} hazards among {} candidates",
        hazards.len(),
        candidates.len()
    );
    hazards
}
