//! Breadth-first search over open walls
//!
//! Neighbours are expanded in canonical direction order, so the path found
//! for a given grid is always the same.

use std::collections::VecDeque;

use bitvec::prelude::{BitVec, bitvec};

use crate::spatial::{Grid, Position};

/// Shortest path from `start` to `goal`, both ends included
///
/// Returns `None` when `goal` cannot be reached or either end is off the
/// grid.
pub fn shortest_path(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        return None;
    }

    let mut predecessor: Vec<Option<Position>> = vec![None; grid.cell_count()];
    let mut seen: BitVec = bitvec![0; grid.cell_count()];
    seen.set(grid.index(start), true);

    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        for direction in grid.open_directions(current) {
            let Some(next) = grid.neighbor(current, direction) else {
                continue;
            };
            let index = grid.index(next);
            if seen.get(index).is_some_and(|bit| *bit) {
                continue;
            }
            seen.set(index, true);
            if let Some(slot) = predecessor.get_mut(index) {
                *slot = Some(current);
            }
            queue.push_back(next);
        }
    }

    if !seen.get(grid.index(goal)).is_some_and(|bit| *bit) {
        return None;
    }

    let mut path = vec![goal];
    let mut node = goal;
    while let Some(prev) = predecessor.get(grid.index(node)).copied().flatten() {
        path.push(prev);
        node = prev;
    }
    path.reverse();
    Some(path)
}

/// Cells reachable from `from` through open walls
pub fn reachable(grid: &Grid, from: Position) -> BitVec {
    let mut seen: BitVec = bitvec![0; grid.cell_count()];
    if !grid.in_bounds(from) {
        return seen;
    }
    seen.set(grid.index(from), true);

    let mut queue = VecDeque::from([from]);
    while let Some(current) = queue.pop_front() {
        for direction in grid.open_directions(current) {
            let Some(next) = grid.neighbor(current, direction) else {
                continue;
            };
            let index = grid.index(next);
            if !seen.get(index).is_some_and(|bit| *bit) {
                seen.set(index, true);
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Whether every cell can be reached from `from`
pub fn is_connected(grid: &Grid, from: Position) -> bool {
    reachable(grid, from).count_ones() == grid.cell_count()
}
