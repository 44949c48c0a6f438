//! Blind edge-marking solver
//!
//! The agent never looks at the maze directly. It learns about walls by
//! bumping into them and about hazards through echo probes, and keeps only
//! a per-edge marker and a stack of moves to undo.
//!
//! Each directed edge (cell plus leaving direction) moves through
//! `Unvisited -> Grey -> Black` and never back. Both directions of an edge
//! are promoted together, so every edge is walked at most twice and a session
//! always terminates. Ice only changes where a move ends, not the edge
//! bookkeeping.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use crate::algorithm::generator::Maze;
use crate::spatial::{Direction, Position};

/// Exploration marker of a directed edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum EdgeState {
    /// Never walked
    #[default]
    Unvisited,
    /// Walked once
    Grey,
    /// Walked twice; never walked again
    Black,
}

impl EdgeState {
    /// State after one more traversal, `None` once exhausted
    pub const fn promoted(self) -> Option<Self> {
        match self {
            Self::Unvisited => Some(Self::Grey),
            Self::Grey => Some(Self::Black),
            Self::Black => None,
        }
    }
}

/// Terminal result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The agent stood on the exit
    FoundExit,
    /// The agent ended up on a hazard
    HitHazard,
    /// No move and nothing left to backtrack
    Exhausted,
}

impl Outcome {
    /// Label used in text output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FoundExit => "found exit",
            Self::HitHazard => "hit hazard",
            Self::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single call to [`BlindSolver::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Walked an edge forward
    Traversed {
        /// Cell the move started from
        from: Position,
        /// Direction walked
        direction: Direction,
        /// Where the agent came to rest, after any slide
        to: Position,
        /// Whether ice carried the agent past the adjacent cell
        slid: bool,
    },
    /// Undid the most recent unreturned move
    Backtracked {
        /// Direction walked
        direction: Direction,
        /// Where the agent came to rest, after any slide
        to: Position,
    },
    /// The session is over
    Finished(Outcome),
}

/// Telemetry of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// How the session ended
    pub outcome: Outcome,
    /// Moves made, each slide counted as one extra move
    pub moves: usize,
    /// Echo probes issued
    pub probes: usize,
    /// Wall-clock duration of the session
    pub elapsed: Duration,
}

impl SessionReport {
    /// Whether the agent escaped
    pub fn found_exit(&self) -> bool {
        self.outcome == Outcome::FoundExit
    }
}

/// Session state of the blind agent
#[derive(Debug, Clone)]
pub struct BlindSolver<'m> {
    maze: &'m Maze,
    position: Position,
    edges: HashMap<(Position, Direction), EdgeState>,
    backtrack_stack: Vec<Direction>,
    moves: usize,
    probes: usize,
    outcome: Option<Outcome>,
}

impl<'m> BlindSolver<'m> {
    /// Start a session at the maze's start cell
    pub fn new(maze: &'m Maze) -> Self {
        Self {
            maze,
            position: maze.start(),
            edges: HashMap::new(),
            backtrack_stack: Vec::new(),
            moves: 0,
            probes: 0,
            outcome: None,
        }
    }

    /// Current cell
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Moves made so far
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Probes issued so far
    pub const fn probes(&self) -> usize {
        self.probes
    }

    /// Terminal outcome, once reached
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Pending backtrack moves
    pub const fn backtrack_depth(&self) -> usize {
        self.backtrack_stack.len()
    }

    /// Marker of the edge leaving `pos` in `direction`
    pub fn edge_state(&self, pos: Position, direction: Direction) -> EdgeState {
        self.edges
            .get(&(pos, direction))
            .copied()
            .unwrap_or_default()
    }

    /// Whether the agent may step in `direction` from where it stands
    ///
    /// A wall refuses the step by contact. Otherwise a probe is sent and the
    /// step is refused when a wall or hazard answers with no delay.
    pub fn can_traverse(&mut self, direction: Direction) -> bool {
        if self.maze.grid().wall_towards(self.position, direction) {
            return false;
        }
        self.probes += 1;
        !self
            .maze
            .send_echo(self.position, direction)
            .is_some_and(|echo| echo.blocks_step())
    }

    /// Preferred direction from the current cell
    ///
    /// The first traversable unvisited edge in canonical order wins, then the
    /// first traversable grey one.
    pub fn next_move(&mut self) -> Option<Direction> {
        for wanted in [EdgeState::Unvisited, EdgeState::Grey] {
            for direction in Direction::ALL {
                if self.edge_state(self.position, direction) == wanted
                    && self.can_traverse(direction)
                {
                    return Some(direction);
                }
            }
        }
        None
    }

    /// Walk the edge in `direction`, promoting its marker
    ///
    /// Returns `None` without moving if a wall blocks `direction`, the edge
    /// is already black, or the neighbour lies off the grid.
    pub fn traverse(&mut self, direction: Direction) -> Option<Step> {
        let from = self.position;
        if self.maze.grid().wall_towards(from, direction) {
            return None;
        }
        let promoted = self.edge_state(from, direction).promoted()?;
        let next = self.maze.grid().neighbor(from, direction)?;

        self.edges.insert((from, direction), promoted);
        self.edges.insert((next, direction.opposite()), promoted);
        self.backtrack_stack.push(direction.opposite());

        let (to, slid) = self.move_to(next, direction);
        log::trace!("traverse {direction} from {from} to {to} ({promoted:?})");
        Some(Step::Traversed {
            from,
            direction,
            to,
            slid,
        })
    }

    /// Undo the most recent unreturned move
    ///
    /// Edge markers are left untouched. Returns `None` with an empty stack.
    pub fn backtrack(&mut self) -> Option<Step> {
        let direction = self.backtrack_stack.pop()?;
        // The stack only holds reversals of edges already walked
        debug_assert!(
            !self.maze.grid().wall_towards(self.position, direction),
            "backtrack through a wall at {}",
            self.position
        );
        let next = self.maze.grid().neighbor(self.position, direction)?;
        let (to, _) = self.move_to(next, direction);
        log::trace!("backtrack {direction} to {to}");
        Some(Step::Backtracked { direction, to })
    }

    fn move_to(&mut self, next: Position, direction: Direction) -> (Position, bool) {
        self.moves += 1;
        let slide = if self.maze.floor().is_slippery(next) {
            self.maze.slide_destination(next, direction)
        } else {
            None
        };
        match slide.filter(|&dest| dest != next) {
            Some(dest) => {
                // The slide is charged as one extra move
                self.moves += 1;
                self.position = dest;
                (dest, true)
            }
            None => {
                self.position = next;
                (next, false)
            }
        }
    }

    fn check_terminal(&self) -> Option<Outcome> {
        if self.position == self.maze.end() {
            Some(Outcome::FoundExit)
        } else if self.maze.is_hazard(self.position) {
            Some(Outcome::HitHazard)
        } else {
            None
        }
    }

    /// Advance the session by one move
    ///
    /// Once finished, every further call reports the same outcome.
    pub fn step(&mut self) -> Step {
        if let Some(outcome) = self.outcome {
            return Step::Finished(outcome);
        }
        if let Some(outcome) = self.check_terminal() {
            return self.finish(outcome);
        }

        if let Some(step) = self.next_move().and_then(|direction| self.traverse(direction)) {
            return step;
        }
        if let Some(step) = self.backtrack() {
            return step;
        }
        self.finish(Outcome::Exhausted)
    }

    fn finish(&mut self, outcome: Outcome) -> Step {
        log::debug!(
            "session {outcome} at {} after {} moves and {} probes",
            self.position,
            self.moves,
            self.probes
        );
        self.outcome = Some(outcome);
        Step::Finished(outcome)
    }

    /// Drive the session to its end
    pub fn run(&mut self) -> SessionReport {
        let started = Instant::now();
        let outcome = loop {
            if let Step::Finished(outcome) = self.step() {
                break outcome;
            }
        };
        SessionReport {
            outcome,
            moves: self.moves,
            probes: self.probes,
            elapsed: started.elapsed(),
        }
    }
}

/// Solve `maze` with a fresh session from its start
pub fn solve(maze: &Maze) -> SessionReport {
    BlindSolver::new(maze).run()
}
