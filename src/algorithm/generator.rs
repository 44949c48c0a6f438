//! Maze construction pipeline and the immutable maze it produces
//!
//! Generation runs in a fixed order: endpoints, carving, loop injection,
//! shortest-path solve, hazard placement, corridor extraction, ice
//! assignment and slide precomputation. Every random choice is drawn from a
//! [`RandomSelector`] seeded by the configuration, so equal configurations
//! yield equal mazes.

use std::collections::{HashSet, VecDeque};

use bitvec::prelude::{BitVec, bitvec};

use crate::algorithm::carving::{carve_spanning_tree, inject_loops};
use crate::algorithm::corridors::{extract_corridors, find_nodes};
use crate::algorithm::echo::{Echo, send_echo};
use crate::algorithm::endpoints::select_endpoints;
use crate::algorithm::hazards::{HazardAmount, HazardPlacement, hazard_candidates, place_hazards};
use crate::algorithm::ice::{Floor, FloorMap, SlideTable, assign_ice, eligible_corridors};
use crate::algorithm::pathfinding::{is_connected, shortest_path};
use crate::io::configuration::{
    DEFAULT_HAZARD_FRACTION, DEFAULT_HEIGHT, DEFAULT_ICE_FRACTION, DEFAULT_SEED, DEFAULT_WIDTH,
    EXTRA_OPENINGS, LOOP_ATTEMPT_MULTIPLIER, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, computation_error, ensure_fraction, invalid_parameter};
use crate::math::sampling::RandomSelector;
use crate::spatial::{Direction, Grid, Position, Walls};

/// Difficulty preset controlling loop injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Difficulty {
    /// Perfect maze, no cycles
    #[default]
    Easy,
    /// A few extra openings
    Medium,
    /// Same layout rules as medium
    Hard,
}

impl Difficulty {
    /// Extra walls opened after carving
    pub const fn extra_openings(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium | Self::Hard => EXTRA_OPENINGS,
        }
    }
}

/// Parameters for maze generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeConfig {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Loop injection preset
    pub difficulty: Difficulty,
    /// Fraction of candidate cells turned into hazards
    pub hazard_fraction: f64,
    /// Exact hazard count, overriding `hazard_fraction` when set
    pub hazard_count: Option<usize>,
    /// Cells eligible for hazards
    pub hazard_placement: HazardPlacement,
    /// Fraction of eligible corridors turned into ice
    pub ice_fraction: f64,
    /// Seed for every random choice
    pub seed: u64,
}

impl MazeConfig {
    /// Default configuration for the given size and seed
    pub const fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            difficulty: Difficulty::Easy,
            hazard_fraction: DEFAULT_HAZARD_FRACTION,
            hazard_count: None,
            hazard_placement: HazardPlacement::OffSolutionPath,
            ice_fraction: DEFAULT_ICE_FRACTION,
            seed,
        }
    }

    /// Check dimensions and fractions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero or oversized dimension, a grid
    /// with fewer than two cells, or a fraction outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)?;
        if self.width * self.height < 2 {
            return Err(invalid_parameter(
                "size",
                &format!("{}x{}", self.width, self.height),
                &"a maze needs at least two cells",
            ));
        }
        ensure_fraction("hazard_fraction", self.hazard_fraction)?;
        ensure_fraction("ice_fraction", self.ice_fraction)?;
        Ok(())
    }

    const fn hazard_amount(&self) -> HazardAmount {
        match self.hazard_count {
            Some(count) => HazardAmount::Count(count),
            None => HazardAmount::Fraction(self.hazard_fraction),
        }
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_SEED)
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("exceeds maximum of {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Hand-made maze description, mainly for fixtures
///
/// Walls are taken as given; no carving, hazard sampling or ice sampling
/// happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Wall grid
    pub grid: Grid,
    /// Start cell
    pub start: Position,
    /// Exit cell
    pub end: Position,
    /// Hazard cells
    pub hazards: Vec<Position>,
    /// Ice cells
    pub slippery: Vec<Position>,
}

impl Layout {
    /// Layout with no hazards and no ice
    pub const fn new(grid: Grid, start: Position, end: Position) -> Self {
        Self {
            grid,
            start,
            end,
            hazards: Vec::new(),
            slippery: Vec::new(),
        }
    }
}

/// Generated maze; immutable after construction
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    start: Position,
    end: Position,
    hazards: Vec<Position>,
    hazard_mask: BitVec,
    floor: FloorMap,
    solution: Vec<Position>,
    nodes: Vec<Position>,
    slides: SlideTable,
    glides: SlideTable,
}

impl Maze {
    /// Generate a maze with default settings
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::generate(&MazeConfig::new(width, height, seed))
    }

    /// Run the full generation pipeline
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn generate(config: &MazeConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = RandomSelector::new(config.seed);

        let mut grid = Grid::new(config.width, config.height);
        let (start, end) = select_endpoints(&grid, &mut rng);

        carve_spanning_tree(&mut grid, start, &mut rng);
        let extra = config.difficulty.extra_openings();
        if extra > 0 {
            inject_loops(&mut grid, extra, LOOP_ATTEMPT_MULTIPLIER, &mut rng);
        }

        let solution = shortest_path(&grid, start, end).ok_or_else(|| {
            computation_error("shortest_path", &format!("{end} unreachable from {start}"))
        })?;

        let candidates = hazard_candidates(&grid, &solution, start, end, config.hazard_placement);
        let hazards = place_hazards(&candidates, config.hazard_amount(), &mut rng);

        let nodes = find_nodes(&grid, start, end);
        let corridors = extract_corridors(&grid, &nodes, start, end);
        let hazard_set: HashSet<Position> = hazards.iter().copied().collect();
        let eligible = eligible_corridors(&corridors, &hazard_set);
        let floor = assign_ice(&grid, &eligible, config.ice_fraction, &mut rng);

        log::debug!(
            "generated {}x{} maze (seed {}): start {start}, exit {end}, path length {}",
            config.width,
            config.height,
            config.seed,
            solution.len()
        );

        Ok(Self::assemble(grid, start, end, hazards, floor, solution, nodes))
    }

    /// Build a maze from a hand-made layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid is too small, the start equals
    /// the exit, a position lies off the grid, a hazard sits on the start or
    /// the exit, or some cell cannot be reached from the start
    pub fn from_layout(layout: Layout) -> Result<Self> {
        let Layout {
            grid,
            start,
            end,
            hazards,
            slippery,
        } = layout;

        if grid.cell_count() < 2 {
            return Err(invalid_parameter(
                "grid",
                &grid.cell_count(),
                &"a maze needs at least two cells",
            ));
        }
        if start == end {
            return Err(invalid_parameter("end", &end, &"must differ from start"));
        }
        for (parameter, pos) in [("start", start), ("end", end)]
            .into_iter()
            .chain(hazards.iter().map(|&pos| ("hazards", pos)))
            .chain(slippery.iter().map(|&pos| ("slippery", pos)))
        {
            if !grid.in_bounds(pos) {
                return Err(invalid_parameter(parameter, &pos, &"outside the grid"));
            }
        }
        if let Some(&pos) = hazards.iter().find(|&&pos| pos == start || pos == end) {
            return Err(invalid_parameter(
                "hazards",
                &pos,
                &"hazards cannot occupy the start or the exit",
            ));
        }
        if !is_connected(&grid, start) {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", grid.width(), grid.height()),
                &"every cell must be reachable from the start",
            ));
        }

        let solution = shortest_path(&grid, start, end).ok_or_else(|| {
            computation_error("shortest_path", &format!("{end} unreachable from {start}"))
        })?;

        let mut floor = FloorMap::normal(grid.width(), grid.height());
        for &pos in &slippery {
            floor.freeze(pos);
        }

        let mut hazards = hazards;
        hazards.sort_by_key(|pos| (pos.y, pos.x));
        hazards.dedup();

        let nodes = find_nodes(&grid, start, end);
        Ok(Self::assemble(grid, start, end, hazards, floor, solution, nodes))
    }

    fn assemble(
        grid: Grid,
        start: Position,
        end: Position,
        hazards: Vec<Position>,
        floor: FloorMap,
        solution: Vec<Position>,
        nodes: Vec<Position>,
    ) -> Self {
        let mut hazard_mask: BitVec = bitvec![0; grid.cell_count()];
        for &pos in &hazards {
            hazard_mask.set(grid.index(pos), true);
        }

        let icy: Vec<Position> = grid
            .positions()
            .filter(|&pos| floor.is_slippery(pos))
            .collect();
        let slides = SlideTable::build(&grid, &floor, icy);
        let glides = SlideTable::build(&grid, &floor, nodes.iter().copied());

        Self {
            grid,
            start,
            end,
            hazards,
            hazard_mask,
            floor,
            solution,
            nodes,
            slides,
            glides,
        }
    }

    /// Wall grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Start cell
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Exit cell
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Hazard cells, sorted row-major
    pub fn hazards(&self) -> &[Position] {
        &self.hazards
    }

    /// Whether `pos` holds a hazard
    pub fn is_hazard(&self, pos: Position) -> bool {
        self.grid.in_bounds(pos)
            && self
                .hazard_mask
                .get(self.grid.index(pos))
                .is_some_and(|bit| *bit)
    }

    /// Canonical shortest path from start to exit, both included
    pub fn solution_path(&self) -> &[Position] {
        &self.solution
    }

    /// Node cells, row-major
    pub fn nodes(&self) -> &[Position] {
        &self.nodes
    }

    /// Wall flags of a cell
    pub fn cell_walls(&self, pos: Position) -> Walls {
        self.grid.walls(pos)
    }

    /// Floor material of a cell
    pub fn floor_type(&self, pos: Position) -> Floor {
        self.floor.get(pos)
    }

    /// Floor map of the whole maze
    pub const fn floor(&self) -> &FloorMap {
        &self.floor
    }

    /// Probe from `origin` towards `direction`
    pub fn send_echo(&self, origin: Position, direction: Direction) -> Option<Echo> {
        send_echo(self, origin, direction)
    }

    /// Where a slide starting on the ice cell `origin` comes to rest
    ///
    /// Always `None` for normal floor and for directions blocked by a wall.
    pub fn slide_destination(&self, origin: Position, direction: Direction) -> Option<Position> {
        self.slides.get(origin, direction)
    }

    /// Whether node `to` can be reached from node `from` by chaining
    /// node-to-node slides
    ///
    /// Positions that are not nodes have no precomputed slides and only reach
    /// themselves.
    pub fn node_reachable(&self, from: Position, to: Position) -> bool {
        if !self.grid.in_bounds(from) || !self.grid.in_bounds(to) {
            return false;
        }
        let mut seen: BitVec = bitvec![0; self.grid.cell_count()];
        seen.set(self.grid.index(from), true);
        let mut queue = VecDeque::from([from]);
        while let Some(current) = queue.pop_front() {
            if current == to {
                return true;
            }
            for dest in self.glides.from_origin(current) {
                let index = self.grid.index(dest);
                if !seen.get(index).is_some_and(|bit| *bit) {
                    seen.set(index, true);
                    queue.push_back(dest);
                }
            }
        }
        false
    }
}
