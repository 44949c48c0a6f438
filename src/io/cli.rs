//! Command-line interface for batch generation and blind solving

use crate::algorithm::generator::{Difficulty, Maze, MazeConfig};
use crate::algorithm::hazards::HazardPlacement;
use crate::algorithm::solver::BlindSolver;
use crate::analysis::statistics::{BatchSummary, RunRecord};
use crate::io::configuration::{
    DEFAULT_HAZARD_FRACTION, DEFAULT_HEIGHT, DEFAULT_ICE_FRACTION, DEFAULT_RUNS, DEFAULT_SEED,
    DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::render::render_ascii;
use crate::spatial::Direction;
use clap::Parser;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "echomaze")]
#[command(
    author,
    version,
    about = "Generate echo mazes and measure a blind solver on them"
)]
/// Command-line arguments for the batch runner
pub struct Cli {
    /// Number of mazes to generate and solve
    #[arg(short, long, default_value_t = DEFAULT_RUNS)]
    pub runs: usize,

    /// Maze width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed of the first run; run `i` uses `seed + i`
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Loop injection preset
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Fraction of off-path cells holding hazards
    #[arg(long, default_value_t = DEFAULT_HAZARD_FRACTION)]
    pub hazard_fraction: f64,

    /// Exact number of hazards, overriding the fraction
    #[arg(long)]
    pub hazard_count: Option<usize>,

    /// Fraction of eligible corridors turned into ice
    #[arg(long, default_value_t = DEFAULT_ICE_FRACTION)]
    pub ice_fraction: f64,

    /// Print the first maze as ASCII art
    #[arg(long)]
    pub show: bool,

    /// Probe from the start of the first maze in this direction
    #[arg(short, long, value_enum)]
    pub probe: Option<Direction>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation parameters for the run with the given index
    pub const fn maze_config(&self, run: usize) -> MazeConfig {
        MazeConfig {
            width: self.width,
            height: self.height,
            difficulty: self.difficulty,
            hazard_fraction: self.hazard_fraction,
            hazard_count: self.hazard_count,
            hazard_placement: HazardPlacement::OffSolutionPath,
            ice_fraction: self.ice_fraction,
            seed: self.seed.wrapping_add(run as u64),
        }
    }
}

/// Text produced for the first maze of a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    /// ASCII rendering, when requested
    pub rendering: Option<String>,
    /// Probe report, when requested
    pub probe: Option<String>,
}

/// Generates and solves a batch of independent mazes
pub struct BatchRunner {
    cli: Cli,
}

impl BatchRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Render and probe the first maze as requested on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn preview(&self) -> Result<Preview> {
        if !self.cli.show && self.cli.probe.is_none() {
            return Ok(Preview::default());
        }
        let maze = Maze::generate(&self.cli.maze_config(0))?;
        let rendering = self.cli.show.then(|| render_ascii(&maze));
        let probe = self.cli.probe.map(|direction| {
            maze.send_echo(maze.start(), direction).map_or_else(
                || format!("Probe {direction} from {}: silence", maze.start()),
                |echo| format!("Probe {direction} from {}: {echo}", maze.start()),
            )
        });
        Ok(Preview { rendering, probe })
    }

    /// Generate and solve every run, in parallel
    ///
    /// # Errors
    ///
    /// Returns an error if the run count is zero or the maze configuration is
    /// invalid
    pub fn process(&self) -> Result<BatchSummary> {
        if self.cli.runs == 0 {
            return Err(invalid_parameter("runs", &0, &"must be positive"));
        }
        // Fail fast before spawning work
        self.cli.maze_config(0).validate()?;

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.runs)
        } else {
            ProgressManager::hidden()
        };

        let collected = (0..self.cli.runs)
            .into_par_iter()
            .map(|run| {
                let record = self.run_once(run);
                if let Ok(ref record) = record {
                    progress.complete_run(record.report.found_exit());
                }
                record
            })
            .collect::<Result<Vec<RunRecord>>>();

        // Clear the bar on the error path too
        progress.finish();
        let records = collected?;
        let summary = BatchSummary::from_records(&records);
        log::info!(
            "batch of {} runs: {} successes",
            progress.completed(),
            summary.successes
        );
        Ok(summary)
    }

    /// Generate and solve the run with the given index
    ///
    /// # Errors
    ///
    /// Returns an error if the maze configuration is invalid
    pub fn run_once(&self, run: usize) -> Result<RunRecord> {
        let config = self.cli.maze_config(run);
        let generation_start = Instant::now();
        let maze = Maze::generate(&config)?;
        let generation_time = generation_start.elapsed();

        let report = BlindSolver::new(&maze).run();
        Ok(RunRecord {
            seed: config.seed,
            report,
            generation_time,
        })
    }
}
