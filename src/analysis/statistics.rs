//! Aggregated statistics over batches of solver runs

use std::fmt;
use std::time::Duration;

use crate::algorithm::solver::{Outcome, SessionReport};

/// Result of generating and solving one maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRecord {
    /// Seed the maze was generated from
    pub seed: u64,
    /// Solver telemetry
    pub report: SessionReport,
    /// Time spent generating the maze
    pub generation_time: Duration,
}

/// Totals and averages over a batch of runs
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatchSummary {
    /// Number of runs
    pub runs: usize,
    /// Runs that reached the exit
    pub successes: usize,
    /// Runs that ended on a hazard
    pub hazard_hits: usize,
    /// Runs that ran out of moves
    pub exhausted: usize,
    /// Mean moves per run
    pub avg_moves: f64,
    /// Mean probes per run
    pub avg_probes: f64,
    /// Mean session time
    pub avg_session_time: Duration,
    /// Mean generation time
    pub avg_generation_time: Duration,
}

impl BatchSummary {
    /// Summarise a batch; an empty batch yields all zeros
    pub fn from_records(records: &[RunRecord]) -> Self {
        let runs = records.len();
        if runs == 0 {
            return Self::default();
        }

        let count = |outcome: Outcome| {
            records
                .iter()
                .filter(|record| record.report.outcome == outcome)
                .count()
        };
        let total_moves: usize = records.iter().map(|record| record.report.moves).sum();
        let total_probes: usize = records.iter().map(|record| record.report.probes).sum();
        let total_session: Duration = records.iter().map(|record| record.report.elapsed).sum();
        let total_generation: Duration = records.iter().map(|record| record.generation_time).sum();

        Self {
            runs,
            successes: count(Outcome::FoundExit),
            hazard_hits: count(Outcome::HitHazard),
            exhausted: count(Outcome::Exhausted),
            avg_moves: total_moves as f64 / runs as f64,
            avg_probes: total_probes as f64 / runs as f64,
            avg_session_time: total_session.div_f64(runs as f64),
            avg_generation_time: total_generation.div_f64(runs as f64),
        }
    }

    /// Runs that did not reach the exit
    pub const fn failures(&self) -> usize {
        self.runs - self.successes
    }

    /// Share of runs that reached the exit, `0.0` for an empty batch
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.successes as f64 / self.runs as f64
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Batch ({} runs) Summary ===", self.runs)?;
        writeln!(
            f,
            "Successes: {}, Failures: {} (hazard {}, exhausted {})",
            self.successes,
            self.failures(),
            self.hazard_hits,
            self.exhausted
        )?;
        writeln!(f, "Avg moves: {:.2}", self.avg_moves)?;
        writeln!(f, "Avg echoes: {:.2}", self.avg_probes)?;
        writeln!(
            f,
            "Avg session time: {:.3}ms",
            self.avg_session_time.as_secs_f64() * 1000.0
        )?;
        write!(
            f,
            "Avg generation time: {:.3}ms",
            self.avg_generation_time.as_secs_f64() * 1000.0
        )
    }
}
