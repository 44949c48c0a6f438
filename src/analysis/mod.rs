//! Analysis of solver runs

/// Aggregated statistics over batches of runs
pub mod statistics;
