//! Tests for batch summaries

#[cfg(test)]
mod tests {
    use echomaze::algorithm::solver::{Outcome, SessionReport};
    use echomaze::analysis::statistics::{BatchSummary, RunRecord};
    use std::time::Duration;

    fn record(seed: u64, outcome: Outcome, moves: usize, probes: usize) -> RunRecord {
        RunRecord {
            seed,
            report: SessionReport {
                outcome,
                moves,
                probes,
                elapsed: Duration::from_millis(2),
            },
            generation_time: Duration::from_millis(4),
        }
    }

    // Tests an empty batch summarises to zeros
    // Verified by dividing by the run count unconditionally
    #[test]
    fn test_empty_batch() {
        let summary = BatchSummary::from_records(&[]);
        assert_eq!(summary, BatchSummary::default());
        assert_eq!(summary.failures(), 0);
        assert!(summary.success_rate().abs() < f64::EPSILON);
    }

    // Tests outcomes are counted separately
    // Verified by counting hazard hits as exhausted
    #[test]
    fn test_outcome_counts() {
        let records = [
            record(0, Outcome::FoundExit, 10, 20),
            record(1, Outcome::FoundExit, 30, 40),
            record(2, Outcome::HitHazard, 5, 6),
            record(3, Outcome::Exhausted, 15, 14),
        ];
        let summary = BatchSummary::from_records(&records);
        assert_eq!(summary.runs, 4);
        assert_eq!(summary.successes, 2);
        assert_eq!(summary.hazard_hits, 1);
        assert_eq!(summary.exhausted, 1);
        assert_eq!(summary.failures(), 2);
        assert!((summary.success_rate() - 0.5).abs() < f64::EPSILON);
    }

    // Tests averages over all runs
    // Verified by averaging over successes only
    #[test]
    fn test_averages() {
        let records = [
            record(0, Outcome::FoundExit, 10, 20),
            record(1, Outcome::Exhausted, 20, 30),
        ];
        let summary = BatchSummary::from_records(&records);
        assert!((summary.avg_moves - 15.0).abs() < f64::EPSILON);
        assert!((summary.avg_probes - 25.0).abs() < f64::EPSILON);
        assert_eq!(summary.avg_session_time, Duration::from_millis(2));
        assert_eq!(summary.avg_generation_time, Duration::from_millis(4));
    }

    // Tests the printed summary
    // Verified by printing averages without two decimals
    #[test]
    fn test_display() {
        let records = [
            record(0, Outcome::FoundExit, 10, 21),
            record(1, Outcome::HitHazard, 11, 20),
        ];
        let text = BatchSummary::from_records(&records).to_string();
        assert!(text.starts_with("=== Batch (2 runs) Summary ==="));
        assert!(text.contains("Successes: 1, Failures: 1 (hazard 1, exhausted 0)"));
        assert!(text.contains("Avg moves: 10.50"));
        assert!(text.contains("Avg echoes: 20.50"));
        assert!(text.contains("Avg generation time: 4.000ms"));
    }
}
