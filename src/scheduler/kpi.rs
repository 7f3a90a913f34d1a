//! Simulation quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | exit - arrival |
//! | Waiting | turnaround - burst |
//! | Makespan | Latest exit time |
//!
//! Averages and maxima are taken over completed processes only. Totals
//! saturate at `Ticks::MAX`; averages are computed from exact sums.

use serde::{Deserialize, Serialize};

use crate::models::{ProcessRecord, Ticks};

/// Aggregate timing indicators of a finished simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Records inspected.
    pub process_count: usize,
    /// Records that completed.
    pub completed_count: usize,
    pub average_turnaround: f64,
    pub max_turnaround: Ticks,
    pub total_turnaround: Ticks,
    pub average_waiting: f64,
    pub max_waiting: Ticks,
    pub total_waiting: Ticks,
    /// Latest exit time.
    pub makespan: Ticks,
}

impl SimulationMetrics {
    /// Computes metrics from post-simulation records.
    pub fn calculate(records: &[ProcessRecord]) -> Self {
        let mut completed_count = 0usize;
        let mut total_turnaround: u128 = 0;
        let mut total_waiting: u128 = 0;
        let mut max_turnaround: Ticks = 0;
        let mut max_waiting: Ticks = 0;
        let mut makespan: Ticks = 0;

        for record in records {
            let (Some(exit), Some(turnaround), Some(waiting)) = (
                record.exit_time,
                record.turnaround_time,
                record.waiting_time,
            ) else {
                continue;
            };

            completed_count += 1;
            total_turnaround += u128::from(turnaround);
            total_waiting += u128::from(waiting);
            max_turnaround = max_turnaround.max(turnaround);
            max_waiting = max_waiting.max(waiting);
            makespan = makespan.max(exit);
        }

        let mean = |total: u128| {
            if completed_count == 0 {
                0.0
            } else {
                total as f64 / completed_count as f64
            }
        };

        let saturate = |total: u128| Ticks::try_from(total).unwrap_or(Ticks::MAX);

        Self {
            process_count: records.len(),
            completed_count,
            average_turnaround: mean(total_turnaround),
            max_turnaround,
            total_turnaround: saturate(total_turnaround),
            average_waiting: mean(total_waiting),
            max_waiting,
            total_waiting: saturate(total_waiting),
            makespan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: usize, arrival: Ticks, burst: Ticks, exit: Ticks) -> ProcessRecord {
        let mut p = ProcessRecord::new(id, arrival, burst);
        p.remaining_time = 0;
        p.complete(exit);
        p
    }

    #[test]
    fn test_metrics_basic() {
        let records = vec![completed(0, 0, 5, 8), completed(1, 0, 3, 3)];
        let m = SimulationMetrics::calculate(&records);

        assert_eq!(m.process_count, 2);
        assert_eq!(m.completed_count, 2);
        assert_eq!(m.total_turnaround, 11);
        assert!((m.average_turnaround - 5.5).abs() < 1e-10);
        assert_eq!(m.max_turnaround, 8);
        // waits: 3 and 0
        assert!((m.average_waiting - 1.5).abs() < 1e-10);
        assert_eq!(m.max_waiting, 3);
        assert_eq!(m.makespan, 8);
    }

    #[test]
    fn test_metrics_single_process() {
        let m = SimulationMetrics::calculate(&[completed(0, 2, 4, 6)]);
        assert!((m.average_turnaround - 4.0).abs() < 1e-10);
        assert_eq!(m.max_turnaround, 4);
        assert!((m.average_waiting - 0.0).abs() < 1e-10);
        assert_eq!(m.max_waiting, 0);
    }

    #[test]
    fn test_metrics_skip_unfinished() {
        let records = vec![completed(0, 0, 2, 2), ProcessRecord::new(1, 0, 9)];
        let m = SimulationMetrics::calculate(&records);
        assert_eq!(m.process_count, 2);
        assert_eq!(m.completed_count, 1);
        assert!((m.average_turnaround - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = SimulationMetrics::calculate(&[]);
        assert_eq!(m.completed_count, 0);
        assert!((m.average_turnaround - 0.0).abs() < 1e-10);
        assert_eq!(m.makespan, 0);
    }

    #[test]
    fn test_metrics_totals_saturate() {
        let half = Ticks::MAX / 2 + 1;
        let records = vec![completed(0, 0, 1, half), completed(1, 0, 1, half)];
        let m = SimulationMetrics::calculate(&records);
        assert_eq!(m.total_turnaround, Ticks::MAX);
        assert_eq!(m.max_turnaround, half);
        assert!((m.average_turnaround - half as f64).abs() / (half as f64) < 1e-12);
    }
}
