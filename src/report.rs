//! Plain-text results table.

use std::fmt;

use crate::models::ProcessRecord;
use crate::scheduler::SimulationOutcome;

/// Renders a finished simulation as a per-process table followed by
/// turnaround and waiting-time aggregates.
///
/// Rows are ordered by process number. Unset fields print as `-`.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    outcome: &'a SimulationOutcome,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a SimulationOutcome) -> Self {
        Self { outcome }
    }
}

fn or_dash<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>7}  {:>7}  {:>5}  {:>4}  {:>10}  {:>7}  {:>7}  {:>5}",
            "Process", "Arrival", "Burst", "Exit", "Turnaround", "Waiting", "Tickets", "Class"
        )?;

        let mut rows: Vec<&ProcessRecord> = self.outcome.records.iter().collect();
        rows.sort_by_key(|p| p.id);
        for p in rows {
            writeln!(
                f,
                "{:>7}  {:>7}  {:>5}  {:>4}  {:>10}  {:>7}  {:>7}  {:>5}",
                p.id,
                p.arrival_time,
                p.burst_time,
                or_dash(p.exit_time),
                or_dash(p.turnaround_time),
                or_dash(p.waiting_time),
                or_dash(p.tickets),
                or_dash(p.job_class),
            )?;
        }

        let m = &self.outcome.metrics;
        writeln!(f)?;
        writeln!(f, "average turnaround time: {:.2}", m.average_turnaround)?;
        writeln!(f, "maximum turnaround time: {}", m.max_turnaround)?;
        writeln!(f, "average waiting time: {:.2}", m.average_waiting)?;
        writeln!(f, "maximum waiting time: {}", m.max_waiting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessRecord;
    use crate::scheduler::LotteryScheduler;

    #[test]
    fn test_single_process_report() {
        let outcome = LotteryScheduler::new()
            .simulate(vec![ProcessRecord::new(0, 2, 4)])
            .unwrap();
        let text = Report::new(&outcome).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("Turnaround"));
        let row: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(row, vec!["0", "2", "4", "6", "4", "0", "10", "short"]);

        assert!(text.contains("average turnaround time: 4.00"));
        assert!(text.contains("maximum turnaround time: 4"));
        assert!(text.contains("average waiting time: 0.00"));
        assert!(text.contains("maximum waiting time: 0"));
    }

    #[test]
    fn test_rows_in_process_order() {
        let outcome = LotteryScheduler::new()
            .simulate(vec![
                ProcessRecord::new(0, 5, 1),
                ProcessRecord::new(1, 0, 2),
                ProcessRecord::new(2, 1, 3),
            ])
            .unwrap();
        let text = Report::new(&outcome).to_string();
        let ids: Vec<&str> = text
            .lines()
            .skip(1)
            .take(3)
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }
}
