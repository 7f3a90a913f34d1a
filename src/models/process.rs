//! Process record model.
//!
//! A process record carries the immutable inputs of one process
//! (arrival and burst time) together with the simulation outputs the
//! driver fills in while the process competes for the CPU.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulated time, in whole time units.
pub type Ticks = u64;

/// Sequence number assigned at parse time (input order, starting at 0).
pub type ProcessId = usize;

/// Short/long classification relative to the ready queue's average
/// remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobClass {
    /// Remaining time at or below the queue average.
    Short,
    /// Remaining time above the queue average.
    Long,
}

impl fmt::Display for JobClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobClass::Short => f.write_str("short"),
            JobClass::Long => f.write_str("long"),
        }
    }
}

/// A process to be scheduled.
///
/// # Lifecycle
/// Created once with every output field unset, admitted to the ready
/// queue when the clock reaches `arrival_time`, mutated in place while
/// queued, and frozen when `remaining_time` reaches 0.
///
/// `tickets` and `job_class` keep the value of the last scheduling round
/// the process took part in. `exit_time`, `turnaround_time` and
/// `waiting_time` are `None` until the process completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique sequence number.
    pub id: ProcessId,
    /// Time the process becomes runnable.
    pub arrival_time: Ticks,
    /// Total CPU time required (>= 1).
    pub burst_time: Ticks,
    /// CPU time still required.
    pub remaining_time: Ticks,
    /// Lottery tickets from the most recent allocation.
    pub tickets: Option<u32>,
    /// Classification from the most recent allocation.
    pub job_class: Option<JobClass>,
    /// Completion time.
    pub exit_time: Option<Ticks>,
    /// `exit_time - arrival_time`.
    pub turnaround_time: Option<Ticks>,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Option<Ticks>,
}

impl ProcessRecord {
    /// Creates a fresh record with `remaining_time = burst_time`.
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            tickets: None,
            job_class: None,
            exit_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Whether the process has run to completion.
    pub fn is_completed(&self) -> bool {
        self.exit_time.is_some()
    }

    /// Fixes the terminal timing fields at `exit_time`.
    pub(crate) fn complete(&mut self, exit_time: Ticks) {
        debug_assert_eq!(self.remaining_time, 0, "process {} still has work", self.id);
        let turnaround = exit_time - self.arrival_time;
        self.exit_time = Some(exit_time);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_fresh() {
        let p = ProcessRecord::new(3, 2, 7);
        assert_eq!(p.id, 3);
        assert_eq!(p.remaining_time, 7);
        assert!(p.tickets.is_none());
        assert!(p.job_class.is_none());
        assert!(!p.is_completed());
        assert!(p.turnaround_time.is_none());
    }

    #[test]
    fn test_complete_derives_timings() {
        let mut p = ProcessRecord::new(0, 2, 4);
        p.remaining_time = 0;
        p.complete(9);

        assert!(p.is_completed());
        assert_eq!(p.exit_time, Some(9));
        assert_eq!(p.turnaround_time, Some(7));
        assert_eq!(p.waiting_time, Some(3));
    }

    #[test]
    fn test_job_class_display() {
        assert_eq!(JobClass::Short.to_string(), "short");
        assert_eq!(JobClass::Long.to_string(), "long");
    }
}
