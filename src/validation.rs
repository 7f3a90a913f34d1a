//! Input validation for lottery simulations.
//!
//! Checks a record set and ticket policy before simulation. Detects:
//! - Empty record sets
//! - Duplicate sequence numbers
//! - Zero burst times
//! - Records that are not fresh (already run or already completed)
//! - Ticket policies that hand out zero tickets
//! - Workloads whose clock would leave the `Ticks` range

use crate::lottery::TicketPolicy;
use crate::models::{ProcessRecord, Ticks};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No records to simulate.
    EmptyInput,
    /// Two records share a sequence number.
    DuplicateId,
    /// A record needs no CPU time.
    NonPositiveBurst,
    /// A record has already been partially or fully simulated.
    InconsistentState,
    /// A job class would receive zero tickets.
    InvalidTicketPolicy,
    /// The latest arrival plus all burst time does not fit in `Ticks`.
    ClockOverflow,
    /// A workload profile has an empty or zero-burst range.
    InvalidWorkloadProfile,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the input of a simulation.
///
/// Checks:
/// 1. At least one record
/// 2. No duplicate sequence numbers
/// 3. Every burst time is at least 1
/// 4. Every record is fresh: remaining equals burst, no outputs set
/// 5. Both job classes receive at least one ticket
/// 6. The latest arrival plus the total burst time fits in `Ticks`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(records: &[ProcessRecord], policy: &TicketPolicy) -> ValidationResult {
    let mut errors = Vec::new();

    if records.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to simulate",
        ));
    }

    let mut ids = HashSet::new();
    for record in records {
        if !ids.insert(record.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process number: {}", record.id),
            ));
        }

        if record.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has a burst time of 0", record.id),
            ));
        }

        if record.remaining_time != record.burst_time
            || record.exit_time.is_some()
            || record.turnaround_time.is_some()
            || record.waiting_time.is_some()
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentState,
                format!("Process {} has already been scheduled", record.id),
            ));
        }
    }

    if policy.short_job_tickets == 0 || policy.long_job_tickets == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTicketPolicy,
            format!(
                "Ticket policy must grant at least one ticket per job (short={}, long={})",
                policy.short_job_tickets, policy.long_job_tickets
            ),
        ));
    }

    if clock_horizon(records).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ClockOverflow,
            format!(
                "Latest arrival plus total burst time exceeds the clock range ({})",
                Ticks::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the simulation clock: the latest arrival plus every
/// burst. `None` when that sum overflows.
fn clock_horizon(records: &[ProcessRecord]) -> Option<Ticks> {
    let latest = records.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    records
        .iter()
        .try_fold(latest, |clock, p| clock.checked_add(p.burst_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new(0, 0, 5),
            ProcessRecord::new(1, 0, 3),
            ProcessRecord::new(2, 4, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_records(), &TicketPolicy::default()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[], &TicketPolicy::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyInput));
    }

    #[test]
    fn test_duplicate_id() {
        let records = vec![ProcessRecord::new(0, 0, 1), ProcessRecord::new(0, 1, 1)];
        let errors = validate_processes(&records, &TicketPolicy::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_zero_burst() {
        let records = vec![ProcessRecord::new(0, 0, 0)];
        let errors = validate_processes(&records, &TicketPolicy::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_already_run_record() {
        let mut records = sample_records();
        records[1].remaining_time = 1;
        let errors = validate_processes(&records, &TicketPolicy::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InconsistentState && e.message.contains('1')));
    }

    #[test]
    fn test_zero_ticket_policy() {
        let errors =
            validate_processes(&sample_records(), &TicketPolicy::new(0, 1)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTicketPolicy));
    }

    #[test]
    fn test_clock_overflow() {
        let records = vec![ProcessRecord::new(0, Ticks::MAX, 2)];
        let errors = validate_processes(&records, &TicketPolicy::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ClockOverflow));

        // Each record fits alone; together they run past the end.
        let records = vec![
            ProcessRecord::new(0, Ticks::MAX - 3, 2),
            ProcessRecord::new(1, Ticks::MAX - 3, 2),
        ];
        let errors = validate_processes(&records, &TicketPolicy::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ClockOverflow));
    }

    #[test]
    fn test_clock_at_exact_limit() {
        let records = vec![
            ProcessRecord::new(0, Ticks::MAX - 4, 2),
            ProcessRecord::new(1, 0, 2),
        ];
        assert!(validate_processes(&records, &TicketPolicy::default()).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let records = vec![ProcessRecord::new(3, 0, 0), ProcessRecord::new(3, 0, 2)];
        let errors = validate_processes(&records, &TicketPolicy::new(1, 0)).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
