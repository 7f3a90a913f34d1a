//! Random workload generation.
//!
//! Produces process lists in the input file format, for exercising the
//! simulator on batches of varied size and shape.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{ProcessRecord, Ticks};
use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// Bounds of a random workload. All ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadProfile {
    pub min_processes: usize,
    pub max_processes: usize,
    pub min_arrival: Ticks,
    pub max_arrival: Ticks,
    pub min_burst: Ticks,
    pub max_burst: Ticks,
}

impl Default for WorkloadProfile {
    fn default() -> Self {
        Self {
            min_processes: 1,
            max_processes: 50,
            min_arrival: 0,
            max_arrival: 50,
            min_burst: 1,
            max_burst: 50,
        }
    }
}

impl WorkloadProfile {
    /// Checks that every range is non-empty and bursts are positive.
    ///
    /// # Returns
    /// `Ok(())` if the profile can generate, `Err(errors)` with every bad range.
    pub fn check(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let mut reject = |message: String| {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWorkloadProfile,
                message,
            ))
        };

        if self.min_processes == 0 || self.min_processes > self.max_processes {
            reject(format!(
                "Process count range {}..={} must be non-empty and start at 1 or more",
                self.min_processes, self.max_processes
            ));
        }
        if self.min_arrival > self.max_arrival {
            reject(format!(
                "Arrival range {}..={} is empty",
                self.min_arrival, self.max_arrival
            ));
        }
        if self.min_burst == 0 || self.min_burst > self.max_burst {
            reject(format!(
                "Burst range {}..={} must be non-empty and start at 1 or more",
                self.min_burst, self.max_burst
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Draws a workload. Records are numbered in generation order.
    ///
    /// # Panics
    /// Panics if a range is empty; see [`WorkloadProfile::check`].
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessRecord> {
        let count = rng.random_range(self.min_processes..=self.max_processes);
        (0..count)
            .map(|id| {
                let arrival = rng.random_range(self.min_arrival..=self.max_arrival);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                ProcessRecord::new(id, arrival, burst)
            })
            .collect()
    }
}

/// Renders records as input file text, one `arrival burst` line each.
pub fn render_input(records: &[ProcessRecord]) -> String {
    records
        .iter()
        .map(|p| format!("{} {}\n", p.arrival_time, p.burst_time))
        .collect()
}
