//! Configured entry point for running a lottery simulation.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Simulation, SimulationOutcome};
use crate::error::Result;
use crate::lottery::TicketPolicy;
use crate::models::ProcessRecord;

/// Compiled-in seed so repeated runs produce identical schedules.
pub const DEFAULT_SEED: u64 = 69420;

/// Lottery scheduler configuration.
///
/// # Example
///
/// ```
/// use u_lottery::models::ProcessRecord;
/// use u_lottery::scheduler::LotteryScheduler;
///
/// let outcome = LotteryScheduler::new()
///     .simulate(vec![ProcessRecord::new(0, 2, 4)])
///     .unwrap();
/// assert_eq!(outcome.records[0].exit_time, Some(6));
/// assert_eq!(outcome.metrics.max_waiting, 0);
/// ```
#[derive(Debug, Clone)]
pub struct LotteryScheduler {
    policy: TicketPolicy,
    seed: u64,
}

impl LotteryScheduler {
    /// Default policy (10/1 tickets) and `DEFAULT_SEED`.
    pub fn new() -> Self {
        Self {
            policy: TicketPolicy::default(),
            seed: DEFAULT_SEED,
        }
    }

    /// Sets the ticket policy.
    pub fn with_policy(mut self, policy: TicketPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn policy(&self) -> &TicketPolicy {
        &self.policy
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds a steppable simulation over `records`.
    pub fn simulation(&self, records: Vec<ProcessRecord>) -> Result<Simulation<StdRng>> {
        log::info!(
            "seeding lottery with {} (short={} long={} tickets)",
            self.seed,
            self.policy.short_job_tickets,
            self.policy.long_job_tickets
        );
        Simulation::new(records, self.policy, StdRng::seed_from_u64(self.seed))
    }

    /// Runs `records` to completion.
    pub fn simulate(&self, records: Vec<ProcessRecord>) -> Result<SimulationOutcome> {
        Ok(self.simulation(records)?.into_outcome())
    }
}

impl Default for LotteryScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn pairs(pairs: &[(u64, u64)]) -> Vec<ProcessRecord> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| ProcessRecord::new(i, a, b))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let s = LotteryScheduler::new();
        assert_eq!(s.seed(), DEFAULT_SEED);
        assert_eq!(*s.policy(), TicketPolicy::default());
    }

    #[test]
    fn test_fixed_seed_reproducible() {
        let input = pairs(&[(0, 6), (0, 2), (1, 9), (5, 1)]);
        let a = LotteryScheduler::new().simulate(input.clone()).unwrap();
        let b = LotteryScheduler::new().simulate(input).unwrap();
        assert_eq!(a.records, b.records);
        assert_eq!(a.metrics, b.metrics);
    }

    #[test]
    fn test_custom_policy_applied() {
        let outcome = LotteryScheduler::new()
            .with_policy(TicketPolicy::new(4, 2))
            .with_seed(1)
            .simulate(pairs(&[(0, 5), (0, 3)]))
            .unwrap();
        let first = outcome.rounds().next().unwrap();
        assert_eq!(first.total_tickets, 6);
    }

    #[test]
    fn test_zero_ticket_policy_rejected() {
        let err = LotteryScheduler::new()
            .with_policy(TicketPolicy::new(10, 0))
            .simulate(pairs(&[(0, 1)]))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
