//! Ticket allocation policy.

use serde::{Deserialize, Serialize};

use crate::models::{JobClass, ProcessRecord, Ticks};
use crate::scheduler::ReadyQueue;

/// Tickets granted to a short job.
pub const SHORT_JOB_TICKETS: u32 = 10;
/// Tickets granted to a long job.
pub const LONG_JOB_TICKETS: u32 = 1;

/// Short/long ticket split.
///
/// A queued process whose remaining time is at or below the queue's
/// floored average is a short job; every other process is a long job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPolicy {
    /// Tickets per short job (>= 1).
    pub short_job_tickets: u32,
    /// Tickets per long job (>= 1).
    pub long_job_tickets: u32,
}

/// Snapshot of one allocation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    /// Floored mean remaining time of the queue.
    pub average_remaining: Ticks,
    /// Sum of tickets handed out.
    pub total_tickets: u64,
}

impl Default for TicketPolicy {
    fn default() -> Self {
        Self {
            short_job_tickets: SHORT_JOB_TICKETS,
            long_job_tickets: LONG_JOB_TICKETS,
        }
    }
}

impl TicketPolicy {
    /// Creates a policy with explicit ticket counts.
    pub fn new(short_job_tickets: u32, long_job_tickets: u32) -> Self {
        Self {
            short_job_tickets,
            long_job_tickets,
        }
    }

    /// Tickets for a process in `class`.
    pub fn tickets_for(&self, class: JobClass) -> u32 {
        match class {
            JobClass::Short => self.short_job_tickets,
            JobClass::Long => self.long_job_tickets,
        }
    }

    /// Classifies a remaining time against the queue average.
    pub fn classify(remaining: Ticks, average_remaining: Ticks) -> JobClass {
        if remaining <= average_remaining {
            JobClass::Short
        } else {
            JobClass::Long
        }
    }

    /// Recomputes tickets and classification for every queued record.
    ///
    /// Runs once per scheduling round; the result reflects the queue at
    /// the start of the round.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn allocate(&self, queue: &ReadyQueue, records: &mut [ProcessRecord]) -> Allocation {
        let average_remaining = queue.average_remaining(records);
        let mut total_tickets = 0u64;

        for &slot in queue.slots() {
            let record = &mut records[slot];
            let class = Self::classify(record.remaining_time, average_remaining);
            let tickets = self.tickets_for(class);
            record.job_class = Some(class);
            record.tickets = Some(tickets);
            total_tickets += u64::from(tickets);
        }

        Allocation {
            average_remaining,
            total_tickets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queued(remaining: &[Ticks]) -> (ReadyQueue, Vec<ProcessRecord>) {
        let records: Vec<ProcessRecord> = remaining
            .iter()
            .enumerate()
            .map(|(i, &r)| ProcessRecord::new(i, 0, r))
            .collect();
        let mut queue = ReadyQueue::new();
        for slot in 0..records.len() {
            queue.push_back(slot);
        }
        (queue, records)
    }

    #[test]
    fn test_default_policy() {
        let policy = TicketPolicy::default();
        assert_eq!(policy.short_job_tickets, 10);
        assert_eq!(policy.long_job_tickets, 1);
    }

    #[test]
    fn test_classification_against_floored_mean() {
        // mean = 20 / 4 = 5
        let (queue, mut records) = queued(&[3, 5, 4, 8]);
        let alloc = TicketPolicy::default().allocate(&queue, &mut records);

        assert_eq!(alloc.average_remaining, 5);
        for record in &records {
            if record.remaining_time <= 5 {
                assert_eq!(record.job_class, Some(JobClass::Short));
                assert_eq!(record.tickets, Some(10));
            } else {
                assert_eq!(record.job_class, Some(JobClass::Long));
                assert_eq!(record.tickets, Some(1));
            }
        }
        assert_eq!(alloc.total_tickets, 31);
    }

    #[test]
    fn test_two_job_scenario() {
        // bursts 5 and 3: mean 4, the 3-burst job is short
        let (queue, mut records) = queued(&[5, 3]);
        let alloc = TicketPolicy::default().allocate(&queue, &mut records);

        assert_eq!(alloc.average_remaining, 4);
        assert_eq!(records[0].job_class, Some(JobClass::Long));
        assert_eq!(records[1].job_class, Some(JobClass::Short));
        assert_eq!(alloc.total_tickets, 11);
    }

    #[test]
    fn test_equal_remaining_all_short() {
        let (queue, mut records) = queued(&[4, 4, 4]);
        let alloc = TicketPolicy::default().allocate(&queue, &mut records);
        assert!(records.iter().all(|r| r.job_class == Some(JobClass::Short)));
        assert_eq!(alloc.total_tickets, 30);
    }

    #[test]
    fn test_only_queued_records_touched() {
        let (mut queue, mut records) = queued(&[2, 6, 9]);
        queue.remove(2);
        TicketPolicy::new(7, 2).allocate(&queue, &mut records);

        assert_eq!(records[0].tickets, Some(7));
        assert_eq!(records[1].tickets, Some(2));
        assert!(records[2].tickets.is_none());
    }
}
