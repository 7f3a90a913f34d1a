//! Ready queue over the simulation's record storage.

use serde::{Deserialize, Serialize};

use crate::models::{ProcessRecord, Ticks};

/// Ordered set of admitted, unfinished processes.
///
/// Holds slot indices into the record slice owned by the simulation,
/// never the records themselves. Order is admission order; removal is a
/// linear scan by slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyQueue {
    slots: Vec<usize>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot at the tail.
    pub fn push_back(&mut self, slot: usize) {
        debug_assert!(!self.contains(slot), "slot {slot} already queued");
        self.slots.push(slot);
    }

    /// Removes `slot`, preserving the order of the others.
    ///
    /// Returns `false` if the slot was not queued.
    pub fn remove(&mut self, slot: usize) -> bool {
        match self.slots.iter().position(|&s| s == slot) {
            Some(pos) => {
                self.slots.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, slot: usize) -> bool {
        self.slots.contains(&slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in queue order.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Queued records in queue order.
    pub fn members<'a>(
        &'a self,
        records: &'a [ProcessRecord],
    ) -> impl Iterator<Item = &'a ProcessRecord> + 'a {
        self.slots.iter().map(move |&slot| &records[slot])
    }

    /// Floor of the mean remaining time over the queue.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn average_remaining(&self, records: &[ProcessRecord]) -> Ticks {
        assert!(
            !self.is_empty(),
            "average remaining time requested for an empty ready queue"
        );
        let total: Ticks = self.members(records).map(|p| p.remaining_time).sum();
        total / self.len() as Ticks
    }

    /// Sum of the tickets currently held by queued records.
    pub fn total_tickets(&self, records: &[ProcessRecord]) -> u64 {
        self.members(records)
            .map(|p| u64::from(p.tickets.unwrap_or(0)))
            .sum()
    }
}
