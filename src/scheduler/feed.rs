//! Arrival feed: not-yet-admitted processes in arrival order.

use crate::models::{ProcessRecord, Ticks};

/// Cursor over the record slots sorted by arrival time.
///
/// The sort is stable, so processes arriving at the same time are
/// admitted in input order.
#[derive(Debug, Clone)]
pub struct ArrivalFeed {
    order: Vec<usize>,
    cursor: usize,
}

impl ArrivalFeed {
    /// Builds the feed over every record in `records`.
    pub fn new(records: &[ProcessRecord]) -> Self {
        let mut order: Vec<usize> = (0..records.len()).collect();
        order.sort_by_key(|&slot| records[slot].arrival_time);
        Self { order, cursor: 0 }
    }

    /// Arrival time of the next process to be admitted.
    pub fn next_arrival(&self, records: &[ProcessRecord]) -> Option<Ticks> {
        self.order
            .get(self.cursor)
            .map(|&slot| records[slot].arrival_time)
    }

    /// Advances past every process with `arrival_time <= now` and returns
    /// their slots in admission order.
    pub fn admit_due(&mut self, now: Ticks, records: &[ProcessRecord]) -> &[usize] {
        let start = self.cursor;
        while let Some(&slot) = self.order.get(self.cursor) {
            if records[slot].arrival_time > now {
                break;
            }
            self.cursor += 1;
        }
        &self.order[start..self.cursor]
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.order.len()
    }

    /// Number of processes still waiting to arrive.
    pub fn pending(&self) -> usize {
        self.order.len() - self.cursor
    }
}
