//! Winner selection.

use rand::Rng;

use crate::models::ProcessRecord;
use crate::scheduler::ReadyQueue;

/// Outcome of one lottery draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// Slot of the winning record.
    pub slot: usize,
    /// Drawn ticket value in `[1, total_tickets]`.
    pub ticket: u64,
    /// Tickets in play.
    pub total_tickets: u64,
}

/// Maps a ticket value to the queue member holding it.
///
/// The range `[1, T]` is split into contiguous per-member ranges sized
/// by ticket count, in queue order. Member `i` owns `v` when
/// `sum(t[..i]) < v <= sum(t[..=i])`. Returns `None` for `v = 0` or
/// `v > T`.
pub fn resolve_ticket(
    queue: &ReadyQueue,
    records: &[ProcessRecord],
    ticket: u64,
) -> Option<usize> {
    if ticket == 0 {
        return None;
    }

    let mut cumulative = 0u64;
    for &slot in queue.slots() {
        cumulative += u64::from(records[slot].tickets.unwrap_or(0));
        if cumulative >= ticket {
            return Some(slot);
        }
    }
    None
}

/// Draws a uniform ticket from `[1, T]` and resolves it to a winner.
///
/// Each member wins with probability `tickets / T`. Records are not
/// mutated.
///
/// # Panics
/// Panics if the queue is empty or holds no tickets.
pub fn draw_winner<R: Rng>(queue: &ReadyQueue, records: &[ProcessRecord], rng: &mut R) -> Draw {
    assert!(!queue.is_empty(), "lottery drawn over an empty ready queue");
    let total_tickets = queue.total_tickets(records);
    assert!(total_tickets > 0, "lottery drawn with no tickets allocated");

    let ticket = rng.random_range(1..=total_tickets);
    let slot = resolve_ticket(queue, records, ticket)
        .expect("ticket within [1, total] always has an owner");

    Draw {
        slot,
        ticket,
        total_tickets,
    }
}
