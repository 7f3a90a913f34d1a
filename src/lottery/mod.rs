//! Lottery scheduling primitives.
//!
//! Each scheduling round hands every ready process a number of tickets
//! and draws one ticket uniformly at random; the holder runs next.
//!
//! # Ticket Policy
//!
//! | Class | Condition | Tickets |
//! |-------|-----------|---------|
//! | Short | `remaining <= floor(mean remaining)` | 10 |
//! | Long | otherwise | 1 |
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_lottery::lottery::{draw_winner, TicketPolicy};
//! use u_lottery::models::ProcessRecord;
//! use u_lottery::scheduler::ReadyQueue;
//!
//! let mut records = vec![ProcessRecord::new(0, 0, 5), ProcessRecord::new(1, 0, 3)];
//! let mut queue = ReadyQueue::new();
//! queue.push_back(0);
//! queue.push_back(1);
//!
//! let alloc = TicketPolicy::default().allocate(&queue, &mut records);
//! assert_eq!(alloc.total_tickets, 11);
//!
//! let mut rng = StdRng::seed_from_u64(69420);
//! let draw = draw_winner(&queue, &records, &mut rng);
//! assert!(draw.slot < 2);
//! ```
//!
//! # Reference
//! Waldspurger & Weihl (1994), "Lottery Scheduling: Flexible
//! Proportional-Share Resource Management"

mod draw;
mod tickets;

pub use draw::{draw_winner, resolve_ticket, Draw};
pub use tickets::{Allocation, TicketPolicy, LONG_JOB_TICKETS, SHORT_JOB_TICKETS};
