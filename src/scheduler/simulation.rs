//! Discrete-event lottery simulation driver.
//!
//! # Round Protocol
//!
//! 1. Allocate tickets over the ready queue; the time slice is the
//!    queue's floored average remaining time.
//! 2. Draw a winner.
//! 3. Run the winner one tick at a time, up to the slice. After every
//!    tick, admit due arrivals. The round ends early when the winner
//!    completes or when anything was admitted.
//! 4. If the queue drained while arrivals are pending, jump the clock to
//!    the next arrival instead of simulating idle ticks.
//!
//! # States
//!
//! | State | Queue | Feed |
//! |-------|-------|------|
//! | `Running` | non-empty | any |
//! | `DrainedPendingArrival` | empty | non-empty |
//! | `Done` | empty | exhausted |

use log::{debug, info, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::kpi::SimulationMetrics;
use super::{ArrivalFeed, ReadyQueue};
use crate::error::{Error, Result};
use crate::lottery::{draw_winner, TicketPolicy};
use crate::models::{ProcessId, ProcessRecord, Ticks};
use crate::validation::validate_processes;

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverState {
    Running,
    DrainedPendingArrival,
    Done,
}

/// Why a round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnd {
    /// The winner ran out of work.
    Completed,
    /// A process was admitted mid-slice.
    Arrival,
    /// The full slice was consumed.
    SliceExpired,
}

/// One scheduling decision and the run that followed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: usize,
    pub start_clock: Ticks,
    pub end_clock: Ticks,
    /// Sequence number of the winning process.
    pub winner: ProcessId,
    /// Drawn ticket.
    pub draw: u64,
    pub total_tickets: u64,
    pub queue_len: usize,
    pub average_remaining: Ticks,
    pub time_slice: Ticks,
    /// Ticks actually executed (`end_clock - start_clock`).
    pub ticks: Ticks,
    /// Processes admitted during the round.
    pub admitted: usize,
    pub end: RoundEnd,
}

/// Entry in the simulation trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEvent {
    Round(RoundRecord),
    /// Idle gap skipped after the queue drained.
    ClockJump { from: Ticks, to: Ticks },
}

/// Final state of a finished simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Every record, in input order.
    pub records: Vec<ProcessRecord>,
    pub trace: Vec<TraceEvent>,
    pub metrics: SimulationMetrics,
    pub final_clock: Ticks,
}

impl SimulationOutcome {
    /// Round entries of the trace, in order.
    pub fn rounds(&self) -> impl Iterator<Item = &RoundRecord> {
        rounds_of(&self.trace)
    }

    /// Record with the given sequence number.
    pub fn record(&self, id: ProcessId) -> Option<&ProcessRecord> {
        self.records.iter().find(|p| p.id == id)
    }
}

fn rounds_of(trace: &[TraceEvent]) -> impl Iterator<Item = &RoundRecord> {
    trace.iter().filter_map(|event| match event {
        TraceEvent::Round(round) => Some(round),
        TraceEvent::ClockJump { .. } => None,
    })
}

/// Single-CPU lottery scheduling simulation.
///
/// Owns the record storage; the ready queue and arrival feed index into
/// it by slot. The random source is injected so runs are reproducible.
#[derive(Debug)]
pub struct Simulation<R: Rng> {
    records: Vec<ProcessRecord>,
    queue: ReadyQueue,
    feed: ArrivalFeed,
    policy: TicketPolicy,
    rng: R,
    clock: Ticks,
    state: DriverState,
    trace: Vec<TraceEvent>,
    round: usize,
}

impl<R: Rng> Simulation<R> {
    /// Prepares a simulation and admits the earliest arrivals.
    ///
    /// The clock starts at the earliest arrival time.
    ///
    /// # Errors
    /// `Error::EmptyInput` for an empty record set, `Error::Validation`
    /// for malformed records or a policy that hands out zero tickets.
    pub fn new(records: Vec<ProcessRecord>, policy: TicketPolicy, rng: R) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyInput);
        }
        validate_processes(&records, &policy)?;

        let feed = ArrivalFeed::new(&records);
        let clock = feed.next_arrival(&records).ok_or(Error::EmptyInput)?;

        let mut sim = Self {
            records,
            queue: ReadyQueue::new(),
            feed,
            policy,
            rng,
            clock,
            state: DriverState::Running,
            trace: Vec::new(),
            round: 0,
        };
        sim.admit_arrivals();

        info!(
            "simulation prepared: {} processes, clock starts at {}",
            sim.records.len(),
            sim.clock
        );
        Ok(sim)
    }

    /// Performs one state transition and returns the new state.
    pub fn step(&mut self) -> DriverState {
        match self.state {
            DriverState::Running => self.run_round(),
            DriverState::DrainedPendingArrival => self.jump_to_next_arrival(),
            DriverState::Done => {}
        }
        self.state
    }

    /// Steps until `Done`.
    pub fn run(&mut self) {
        while self.step() != DriverState::Done {}
        info!(
            "simulation finished at t={} after {} rounds",
            self.clock, self.round
        );
    }

    /// Runs to completion and returns the final records, trace and metrics.
    pub fn into_outcome(mut self) -> SimulationOutcome {
        self.run();
        let metrics = SimulationMetrics::calculate(&self.records);
        SimulationOutcome {
            records: self.records,
            trace: self.trace,
            metrics,
            final_clock: self.clock,
        }
    }

    pub fn clock(&self) -> Ticks {
        self.clock
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn ready_queue(&self) -> &ReadyQueue {
        &self.queue
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    pub fn rounds(&self) -> impl Iterator<Item = &RoundRecord> {
        rounds_of(&self.trace)
    }

    fn run_round(&mut self) {
        let alloc = self.policy.allocate(&self.queue, &mut self.records);
        let time_slice = alloc.average_remaining;
        let queue_len = self.queue.len();
        let draw = draw_winner(&self.queue, &self.records, &mut self.rng);
        let winner = draw.slot;

        self.round += 1;
        let start_clock = self.clock;
        let mut ticks: Ticks = 0;
        let mut admitted = 0;
        let mut end = RoundEnd::SliceExpired;

        while ticks < time_slice {
            self.records[winner].remaining_time -= 1;
            self.clock += 1;
            ticks += 1;

            let arrived = self.admit_arrivals();
            admitted += arrived;

            if self.records[winner].remaining_time == 0 {
                self.records[winner].complete(self.clock);
                self.queue.remove(winner);
                end = RoundEnd::Completed;
                break;
            }
            if arrived > 0 {
                end = RoundEnd::Arrival;
                break;
            }
        }

        let record = RoundRecord {
            round: self.round,
            start_clock,
            end_clock: self.clock,
            winner: self.records[winner].id,
            draw: draw.ticket,
            total_tickets: draw.total_tickets,
            queue_len,
            average_remaining: alloc.average_remaining,
            time_slice,
            ticks,
            admitted,
            end,
        };
        debug!(
            "round {}: t={}..{} winner=P{} ticket={}/{} slice={} ran={} end={:?}",
            record.round,
            record.start_clock,
            record.end_clock,
            record.winner,
            record.draw,
            record.total_tickets,
            record.time_slice,
            record.ticks,
            record.end
        );
        self.trace.push(TraceEvent::Round(record));

        self.state = if !self.queue.is_empty() {
            DriverState::Running
        } else if !self.feed.is_exhausted() {
            DriverState::DrainedPendingArrival
        } else {
            DriverState::Done
        };
    }

    fn jump_to_next_arrival(&mut self) {
        let Some(next) = self.feed.next_arrival(&self.records) else {
            self.state = DriverState::Done;
            return;
        };

        let from = self.clock;
        self.clock = self.clock.max(next);
        debug!("ready queue drained, clock jumps {} -> {}", from, self.clock);
        self.trace.push(TraceEvent::ClockJump {
            from,
            to: self.clock,
        });

        self.admit_arrivals();
        self.state = DriverState::Running;
    }

    /// Moves every due arrival to the tail of the ready queue.
    fn admit_arrivals(&mut self) -> usize {
        let due = self.feed.admit_due(self.clock, &self.records);
        for &slot in due {
            trace!("t={}: admitted P{}", self.clock, self.records[slot].id);
            self.queue.push_back(slot);
        }
        due.len()
    }
}
