//! Lottery scheduling simulation.
//!
//! Replays a fixed batch of processes on one simulated CPU, one time
//! unit at a time, and reports per-process and aggregate timings.
//!
//! # Components
//!
//! - `ArrivalFeed`: processes not yet admitted, in arrival order.
//! - `ReadyQueue`: admitted, unfinished processes competing for the CPU.
//! - `Simulation`: the round loop and its state machine.
//! - `SimulationMetrics`: turnaround and waiting-time aggregates.
//! - `LotteryScheduler`: seeded, configured entry point.
//!
//! # Time Slices
//!
//! The slice of each round equals the queue's floored average remaining
//! time, so slices shrink as work drains and short jobs are re-evaluated
//! more often.

mod feed;
mod kpi;
mod queue;
mod runner;
mod simulation;

pub use feed::ArrivalFeed;
pub use kpi::SimulationMetrics;
pub use queue::ReadyQueue;
pub use runner::{LotteryScheduler, DEFAULT_SEED};
pub use simulation::{
    DriverState, RoundEnd, RoundRecord, Simulation, SimulationOutcome, TraceEvent,
};
