//! Lottery CPU scheduling simulator.
//!
//! Replays a fixed batch of `(arrival, burst)` processes on a single
//! simulated CPU under lottery scheduling, then reports turnaround and
//! waiting times.
//!
//! # Modules
//!
//! - **`models`**: `ProcessRecord`, `JobClass`, `Ticks`
//! - **`lottery`**: ticket allocation (short/long split) and winner draw
//! - **`scheduler`**: ready queue, arrival feed, simulation driver, metrics
//! - **`input`**: process list parsing
//! - **`report`**: results table
//! - **`validation`**: record-set and policy checks
//! - **`workload`**: random workload generation
//!
//! # Example
//!
//! ```
//! use u_lottery::input::parse_processes;
//! use u_lottery::scheduler::LotteryScheduler;
//!
//! let records = parse_processes("0 5\n0 3\n").unwrap();
//! let outcome = LotteryScheduler::new().simulate(records).unwrap();
//! assert_eq!(outcome.final_clock, 8);
//! ```
//!
//! # References
//!
//! - Waldspurger & Weihl (1994), "Lottery Scheduling: Flexible
//!   Proportional-Share Resource Management"
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod error;
pub mod input;
pub mod logger;
pub mod lottery;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
