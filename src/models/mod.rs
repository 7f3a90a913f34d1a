//! Simulation domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessRecord` | Inputs and timing outputs of one process |
//! | `JobClass` | Short/long split used by ticket allocation |
//! | `Ticks` | Simulated time unit |

mod process;

pub use process::{JobClass, ProcessId, ProcessRecord, Ticks};
