//! Application services for damflow.
//!
//! Wires the register store, control engine, and water balance into a
//! periodic control loop, and records cycle results to disk for later
//! inspection.

pub mod control_loop;
pub mod error;
pub mod recorder;

pub use control_loop::{ControlLoop, LoopOptions};
pub use error::{AppError, AppResult};
pub use recorder::{CycleRecord, RunManifest, RunRecorder, load_cycles, load_manifest};
