//! Water balance model and control-cycle orchestration.
//!
//! Provides:
//! - The per-cycle water balance (percentage-of-level releases, final
//!   clamp onto the level scale, cumulative accounting)
//! - The explicit simulation state owned by the control loop
//! - Append-only history sequences for visualization consumers
//! - `run_cycle`, one full control cycle against a register store

pub mod balance;
pub mod cycle;
pub mod error;
pub mod history;
pub mod state;

pub use balance::{BalanceUpdate, ReductionRates, water_balance};
pub use cycle::{CycleOutcome, run_cycle};
pub use error::{SimError, SimResult};
pub use history::History;
pub use state::SimState;
