//! Register-mapped store for the dam simulation.
//!
//! The control loop and any external client talk to the same store
//! through [`RegisterBus`]: typed get/set per register class, addressed
//! exactly as the external I/O service addresses them. Each access is
//! individually consistent (no torn single-register reads); the store
//! makes no promise that a whole control cycle appears atomic to an
//! external observer.

pub mod bus;
pub mod error;
pub mod map;

pub use bus::{BusLayout, DiscreteBlock, MemoryBus, RegisterBus, RegisterClass};
pub use error::{RegisterError, RegisterResult};
