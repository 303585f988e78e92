//! Door control engine for the dam simulation.
//!
//! Resolves override/automatic inputs into three discrete gate
//! commands once per control cycle. Gate 1 carries hysteresis memory
//! (a Schmitt-trigger dead band between its close level and its open
//! threshold); gates 2 and 3 are stateless threshold rules.
//!
//! The engine is a pure function plus one memory cell: it has no
//! failure modes of its own, and malformed configurations (an empty
//! dead band) produce degenerate but defined behavior rather than an
//! error.

pub mod engine;
pub mod gate;

pub use engine::{ControlConfig, GateCommands, OverrideInput, resolve_gates};
pub use gate::{GateCommand, HysteresisGate, ThresholdGate};
