//! The damflow register map.
//!
//! Addresses are a bit-exact contract with the external I/O service;
//! renumbering any of them breaks external clients.

use df_core::Real;

use crate::bus::{DiscreteBlock, RegisterBus};
use crate::error::RegisterResult;

/// Holding register: level below which gate 1 auto-closes.
pub const HR_CLOSE_LEVEL: u16 = 0;
/// Holding registers: per-gate reduction rates, percent of level per cycle.
pub const HR_RATE_GATE_1: u16 = 1;
pub const HR_RATE_GATE_2: u16 = 2;
pub const HR_RATE_GATE_3: u16 = 3;
/// Holding registers: levels at which gates 1-3 auto-open.
pub const HR_THRESHOLD_1: u16 = 4;
pub const HR_THRESHOLD_2: u16 = 5;
pub const HR_THRESHOLD_3: u16 = 6;

/// Coils: manual gate positions.
pub const CO_MANUAL_GATE_1: u16 = 0;
pub const CO_MANUAL_GATE_2: u16 = 1;
pub const CO_MANUAL_GATE_3: u16 = 2;
/// Coils: per-gate override enables.
pub const CO_OVERRIDE_GATE_1: u16 = 3;
pub const CO_OVERRIDE_GATE_2: u16 = 4;
pub const CO_OVERRIDE_GATE_3: u16 = 5;

/// Discrete inputs (`Status` block): final command per gate.
pub const DI_GATE_1_COMMAND: u16 = 0;
pub const DI_GATE_2_COMMAND: u16 = 1;
pub const DI_GATE_3_COMMAND: u16 = 2;
/// Discrete input (`Flags` block): OR of all three final commands.
pub const DI_ANY_GATE_OPEN: u16 = 0;

/// Input register: current water level.
pub const IR_WATER_LEVEL: u16 = 0;
/// Input register: surge inflow, signed 16-bit.
pub const IR_SURGE: u16 = 1;

/// Read the current water level.
pub fn read_water_level(bus: &dyn RegisterBus) -> RegisterResult<Real> {
    Ok(bus.read_input(IR_WATER_LEVEL)? as Real)
}

/// Read the surge inflow.
///
/// The register is interpreted as two's-complement so external clients
/// can inject a negative surge (outflow).
pub fn read_surge(bus: &dyn RegisterBus) -> RegisterResult<Real> {
    Ok(bus.read_input(IR_SURGE)? as i16 as Real)
}

/// Write the post-update water level, truncated to an integer.
pub fn write_water_level(bus: &dyn RegisterBus, level: Real) -> RegisterResult<()> {
    bus.write_input(IR_WATER_LEVEL, level as u16)
}

/// Publish the per-cycle gate outputs: one digital output per gate plus
/// the any-gate-open flag.
pub fn write_gate_outputs(
    bus: &dyn RegisterBus,
    gates_open: [bool; 3],
    any_open: bool,
) -> RegisterResult<()> {
    bus.write_discrete(DiscreteBlock::Status, DI_GATE_1_COMMAND, gates_open[0])?;
    bus.write_discrete(DiscreteBlock::Status, DI_GATE_2_COMMAND, gates_open[1])?;
    bus.write_discrete(DiscreteBlock::Status, DI_GATE_3_COMMAND, gates_open[2])?;
    bus.write_discrete(DiscreteBlock::Flags, DI_ANY_GATE_OPEN, any_open)
}
