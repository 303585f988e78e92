//! Single control-cycle orchestration.

use df_controls::{ControlConfig, GateCommand, GateCommands, OverrideInput, resolve_gates};
use df_core::Real;
use df_registers::{RegisterBus, map};
use tracing::debug;

use crate::balance::{ReductionRates, water_balance};
use crate::error::SimResult;
use crate::state::SimState;

/// Outcome of one control cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleOutcome {
    pub commands: GateCommands,
    /// Water released this cycle.
    pub released: Real,
    /// Level after the update.
    pub water_level: Real,
    pub cumulative_released: Real,
}

/// Fetch the threshold and rate configuration from holding registers.
///
/// Read fresh every cycle, never cached: a change written through the
/// bus takes effect on the next cycle.
fn fetch_config(bus: &dyn RegisterBus) -> SimResult<(ControlConfig, ReductionRates)> {
    let config = ControlConfig {
        close_level: bus.read_holding(map::HR_CLOSE_LEVEL)? as Real,
        threshold_1: bus.read_holding(map::HR_THRESHOLD_1)? as Real,
        threshold_2: bus.read_holding(map::HR_THRESHOLD_2)? as Real,
        threshold_3: bus.read_holding(map::HR_THRESHOLD_3)? as Real,
    };
    let rates = ReductionRates {
        gate_1: bus.read_holding(map::HR_RATE_GATE_1)? as Real,
        gate_2: bus.read_holding(map::HR_RATE_GATE_2)? as Real,
        gate_3: bus.read_holding(map::HR_RATE_GATE_3)? as Real,
    };
    Ok((config, rates))
}

/// Fetch the per-gate override enables and manual positions.
fn fetch_overrides(bus: &dyn RegisterBus) -> SimResult<[OverrideInput; 3]> {
    Ok([
        OverrideInput {
            enabled: bus.read_coil(map::CO_OVERRIDE_GATE_1)?,
            position: GateCommand::from_bit(bus.read_coil(map::CO_MANUAL_GATE_1)?),
        },
        OverrideInput {
            enabled: bus.read_coil(map::CO_OVERRIDE_GATE_2)?,
            position: GateCommand::from_bit(bus.read_coil(map::CO_MANUAL_GATE_2)?),
        },
        OverrideInput {
            enabled: bus.read_coil(map::CO_OVERRIDE_GATE_3)?,
            position: GateCommand::from_bit(bus.read_coil(map::CO_MANUAL_GATE_3)?),
        },
    ])
}

/// Execute one control cycle against the register store.
///
/// Strict sequence: read level and surge, read fresh configuration,
/// resolve gate commands, publish gate outputs, run the water balance,
/// write the level back (truncated), append to the history.
pub fn run_cycle(bus: &dyn RegisterBus, state: &mut SimState) -> SimResult<CycleOutcome> {
    let level = map::read_water_level(bus)?;
    let surge = map::read_surge(bus)?;
    let (config, rates) = fetch_config(bus)?;
    let overrides = fetch_overrides(bus)?;

    let (commands, memory) = resolve_gates(level, &config, &overrides, state.gate_1_memory);
    state.gate_1_memory = memory;
    map::write_gate_outputs(
        bus,
        [
            commands.gate_1.bit(),
            commands.gate_2.bit(),
            commands.gate_3.bit(),
        ],
        commands.any_open(),
    )?;

    let update = water_balance(level, commands, &rates, surge);
    state.apply(&update);
    map::write_water_level(bus, state.water_level)?;

    state
        .history
        .record(state.water_level, commands, state.cumulative_released);

    debug!(
        level,
        surge,
        released = update.released,
        next_level = state.water_level,
        "cycle computed"
    );

    Ok(CycleOutcome {
        commands,
        released: update.released,
        water_level: state.water_level,
        cumulative_released: state.cumulative_released,
    })
}
