//! Water balance: per-cycle release and level update.

use df_core::{Real, clamp_level};
use df_controls::GateCommands;
use serde::{Deserialize, Serialize};

/// Per-gate release rates, percent of the current level per cycle.
///
/// Released water is relative to the total level to approximate
/// pressure from gravity; this is not a hydraulic model. Negative rates
/// are not rejected: an open gate with a negative rate adds water, and
/// the final clamp still bounds the level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReductionRates {
    pub gate_1: Real,
    pub gate_2: Real,
    pub gate_3: Real,
}

/// Result of one water-balance step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceUpdate {
    /// Water released through open gates this cycle.
    pub released: Real,
    /// Level after release and surge, clamped onto the scale.
    pub next_level: Real,
}

/// Compute one cycle's release and the next water level.
///
/// Every open gate releases against the *pre-update* level, so gate
/// order does not matter within a cycle. Clamping is the final step: a
/// large surge cannot push the level above the ceiling and releases
/// cannot drive it below the floor.
pub fn water_balance(
    level: Real,
    commands: GateCommands,
    rates: &ReductionRates,
    surge: Real,
) -> BalanceUpdate {
    let mut released = 0.0;
    if commands.gate_1.is_open() {
        released += level * rates.gate_1 / 100.0;
    }
    if commands.gate_2.is_open() {
        released += level * rates.gate_2 / 100.0;
    }
    if commands.gate_3.is_open() {
        released += level * rates.gate_3 / 100.0;
    }

    BalanceUpdate {
        released,
        next_level: clamp_level(level - released + surge),
    }
}
