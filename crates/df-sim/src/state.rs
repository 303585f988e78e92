//! Simulation state owned by the control loop.

use df_controls::GateCommand;
use df_core::Real;

use crate::balance::BalanceUpdate;
use crate::history::History;

/// All mutable state of the simulation, held exclusively by the loop.
///
/// The source kept these as module-level globals; here they live in one
/// struct passed to each cycle call, which keeps the cycle function
/// testable in isolation and makes every cycle atomic with respect to
/// the gate-1 memory and the cumulative total.
#[derive(Clone, Debug)]
pub struct SimState {
    /// Current water level, always on the [0, 100] scale.
    pub water_level: Real,
    /// Total released since process start; never reset.
    pub cumulative_released: Real,
    /// Gate 1's final command from the previous cycle.
    pub gate_1_memory: GateCommand,
    /// Published time series.
    pub history: History,
}

impl SimState {
    /// State at process start: level as seeded from the register store,
    /// nothing released, gate 1 closed.
    pub fn new(water_level: Real) -> Self {
        Self::with_history(water_level, History::unbounded())
    }

    pub fn with_history(water_level: Real, history: History) -> Self {
        Self {
            water_level,
            cumulative_released: 0.0,
            gate_1_memory: GateCommand::Closed,
            history,
        }
    }

    /// Adopt a balance update: accumulate the release, move to the new
    /// level.
    pub fn apply(&mut self, update: &BalanceUpdate) {
        self.cumulative_released += update.released;
        self.water_level = update.next_level;
    }
}
