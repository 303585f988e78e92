//! Gate command type and the two automatic gate rules.

use df_core::Real;
use serde::{Deserialize, Serialize};

/// Commanded position of a discharge gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateCommand {
    /// Gate shut, no release.
    #[default]
    Closed,
    /// Gate open, releasing water.
    Open,
}

impl GateCommand {
    pub fn is_open(self) -> bool {
        matches!(self, GateCommand::Open)
    }

    /// Map a register bit onto a command.
    pub fn from_bit(bit: bool) -> Self {
        if bit { GateCommand::Open } else { GateCommand::Closed }
    }

    /// Map a command onto a register bit.
    pub fn bit(self) -> bool {
        self.is_open()
    }
}

/// Two-threshold hysteresis rule (gate 1).
///
/// Opens above `open_above`, closes below `close_below`, and holds the
/// previous command inside the dead band (boundaries included). If
/// `close_below > open_above` the band is empty and the rule collapses
/// to a plain threshold; that configuration is accepted as-is, never
/// corrected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HysteresisGate {
    pub open_above: Real,
    pub close_below: Real,
}

impl HysteresisGate {
    /// Compute this cycle's automatic command.
    pub fn command(&self, level: Real, previous: GateCommand) -> GateCommand {
        if level > self.open_above {
            GateCommand::Open
        } else if level < self.close_below {
            GateCommand::Closed
        } else {
            previous
        }
    }
}

/// Single-threshold stateless rule (gates 2 and 3).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdGate {
    pub open_above: Real,
}

impl ThresholdGate {
    /// Open iff the level is strictly above the threshold.
    pub fn command(&self, level: Real) -> GateCommand {
        GateCommand::from_bit(level > self.open_above)
    }
}
