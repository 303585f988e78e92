//! Override resolution and the per-cycle engine step.

use df_core::Real;
use serde::{Deserialize, Serialize};

use crate::gate::{GateCommand, HysteresisGate, ThresholdGate};

/// Threshold configuration, read fresh from the register store every
/// cycle.
///
/// Plain data, deliberately not validated: `close_level > threshold_1`
/// yields an empty dead band and gate 1 behaves as a plain threshold
/// rule. Non-monotonic thresholds flow through the formulas untouched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    pub close_level: Real,
    pub threshold_1: Real,
    pub threshold_2: Real,
    pub threshold_3: Real,
}

impl ControlConfig {
    pub fn gate_1(&self) -> HysteresisGate {
        HysteresisGate {
            open_above: self.threshold_1,
            close_below: self.close_level,
        }
    }

    pub fn gate_2(&self) -> ThresholdGate {
        ThresholdGate {
            open_above: self.threshold_2,
        }
    }

    pub fn gate_3(&self) -> ThresholdGate {
        ThresholdGate {
            open_above: self.threshold_3,
        }
    }
}

/// Externally supplied manual control for one gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideInput {
    /// When set, `position` wins unconditionally over the automatic rule.
    pub enabled: bool,
    pub position: GateCommand,
}

impl OverrideInput {
    /// Apply override precedence to an automatic command.
    pub fn resolve(self, automatic: GateCommand) -> GateCommand {
        if self.enabled { self.position } else { automatic }
    }
}

/// Final commands for the three gates, one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateCommands {
    pub gate_1: GateCommand,
    pub gate_2: GateCommand,
    pub gate_3: GateCommand,
}

impl GateCommands {
    /// OR of all three final commands, published as a derived flag.
    pub fn any_open(&self) -> bool {
        self.gate_1.is_open() || self.gate_2.is_open() || self.gate_3.is_open()
    }
}

/// One engine step: automatic rules, then override precedence.
///
/// Returns the final commands together with the new gate-1 memory. The
/// memory is the *final* (post-override) gate-1 command, so a manual
/// override durably moves the hysteresis baseline: when the override is
/// cleared, the automatic rule resumes from whatever position the
/// override left the gate in.
pub fn resolve_gates(
    level: Real,
    config: &ControlConfig,
    overrides: &[OverrideInput; 3],
    previous_gate_1: GateCommand,
) -> (GateCommands, GateCommand) {
    let auto_1 = config.gate_1().command(level, previous_gate_1);
    let auto_2 = config.gate_2().command(level);
    let auto_3 = config.gate_3().command(level);

    let commands = GateCommands {
        gate_1: overrides[0].resolve(auto_1),
        gate_2: overrides[1].resolve(auto_2),
        gate_3: overrides[2].resolve(auto_3),
    };
    (commands, commands.gate_1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: ControlConfig = ControlConfig {
        close_level: 30.0,
        threshold_1: 70.0,
        threshold_2: 80.0,
        threshold_3: 90.0,
    };

    const NO_OVERRIDES: [OverrideInput; 3] = [
        OverrideInput {
            enabled: false,
            position: GateCommand::Closed,
        };
        3
    ];

    #[test]
    fn staged_opening_with_rising_level() {
        let (low, _) = resolve_gates(50.0, &CONFIG, &NO_OVERRIDES, GateCommand::Closed);
        assert!(!low.any_open());

        let (mid, _) = resolve_gates(85.0, &CONFIG, &NO_OVERRIDES, GateCommand::Closed);
        assert_eq!(mid.gate_1, GateCommand::Open);
        assert_eq!(mid.gate_2, GateCommand::Open);
        assert_eq!(mid.gate_3, GateCommand::Closed);

        let (high, _) = resolve_gates(95.0, &CONFIG, &NO_OVERRIDES, GateCommand::Closed);
        assert!(high.gate_3.is_open());
        assert!(high.any_open());
    }

    #[test]
    fn gate_1_holds_in_dead_band() {
        let (commands, memory) = resolve_gates(50.0, &CONFIG, &NO_OVERRIDES, GateCommand::Open);
        assert_eq!(commands.gate_1, GateCommand::Open);
        assert_eq!(memory, GateCommand::Open);
    }

    #[test]
    fn override_wins_over_automatic() {
        let mut overrides = NO_OVERRIDES;
        overrides[0] = OverrideInput {
            enabled: true,
            position: GateCommand::Closed,
        };
        // Level well above threshold_1; automatic would open.
        let (commands, memory) = resolve_gates(95.0, &CONFIG, &overrides, GateCommand::Closed);
        assert_eq!(commands.gate_1, GateCommand::Closed);
        assert_eq!(memory, GateCommand::Closed);
    }

    #[test]
    fn override_moves_the_hysteresis_baseline() {
        // Cycle 1: force gate 1 open while the level sits in the dead band.
        let mut overrides = NO_OVERRIDES;
        overrides[0] = OverrideInput {
            enabled: true,
            position: GateCommand::Open,
        };
        let (_, memory) = resolve_gates(50.0, &CONFIG, &overrides, GateCommand::Closed);
        assert_eq!(memory, GateCommand::Open);

        // Cycle 2: override cleared, still in the dead band. The automatic
        // rule resumes from the overridden position.
        let (commands, _) = resolve_gates(50.0, &CONFIG, &NO_OVERRIDES, memory);
        assert_eq!(commands.gate_1, GateCommand::Open);
    }

    #[test]
    fn overrides_are_per_gate() {
        let mut overrides = NO_OVERRIDES;
        overrides[2] = OverrideInput {
            enabled: true,
            position: GateCommand::Open,
        };
        let (commands, _) = resolve_gates(10.0, &CONFIG, &overrides, GateCommand::Closed);
        assert_eq!(commands.gate_1, GateCommand::Closed);
        assert_eq!(commands.gate_2, GateCommand::Closed);
        assert_eq!(commands.gate_3, GateCommand::Open);
        assert!(commands.any_open());
    }

    #[test]
    fn engine_is_deterministic() {
        let overrides = NO_OVERRIDES;
        let a = resolve_gates(64.2, &CONFIG, &overrides, GateCommand::Open);
        let b = resolve_gates(64.2, &CONFIG, &overrides, GateCommand::Open);
        assert_eq!(a, b);
    }
}
