//! Append-only history sequences for visualization consumers.

use std::collections::VecDeque;

use df_controls::{GateCommand, GateCommands};
use df_core::{DfError, DfResult, Real};

/// Time-ordered record of water levels, gate commands, and cumulative
/// release.
///
/// Unbounded by default, matching the observed source behavior. A
/// bounded history evicts the oldest sample once full; "replay since
/// start" is lost from that point on, which is the documented deviation
/// a long-lived process can opt into.
#[derive(Clone, Debug, Default)]
pub struct History {
    water_level: VecDeque<Real>,
    gate_1: VecDeque<GateCommand>,
    gate_2: VecDeque<GateCommand>,
    gate_3: VecDeque<GateCommand>,
    cumulative_released: VecDeque<Real>,
    capacity: Option<usize>,
}

impl History {
    /// History that grows for the process lifetime.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// History keeping only the newest `capacity` samples.
    pub fn bounded(capacity: usize) -> DfResult<Self> {
        if capacity == 0 {
            return Err(DfError::InvalidArg {
                what: "history capacity must be positive",
            });
        }
        Ok(Self {
            capacity: Some(capacity),
            ..Self::default()
        })
    }

    /// Append one cycle's results to every sequence.
    pub fn record(&mut self, water_level: Real, commands: GateCommands, cumulative: Real) {
        push(&mut self.water_level, water_level, self.capacity);
        push(&mut self.gate_1, commands.gate_1, self.capacity);
        push(&mut self.gate_2, commands.gate_2, self.capacity);
        push(&mut self.gate_3, commands.gate_3, self.capacity);
        push(&mut self.cumulative_released, cumulative, self.capacity);
    }

    /// Number of recorded samples (identical across sequences).
    pub fn len(&self) -> usize {
        self.water_level.len()
    }

    pub fn is_empty(&self) -> bool {
        self.water_level.is_empty()
    }

    pub fn water_level(&self) -> impl Iterator<Item = Real> + '_ {
        self.water_level.iter().copied()
    }

    pub fn gate(&self, gate: usize) -> impl Iterator<Item = GateCommand> + '_ {
        let seq = match gate {
            0 => &self.gate_1,
            1 => &self.gate_2,
            _ => &self.gate_3,
        };
        seq.iter().copied()
    }

    pub fn cumulative_released(&self) -> impl Iterator<Item = Real> + '_ {
        self.cumulative_released.iter().copied()
    }
}

fn push<T>(seq: &mut VecDeque<T>, value: T, capacity: Option<usize>) {
    if let Some(cap) = capacity
        && seq.len() == cap
    {
        seq.pop_front();
    }
    seq.push_back(value);
}
