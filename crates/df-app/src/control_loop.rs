//! Periodic control-loop execution.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use df_registers::RegisterBus;
use df_sim::{run_cycle, CycleOutcome, SimState};
use tracing::{info, warn};

use crate::error::AppResult;
use crate::recorder::RunRecorder;

/// Options for loop execution.
#[derive(Clone, Debug)]
pub struct LoopOptions {
    /// Fixed cycle interval.
    pub interval: Duration,
    /// Number of cycles to run; `None` runs for the process lifetime.
    pub max_cycles: Option<u64>,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_cycles: None,
        }
    }
}

/// The periodic control loop.
///
/// Owns the simulation state exclusively; the register store is shared
/// with external clients. A failed cycle is logged and retried after
/// one interval; no error terminates the loop, and there is no
/// cancellation beyond the optional cycle budget.
pub struct ControlLoop {
    bus: Arc<dyn RegisterBus>,
    state: SimState,
    options: LoopOptions,
    recorder: Option<RunRecorder>,
}

impl ControlLoop {
    pub fn new(bus: Arc<dyn RegisterBus>, state: SimState, options: LoopOptions) -> Self {
        Self {
            bus,
            state,
            options,
            recorder: None,
        }
    }

    /// Attach a run recorder; each completed cycle appends one record.
    pub fn with_recorder(mut self, recorder: RunRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Execute a single cycle, including recording.
    pub fn step(&mut self, cycle: u64) -> AppResult<CycleOutcome> {
        let outcome = run_cycle(self.bus.as_ref(), &mut self.state)?;
        if let Some(recorder) = &mut self.recorder {
            recorder.record(cycle, &outcome)?;
        }
        Ok(outcome)
    }

    /// Run until the cycle budget is exhausted (forever when unbounded).
    pub fn run(&mut self) {
        let mut cycle: u64 = 0;
        loop {
            match self.options.max_cycles {
                Some(max) if cycle >= max => break,
                _ => {}
            }

            match self.step(cycle) {
                Ok(outcome) => info!(
                    cycle,
                    water_level = outcome.water_level,
                    released = outcome.released,
                    cumulative = outcome.cumulative_released,
                    gate_1 = outcome.commands.gate_1.bit(),
                    gate_2 = outcome.commands.gate_2.bit(),
                    gate_3 = outcome.commands.gate_3.bit(),
                    "cycle complete"
                ),
                Err(err) => warn!(cycle, %err, "cycle failed; retrying next interval"),
            }

            cycle += 1;
            // Uniform pacing: a failed cycle waits out the same interval
            // before the retry.
            if self.options.max_cycles.map_or(true, |max| cycle < max) {
                thread::sleep(self.options.interval);
            }
        }
    }
}
