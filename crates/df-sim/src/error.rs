//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while running the simulation.
///
/// None of these are fatal to the control loop: a failed cycle is
/// logged and the loop retries after one interval.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Register access failed: {message}")]
    Register { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<df_registers::RegisterError> for SimError {
    fn from(e: df_registers::RegisterError) -> Self {
        SimError::Register {
            message: e.to_string(),
        }
    }
}
