//! Application-level error type.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Sim(#[from] df_sim::SimError),

    #[error(transparent)]
    Project(#[from] df_project::ProjectError),

    #[error("Register access failed: {0}")]
    Register(#[from] df_registers::RegisterError),

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Recording failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<df_core::DfError> for AppError {
    fn from(e: df_core::DfError) -> Self {
        match e {
            df_core::DfError::InvalidArg { what } | df_core::DfError::Invariant { what } => {
                AppError::InvalidArg { what }
            }
        }
    }
}
