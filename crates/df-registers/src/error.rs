//! Error types for register store operations.

use crate::bus::RegisterClass;
use thiserror::Error;

/// Result type for register store operations.
pub type RegisterResult<T> = Result<T, RegisterError>;

/// Errors that can occur when accessing the register store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// Address outside the configured block.
    #[error("{class} address {addr} out of range (block size {len})")]
    OutOfRange {
        class: RegisterClass,
        addr: u16,
        len: usize,
    },
}
