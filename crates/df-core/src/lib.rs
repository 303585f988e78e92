//! df-core: stable foundation for damflow.
//!
//! Contains:
//! - numeric (Real + level scale + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DfError, DfResult};
pub use numeric::*;
