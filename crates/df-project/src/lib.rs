//! Device configuration loading and register seeding.
//!
//! Parses the YAML device description (block sizes plus initial
//! register values) and seeds a fresh register store before the control
//! loop starts. This is the one pre-loop context where failing is
//! correct: a malformed configuration aborts startup instead of being
//! retried.

pub mod error;
pub mod schema;
pub mod seed;

pub use error::{ProjectError, ProjectResult};
pub use schema::{BlockSizes, DeviceConfig, DeviceDef, SeedValue};
pub use seed::{build_bus, load_config};
