//! Device configuration schema.
//!
//! Mirrors the on-disk `config.yaml` layout, including the original
//! space-separated size keys. Unknown top-level sections (the external
//! server's host/port/identity block, for instance) are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceConfig {
    pub device: DeviceDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceDef {
    pub setup: BlockSizes,
    #[serde(default)]
    pub coils: Vec<SeedValue>,
    #[serde(default)]
    pub discrete_inputs: Vec<SeedValue>,
    #[serde(default)]
    pub holding_registers: Vec<SeedValue>,
    #[serde(default)]
    pub input_registers: Vec<SeedValue>,
}

/// Register block sizes.
///
/// Both discrete blocks take their size from `di size`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockSizes {
    #[serde(rename = "co size")]
    pub co_size: usize,
    #[serde(rename = "di size")]
    pub di_size: usize,
    #[serde(rename = "hr size")]
    pub hr_size: usize,
    #[serde(rename = "ir size")]
    pub ir_size: usize,
}

/// One initial register value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedValue {
    pub addr: u16,
    pub value: u16,
}
