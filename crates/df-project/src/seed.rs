//! Configuration loading and register-store seeding.

use std::fs;
use std::path::Path;

use df_registers::{BusLayout, DiscreteBlock, MemoryBus, RegisterBus};

use crate::error::ProjectResult;
use crate::schema::DeviceConfig;

/// Read and parse a device configuration file.
pub fn load_config(path: &Path) -> ProjectResult<DeviceConfig> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Build a register store from the configuration and seed every
/// declared initial value.
///
/// A seed entry outside its block is an error: a bad configuration must
/// fail before the loop starts, not be skipped.
pub fn build_bus(config: &DeviceConfig) -> ProjectResult<MemoryBus> {
    let device = &config.device;
    let bus = MemoryBus::new(BusLayout {
        coils: device.setup.co_size,
        discrete: device.setup.di_size,
        holding: device.setup.hr_size,
        input: device.setup.ir_size,
    });

    for item in &device.coils {
        bus.write_coil(item.addr, item.value != 0)?;
    }
    for item in &device.discrete_inputs {
        bus.write_discrete(DiscreteBlock::Status, item.addr, item.value != 0)?;
    }
    for item in &device.holding_registers {
        bus.write_holding(item.addr, item.value)?;
    }
    for item in &device.input_registers {
        bus.write_input(item.addr, item.value)?;
    }

    Ok(bus)
}
