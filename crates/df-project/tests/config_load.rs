//! Parsing tests against a complete on-disk style configuration.

use df_project::{DeviceConfig, build_bus};
use df_registers::RegisterBus;

const FULL_CONFIG: &str = "
server:
  host: 0.0.0.0
  port: 5020
  identity:
    VendorName: damflow
    ProductName: dam simulator

device:
  setup:
    co size: 8
    di size: 8
    hr size: 8
    ir size: 8
  coils:
    - addr: 0
      value: 0
    - addr: 3
      value: 0
  holding_registers:
    - addr: 0
      value: 30
    - addr: 1
      value: 10
    - addr: 2
      value: 20
    - addr: 3
      value: 30
    - addr: 4
      value: 70
    - addr: 5
      value: 80
    - addr: 6
      value: 90
  input_registers:
    - addr: 0
      value: 55
    - addr: 1
      value: 5
";

#[test]
fn parses_full_config_ignoring_server_section() {
    let config: DeviceConfig = serde_yaml::from_str(FULL_CONFIG).unwrap();
    assert_eq!(config.device.holding_registers.len(), 7);
    assert_eq!(config.device.input_registers[1].value, 5);
}

#[test]
fn seeded_bus_matches_config() {
    let config: DeviceConfig = serde_yaml::from_str(FULL_CONFIG).unwrap();
    let bus = build_bus(&config).unwrap();
    assert_eq!(bus.read_holding(0).unwrap(), 30);
    assert_eq!(bus.read_holding(6).unwrap(), 90);
    assert_eq!(bus.read_input(0).unwrap(), 55);
    assert!(!bus.read_coil(3).unwrap());
}
