//! Integration tests for full control cycles against an in-memory
//! register store.

use df_controls::GateCommand;
use df_core::{Tolerances, nearly_equal};
use df_registers::{BusLayout, DiscreteBlock, MemoryBus, RegisterBus, map};
use df_sim::{SimState, run_cycle};

/// Seed the standard test configuration: close 30, thresholds 70/80/90,
/// rates 10/20/30 percent.
fn seeded_bus(water_level: u16) -> MemoryBus {
    let bus = MemoryBus::default();
    bus.write_holding(map::HR_CLOSE_LEVEL, 30).unwrap();
    bus.write_holding(map::HR_THRESHOLD_1, 70).unwrap();
    bus.write_holding(map::HR_THRESHOLD_2, 80).unwrap();
    bus.write_holding(map::HR_THRESHOLD_3, 90).unwrap();
    bus.write_holding(map::HR_RATE_GATE_1, 10).unwrap();
    bus.write_holding(map::HR_RATE_GATE_2, 20).unwrap();
    bus.write_holding(map::HR_RATE_GATE_3, 30).unwrap();
    bus.write_input(map::IR_WATER_LEVEL, water_level).unwrap();
    bus
}

#[test]
fn high_level_opens_gates_and_draws_down() {
    let bus = seeded_bus(85);
    let mut state = SimState::new(85.0);

    let outcome = run_cycle(&bus, &mut state).unwrap();

    // 85 opens gates 1 and 2, not 3.
    assert_eq!(outcome.commands.gate_1, GateCommand::Open);
    assert_eq!(outcome.commands.gate_2, GateCommand::Open);
    assert_eq!(outcome.commands.gate_3, GateCommand::Closed);

    // 10% + 20% of 85, both against the pre-update level.
    assert_eq!(outcome.released, 8.5 + 17.0);
    assert_eq!(outcome.water_level, 59.5);

    // Write-backs: truncated level, per-gate commands, any-open flag.
    assert_eq!(bus.read_input(map::IR_WATER_LEVEL).unwrap(), 59);
    assert!(bus
        .read_discrete(DiscreteBlock::Status, map::DI_GATE_1_COMMAND)
        .unwrap());
    assert!(bus
        .read_discrete(DiscreteBlock::Status, map::DI_GATE_2_COMMAND)
        .unwrap());
    assert!(!bus
        .read_discrete(DiscreteBlock::Status, map::DI_GATE_3_COMMAND)
        .unwrap());
    assert!(bus
        .read_discrete(DiscreteBlock::Flags, map::DI_ANY_GATE_OPEN)
        .unwrap());
    assert_eq!(state.history.len(), 1);
}

#[test]
fn gate_1_holds_open_through_the_dead_band() {
    let bus = seeded_bus(85);
    let mut state = SimState::new(85.0);

    run_cycle(&bus, &mut state).unwrap();
    assert_eq!(state.gate_1_memory, GateCommand::Open);

    // The register now reads 59 (truncated from 59.5): inside [30, 70],
    // so gate 1 holds open while gates 2 and 3 stay closed.
    let outcome = run_cycle(&bus, &mut state).unwrap();
    assert_eq!(outcome.commands.gate_1, GateCommand::Open);
    assert_eq!(outcome.commands.gate_2, GateCommand::Closed);
    let tol = Tolerances::default();
    assert!(nearly_equal(outcome.released, 5.9, tol));
    assert!(nearly_equal(outcome.water_level, 53.1, tol));
    assert!(nearly_equal(outcome.cumulative_released, 31.4, tol));
}

#[test]
fn cumulative_release_is_non_decreasing() {
    let bus = seeded_bus(95);
    let mut state = SimState::new(95.0);

    let mut previous = 0.0;
    for _ in 0..20 {
        let outcome = run_cycle(&bus, &mut state).unwrap();
        assert!(outcome.cumulative_released >= previous);
        previous = outcome.cumulative_released;
    }
}

#[test]
fn surge_refills_between_cycles() {
    let bus = seeded_bus(20);
    bus.write_input(map::IR_SURGE, 15).unwrap();
    let mut state = SimState::new(20.0);

    // All gates closed below every threshold; surge accumulates.
    let outcome = run_cycle(&bus, &mut state).unwrap();
    assert!(!outcome.commands.any_open());
    assert_eq!(outcome.water_level, 35.0);

    let outcome = run_cycle(&bus, &mut state).unwrap();
    assert_eq!(outcome.water_level, 50.0);
}

#[test]
fn config_changes_apply_on_the_next_cycle() {
    let bus = seeded_bus(60);
    let mut state = SimState::new(60.0);

    let outcome = run_cycle(&bus, &mut state).unwrap();
    assert!(!outcome.commands.any_open());

    // Drop threshold 2 below the current level; no reload step needed.
    bus.write_holding(map::HR_THRESHOLD_2, 40).unwrap();
    let outcome = run_cycle(&bus, &mut state).unwrap();
    assert_eq!(outcome.commands.gate_2, GateCommand::Open);
}

#[test]
fn override_coils_force_gate_positions() {
    let bus = seeded_bus(95);
    // Force every gate closed despite the high level.
    for addr in [
        map::CO_OVERRIDE_GATE_1,
        map::CO_OVERRIDE_GATE_2,
        map::CO_OVERRIDE_GATE_3,
    ] {
        bus.write_coil(addr, true).unwrap();
    }
    let mut state = SimState::new(95.0);

    let outcome = run_cycle(&bus, &mut state).unwrap();
    assert!(!outcome.commands.any_open());
    assert_eq!(outcome.released, 0.0);
    assert!(!bus
        .read_discrete(DiscreteBlock::Flags, map::DI_ANY_GATE_OPEN)
        .unwrap());
    // The forced position became the new hysteresis baseline.
    assert_eq!(state.gate_1_memory, GateCommand::Closed);
}

#[test]
fn register_fault_leaves_state_untouched() {
    // A store too small for the register map: the first read fails.
    let bus = MemoryBus::new(BusLayout {
        coils: 1,
        discrete: 1,
        holding: 1,
        input: 1,
    });
    let mut state = SimState::new(50.0);

    assert!(run_cycle(&bus, &mut state).is_err());
    assert_eq!(state.water_level, 50.0);
    assert_eq!(state.cumulative_released, 0.0);
    assert!(state.history.is_empty());
}

#[test]
fn identical_inputs_produce_identical_outcomes() {
    let run = || {
        let bus = seeded_bus(85);
        let mut state = SimState::new(85.0);
        run_cycle(&bus, &mut state).unwrap()
    };
    assert_eq!(run(), run());
}
