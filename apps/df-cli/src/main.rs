use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use df_app::{AppResult, ControlLoop, LoopOptions, RunRecorder};
use df_project::{build_bus, load_config};
use df_registers::{RegisterBus, map};
use df_sim::{History, SimState};
use tracing::info;

#[derive(Parser)]
#[command(name = "df-cli")]
#[command(about = "Damflow CLI - three-gate dam control simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate device configuration syntax and structure
    Validate {
        /// Path to the device configuration YAML file
        config_path: PathBuf,
    },
    /// Seed the register store and run the control loop
    Run {
        /// Path to the device configuration YAML file
        config_path: PathBuf,
        /// Cycle interval in milliseconds
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
        /// Number of cycles to run (default: run until stopped)
        #[arg(long)]
        cycles: Option<u64>,
        /// Keep only the newest N history samples
        #[arg(long)]
        history_limit: Option<usize>,
        /// Record cycle results under this directory
        #[arg(long)]
        record: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Run {
            config_path,
            interval_ms,
            cycles,
            history_limit,
            record,
        } => cmd_run(
            &config_path,
            interval_ms,
            cycles,
            history_limit,
            record.as_deref(),
        ),
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    let config = load_config(config_path)?;
    // Seeding exercises the address checks as well.
    build_bus(&config)?;
    println!(
        "OK: {} ({} holding registers, {} coils seeded)",
        config_path.display(),
        config.device.holding_registers.len(),
        config.device.coils.len()
    );
    Ok(())
}

fn cmd_run(
    config_path: &Path,
    interval_ms: u64,
    cycles: Option<u64>,
    history_limit: Option<usize>,
    record: Option<&Path>,
) -> AppResult<()> {
    let config = load_config(config_path)?;
    let bus: Arc<dyn RegisterBus> = Arc::new(build_bus(&config)?);

    let level = map::read_water_level(bus.as_ref())?;
    let history = match history_limit {
        Some(limit) => History::bounded(limit)?,
        None => History::unbounded(),
    };
    let state = SimState::with_history(level, history);

    let interval = Duration::from_millis(interval_ms);
    let options = LoopOptions {
        interval,
        max_cycles: cycles,
    };

    let mut control = ControlLoop::new(bus, state, options);
    if let Some(root) = record {
        let recorder = RunRecorder::create(root, interval, Some(config_path))?;
        info!(run_dir = %recorder.run_dir().display(), "recording run");
        control = control.with_recorder(recorder);
    }

    info!(
        config = %config_path.display(),
        interval_ms,
        water_level = level,
        "control loop starting"
    );
    control.run();

    let state = control.state();
    println!(
        "Finished: level {:.1}, cumulative released {:.1} over {} cycles",
        state.water_level,
        state.cumulative_released,
        state.history.len()
    );
    Ok(())
}
