//! Run recording: manifest plus per-cycle JSON lines.
//!
//! Each run gets its own directory under the recording root:
//! `manifest.json` describes the run, `cycles.jsonl` holds one record
//! per completed cycle.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use df_sim::CycleOutcome;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: String,
    pub started_at: String,
    pub interval_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

/// One completed cycle, as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleRecord {
    pub cycle: u64,
    pub water_level: f64,
    pub gate_1: bool,
    pub gate_2: bool,
    pub gate_3: bool,
    pub released: f64,
    pub cumulative_released: f64,
}

pub struct RunRecorder {
    run_dir: PathBuf,
    cycles: File,
}

impl RunRecorder {
    /// Create a fresh run directory under `root` and write its
    /// manifest.
    pub fn create(root: &Path, interval: Duration, config_path: Option<&Path>) -> AppResult<Self> {
        let run_id = Uuid::new_v4().to_string();
        let run_dir = root.join(&run_id);
        fs::create_dir_all(&run_dir)?;

        let manifest = RunManifest {
            run_id,
            started_at: Utc::now().to_rfc3339(),
            interval_ms: interval.as_millis() as u64,
            config_path: config_path.map(|p| p.display().to_string()),
        };
        fs::write(
            run_dir.join("manifest.json"),
            serde_json::to_string_pretty(&manifest)?,
        )?;

        let cycles = OpenOptions::new()
            .create(true)
            .append(true)
            .open(run_dir.join("cycles.jsonl"))?;

        Ok(Self { run_dir, cycles })
    }

    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    /// Append one cycle record.
    pub fn record(&mut self, cycle: u64, outcome: &CycleOutcome) -> AppResult<()> {
        let record = CycleRecord {
            cycle,
            water_level: outcome.water_level,
            gate_1: outcome.commands.gate_1.bit(),
            gate_2: outcome.commands.gate_2.bit(),
            gate_3: outcome.commands.gate_3.bit(),
            released: outcome.released,
            cumulative_released: outcome.cumulative_released,
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');
        self.cycles.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// Load the manifest of a recorded run.
pub fn load_manifest(run_dir: &Path) -> AppResult<RunManifest> {
    let content = fs::read_to_string(run_dir.join("manifest.json"))?;
    Ok(serde_json::from_str(&content)?)
}

/// Load every cycle record of a recorded run.
pub fn load_cycles(run_dir: &Path) -> AppResult<Vec<CycleRecord>> {
    let content = fs::read_to_string(run_dir.join("cycles.jsonl"))?;
    let mut records = Vec::new();
    for line in content.lines() {
        if !line.trim().is_empty() {
            records.push(serde_json::from_str(line)?);
        }
    }
    Ok(records)
}
