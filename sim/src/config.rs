use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use submarine::{catalog, ConstantsParams, ControlInputs};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_hz: u32,
    pub start_vehicle: String,
    /// Emit a telemetry line every this many ticks (0 disables).
    pub log_every: u32,
    pub custom_vehicles: Vec<CustomVehicle>,
    pub schedule: Vec<Segment>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            start_vehicle: catalog::OHIO.to_string(),
            log_every: 60,
            custom_vehicles: Vec::new(),
            schedule: vec![Segment { ticks: 600, ..Default::default() }],
        }
    }
}

/// Extra vehicle class defined in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomVehicle {
    pub class: String,
    pub constants: ConstantsParams,
}

/// A stretch of ticks with fixed control inputs, optionally switching the
/// active vehicle first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    pub vehicle: Option<String>,
    pub ticks: u32,
    pub throttle: f32,
    pub stern: f32,
    pub rudder: f32,
    pub fairwater: f32,
    pub ballast: f32,
    pub trim: f32,
}

impl Segment {
    pub fn inputs(&self) -> ControlInputs {
        ControlInputs {
            throttle: self.throttle,
            stern: self.stern,
            rudder: self.rudder,
            fairwater: self.fairwater,
            ballast: self.ballast,
            trim: self.trim,
        }
    }
}

/// Load the run configuration. A missing file falls back to defaults; an
/// unreadable or malformed one is an error.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(text)?;
    anyhow::ensure!(cfg.tick_hz > 0, "tick_hz must be positive");
    Ok(cfg)
}
