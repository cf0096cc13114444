//! CLI command handlers
//!
//! # Modules
//!
//! - `simulate`: Generate a deterministic synthetic batch document
//! - `batch`: Run a batch document through the aggregator
//! - `project`: Project an ad-hoc trait vector
//! - `update`: Apply one direct trait update

pub mod batch;
pub mod project;
pub mod simulate;
pub mod update;

use clap::{Args, ValueEnum};
use tracing::error;

use life_engine::UpdateConfig;

use crate::error::{CliExitCode, CliResult};

/// Named starting points for the update constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    #[default]
    Default,
    FastAdaptation,
    Conservative,
}

impl Preset {
    pub fn config(self) -> UpdateConfig {
        match self {
            Preset::Default => UpdateConfig::default(),
            Preset::FastAdaptation => UpdateConfig::fast_adaptation(),
            Preset::Conservative => UpdateConfig::conservative(),
        }
    }
}

/// Overrides for individual update constants.
#[derive(Args, Debug, Clone, Default)]
pub struct UpdateOverrides {
    /// Step size for linear traits
    #[arg(long)]
    pub adaptation_rate: Option<f64>,

    /// Scale of the environmental factor in linear updates
    #[arg(long, allow_negative_numbers = true)]
    pub environment_weight: Option<f64>,

    /// Ceiling for saturating traits
    #[arg(long)]
    pub saturation_level: Option<f64>,

    /// Growth rate for saturating traits
    #[arg(long)]
    pub base_rate: Option<f64>,
}

impl UpdateOverrides {
    /// Overwrite the fields of `config` that were given on the command line.
    pub fn apply(&self, config: &mut UpdateConfig) {
        if let Some(v) = self.adaptation_rate {
            config.adaptation_rate = v;
        }
        if let Some(v) = self.environment_weight {
            config.environment_weight = v;
        }
        if let Some(v) = self.saturation_level {
            config.saturation_level = v;
        }
        if let Some(v) = self.base_rate {
            config.base_rate = v;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.adaptation_rate.is_none()
            && self.environment_weight.is_none()
            && self.saturation_level.is_none()
            && self.base_rate.is_none()
    }
}

/// Parse a `name=value` pair.
pub fn parse_named_value(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{}'", raw));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value in '{}': {}", raw, e))?;
    Ok((name.to_string(), value))
}

/// Log a command failure and convert it to a process exit code.
pub(crate) fn finish(command: &str, result: CliResult<()>) -> i32 {
    match result {
        Ok(()) => CliExitCode::Success.code(),
        Err(e) => {
            error!(command, error = %e, "command failed");
            eprintln!("Error: {}", e);
            e.exit_code().code()
        }
    }
}
