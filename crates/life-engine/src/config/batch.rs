//! Batch aggregation settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scalar recorded per entity and reduced across the batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchMetric {
    /// `sqrt(coherence)` of the final projection.
    #[default]
    ProjectionStrength,
    /// Coherence of the final projection.
    Coherence,
    /// Final value of the named trait.
    TraitValue(String),
    /// Final minus initial value of the named trait.
    TraitGrowth(String),
}

impl fmt::Display for BatchMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchMetric::ProjectionStrength => write!(f, "projection_strength"),
            BatchMetric::Coherence => write!(f, "coherence"),
            BatchMetric::TraitValue(name) => write!(f, "trait:{}", name),
            BatchMetric::TraitGrowth(name) => write!(f, "growth:{}", name),
        }
    }
}

impl FromStr for BatchMetric {
    type Err = String;

    /// Parses `projection_strength`, `coherence`, `trait:<name>` or `growth:<name>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "projection_strength" | "strength" => return Ok(BatchMetric::ProjectionStrength),
            "coherence" => return Ok(BatchMetric::Coherence),
            _ => {}
        }
        let named = |prefix: &str| {
            s.strip_prefix(prefix)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        };
        if let Some(name) = named("trait:") {
            return Ok(BatchMetric::TraitValue(name));
        }
        if let Some(name) = named("growth:") {
            return Ok(BatchMetric::TraitGrowth(name));
        }
        Err(format!(
            "unknown metric '{}': expected projection_strength, coherence, trait:<name> or growth:<name>",
            s
        ))
    }
}

/// Batch aggregation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Metric recorded for each successful entity.
    pub metric: BatchMetric,

    /// Entities whose metric is strictly above a threshold are counted as
    /// significant for that threshold. Each must be finite.
    pub significance_thresholds: Vec<f64>,

    /// Process entities on the rayon thread pool. Output order is unchanged.
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            metric: BatchMetric::default(),
            significance_thresholds: vec![0.7],
            parallel: false,
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), String> {
        match &self.metric {
            BatchMetric::TraitValue(name) | BatchMetric::TraitGrowth(name) if name.is_empty() => {
                return Err("metric trait name must not be empty".to_string());
            }
            _ => {}
        }
        if let Some(bad) = self.significance_thresholds.iter().find(|t| !t.is_finite()) {
            return Err(format!("significance thresholds must be finite, got {}", bad));
        }
        Ok(())
    }
}
