//! Per-trait importance weights applied before normalization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Projection settings.
///
/// Each trait magnitude is multiplied by its weight (or `default_weight`
/// when the trait is not listed) before normalization. The default
/// configuration weights every trait equally, which reduces to the plain
/// `|v| / Σ|v|` projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Explicit weights by trait name. Each must be finite and >= 0.
    pub weights: BTreeMap<String, f64>,

    /// Weight for traits absent from `weights`. Must be finite and >= 0.
    pub default_weight: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            weights: BTreeMap::new(),
            default_weight: 1.0,
        }
    }
}

impl ProjectionConfig {
    /// Weight applied to `name`.
    #[inline]
    pub fn weight_for(&self, name: &str) -> f64 {
        self.weights.get(name).copied().unwrap_or(self.default_weight)
    }

    /// True when every trait is weighted equally.
    pub fn is_uniform(&self) -> bool {
        self.weights.values().all(|w| *w == self.default_weight)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.default_weight.is_finite() || self.default_weight < 0.0 {
            return Err(format!(
                "default_weight must be finite and >= 0, got {}",
                self.default_weight
            ));
        }
        for (name, weight) in &self.weights {
            if name.is_empty() {
                return Err("projection weight names must not be empty".to_string());
            }
            if !weight.is_finite() || *weight < 0.0 {
                return Err(format!(
                    "weight for '{}' must be finite and >= 0, got {}",
                    name, weight
                ));
            }
        }
        Ok(())
    }
}
