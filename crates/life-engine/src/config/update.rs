//! Recurrence constants for linear and saturating trait updates.

use serde::{Deserialize, Serialize};

/// Constants applied uniformly to every trait update in a run.
///
/// - Linear traits: `delta = adaptation_rate * engagement * (1 + environment_weight * env)`
/// - Saturating traits: `growth = base_rate * (1 - v/S) * experience * ln(1 + dt)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Step size for linear traits. Must be finite and >= 0.
    pub adaptation_rate: f64,

    /// Scale of the environmental factor in linear updates. Any finite value.
    pub environment_weight: f64,

    /// Ceiling `S` for saturating traits. Must be finite and > 0.
    pub saturation_level: f64,

    /// Growth rate for saturating traits. Must be finite and > 0.
    pub base_rate: f64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            adaptation_rate: 0.1,
            environment_weight: 0.2,
            saturation_level: 100.0,
            base_rate: 0.05,
        }
    }
}

impl UpdateConfig {
    /// Faster adaptation for short sessions with few cycles.
    pub fn fast_adaptation() -> Self {
        Self {
            adaptation_rate: 0.3,
            base_rate: 0.15,
            ..Default::default()
        }
    }

    /// Slow, damped adaptation for long-running sessions.
    pub fn conservative() -> Self {
        Self {
            adaptation_rate: 0.05,
            environment_weight: 0.1,
            base_rate: 0.02,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.adaptation_rate.is_finite() || self.adaptation_rate < 0.0 {
            return Err(format!(
                "adaptation_rate must be finite and >= 0, got {}",
                self.adaptation_rate
            ));
        }
        if !self.environment_weight.is_finite() {
            return Err(format!(
                "environment_weight must be finite, got {}",
                self.environment_weight
            ));
        }
        if !self.saturation_level.is_finite() || self.saturation_level <= 0.0 {
            return Err(format!(
                "saturation_level must be finite and > 0, got {}",
                self.saturation_level
            ));
        }
        if !self.base_rate.is_finite() || self.base_rate <= 0.0 {
            return Err(format!(
                "base_rate must be finite and > 0, got {}",
                self.base_rate
            ));
        }
        Ok(())
    }
}
