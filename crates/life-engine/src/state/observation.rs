//! One input sample driving a trait update.

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, LifeResult};

use super::EntityId;

/// Stimulus sample produced by an external feed and consumed immediately.
///
/// `engagement` is expected in `[0, 1]` but not clamped; negative values act
/// as inhibitory stimulus on linear traits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StimulusObservation {
    /// Entity whose state this sample drives.
    pub entity_id: EntityId,

    /// Engagement scalar, nominally `[0, 1]`.
    pub engagement: f64,

    /// Environmental modulation, any sign.
    #[serde(default)]
    pub environmental_factor: f64,

    /// Time since the previous observation. Must be >= 0.
    pub elapsed_time: f64,
}

impl StimulusObservation {
    pub fn new(
        entity_id: impl Into<EntityId>,
        engagement: f64,
        environmental_factor: f64,
        elapsed_time: f64,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            engagement,
            environmental_factor,
            elapsed_time,
        }
    }

    /// Reject negative elapsed time and non-finite fields.
    pub fn validate(&self) -> LifeResult<()> {
        if !self.engagement.is_finite() {
            return Err(LifeError::invalid_input(
                "engagement",
                self.engagement,
                "Must be finite",
            ));
        }
        if !self.environmental_factor.is_finite() {
            return Err(LifeError::invalid_input(
                "environmental_factor",
                self.environmental_factor,
                "Must be finite",
            ));
        }
        if !self.elapsed_time.is_finite() {
            return Err(LifeError::invalid_input(
                "elapsed_time",
                self.elapsed_time,
                "Must be finite",
            ));
        }
        if self.elapsed_time < 0.0 {
            return Err(LifeError::NegativeElapsedTime(self.elapsed_time));
        }
        Ok(())
    }

    /// Stimulus magnitude fed to saturating traits.
    ///
    /// Inhibitory (negative) engagement contributes no saturating growth.
    #[inline]
    pub fn experience(&self) -> f64 {
        self.engagement.max(0.0)
    }
}
