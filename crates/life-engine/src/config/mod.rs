//! Engine configuration types.
//!
//! Every section carries sensible defaults and a `validate()` method that
//! returns a human-readable reason on failure. Fallible constructors such as
//! [`crate::TraitUpdater::try_new`] and [`crate::BatchAggregator::try_new`]
//! convert that reason into [`crate::LifeError::InvalidConfiguration`].

mod batch;
mod projection;
mod update;


pub use self::batch::{BatchConfig, BatchMetric};
pub use self::projection::ProjectionConfig;
pub use self::update::UpdateConfig;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, LifeResult};

/// Top-level configuration shared read-only by every entity in a batch.
///
/// # Example
///
/// ```
/// use life_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.update.saturation_level, 100.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Recurrence constants for trait updates.
    #[serde(default)]
    pub update: UpdateConfig,

    /// Per-trait projection weights.
    #[serde(default)]
    pub projection: ProjectionConfig,

    /// Metric and significance settings for batch aggregation.
    #[serde(default)]
    pub batch: BatchConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every section, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        self.update.validate()?;
        self.projection.validate()?;
        self.batch.validate()?;
        Ok(())
    }

    /// Validate and convert failures into [`LifeError::InvalidConfiguration`].
    pub fn checked(self) -> LifeResult<Self> {
        self.validate().map_err(LifeError::InvalidConfiguration)?;
        Ok(self)
    }
}
