//! ProjectionEngine - weighted normalization of trait vectors.

use std::collections::BTreeMap;

use crate::config::ProjectionConfig;
use crate::error::{LifeError, LifeResult};
use crate::state::TraitVector;

use super::ProjectionResult;

/// Project `(name, value)` pairs with uniform weights.
///
/// # Errors
///
/// [`LifeError::EmptyTraitVector`] for an empty input, or
/// [`LifeError::InvalidInput`] for a non-finite value.
///
/// # Example
///
/// ```
/// use life_engine::project;
///
/// let result = project([("a", 1.0), ("b", 1.0)]).unwrap();
/// assert!((result.coherence - 0.5).abs() < 1e-12);
///
/// let zero = project([("a", 0.0), ("b", 0.0)]).unwrap();
/// assert!(zero.degenerate);
/// assert_eq!(zero.coherence, 0.0);
/// ```
pub fn project<I, K>(traits: I) -> LifeResult<ProjectionResult>
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    let vector = TraitVector::from_pairs(traits)?;
    ProjectionEngine::default().project(&vector)
}

/// Normalizes trait vectors into weight distributions, optionally scaling
/// each trait by a configured importance weight first.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn try_new(config: ProjectionConfig) -> LifeResult<Self> {
        config.validate().map_err(LifeError::InvalidConfiguration)?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project a trait vector.
    ///
    /// Magnitudes are divided by the largest magnitude before summing, so the
    /// total cannot overflow for large finite inputs.
    pub fn project(&self, vector: &TraitVector) -> LifeResult<ProjectionResult> {
        let magnitudes: Vec<(&str, f64)> = vector
            .iter()
            .map(|(name, value)| (name, value.abs() * self.config.weight_for(name)))
            .collect();

        let peak = magnitudes.iter().fold(0.0_f64, |acc, (_, m)| acc.max(*m));
        if peak == 0.0 {
            return Ok(ProjectionResult::degenerate(vector.names()));
        }
        if !peak.is_finite() {
            return Err(LifeError::non_finite(
                "project",
                "weighted trait magnitude overflowed",
            ));
        }

        let total: f64 = magnitudes.iter().map(|(_, m)| m / peak).sum();
        let normalized: BTreeMap<String, f64> = magnitudes
            .iter()
            .map(|(name, m)| (name.to_string(), (m / peak) / total))
            .collect();

        let coherence: f64 = normalized.values().map(|w| w * w).sum();
        // Rounding can push a single-trait coherence a hair above 1.
        let coherence = coherence.min(1.0);

        Ok(ProjectionResult {
            normalized,
            coherence,
            projection_strength: coherence.sqrt(),
            degenerate: false,
        })
    }
}
