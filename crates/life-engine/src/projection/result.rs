//! Immutable projection output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Output of projecting a trait vector.
///
/// When `degenerate` is set the input was all-zero: every weight is 0 and
/// `coherence` / `projection_strength` are 0. Otherwise the weights sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Normalized weight per trait.
    pub normalized: BTreeMap<String, f64>,

    /// Sum of squared weights, in `[1/n, 1]` unless degenerate.
    pub coherence: f64,

    /// `sqrt(coherence)`.
    pub projection_strength: f64,

    /// All-zero input; a valid but trivial result.
    pub degenerate: bool,
}

impl ProjectionResult {
    pub(crate) fn degenerate<'a>(names: impl Iterator<Item = &'a str>) -> Self {
        Self {
            normalized: names.map(|name| (name.to_string(), 0.0)).collect(),
            coherence: 0.0,
            projection_strength: 0.0,
            degenerate: true,
        }
    }

    #[inline]
    pub fn trait_count(&self) -> usize {
        self.normalized.len()
    }

    #[inline]
    pub fn weight(&self, name: &str) -> Option<f64> {
        self.normalized.get(name).copied()
    }

    /// Sum of the normalized weights (1 or 0).
    pub fn weight_sum(&self) -> f64 {
        self.normalized.values().sum()
    }

    /// Trait with the largest weight. Ties go to the first name in order.
    pub fn dominant_trait(&self) -> Option<(&str, f64)> {
        if self.degenerate {
            return None;
        }
        self.normalized
            .iter()
            .fold(None, |best: Option<(&str, f64)>, (name, weight)| match best {
                Some((_, w)) if w >= *weight => best,
                _ => Some((name.as_str(), *weight)),
            })
    }

    /// Participation ratio `1 / coherence`: how many traits effectively
    /// share the weight.
    pub fn effective_trait_count(&self) -> Option<f64> {
        if self.degenerate || self.coherence <= 0.0 {
            None
        } else {
            Some(1.0 / self.coherence)
        }
    }
}
