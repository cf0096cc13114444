//! Named trait vector with a checked non-empty, finite invariant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, LifeResult};

/// Mapping from trait name to value, ordered by name.
///
/// Always non-empty and every value finite. Construction is the only place
/// the invariant is checked, so projection over a `TraitVector` cannot fail.
///
/// # Example
///
/// ```
/// use life_engine::TraitVector;
///
/// let vector = TraitVector::from_pairs([("focus", 3.0), ("calm", 1.0)]).unwrap();
/// assert_eq!(vector.len(), 2);
/// assert!(TraitVector::from_pairs(Vec::<(&str, f64)>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct TraitVector {
    values: BTreeMap<String, f64>,
}

impl TraitVector {
    pub fn new(values: BTreeMap<String, f64>) -> LifeResult<Self> {
        if values.is_empty() {
            return Err(LifeError::EmptyTraitVector);
        }
        for (name, value) in &values {
            if name.is_empty() {
                return Err(LifeError::invalid_input(
                    "trait_name",
                    "\"\"",
                    "Trait names must not be empty",
                ));
            }
            if !value.is_finite() {
                return Err(LifeError::invalid_input(
                    name.as_str(),
                    value,
                    "Trait values must be finite",
                ));
            }
        }
        Ok(Self { values })
    }

    /// Build from `(name, value)` pairs. Later duplicates replace earlier ones.
    pub fn from_pairs<I, K>(pairs: I) -> LifeResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; present for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    /// True when every value is exactly zero.
    pub fn is_all_zero(&self) -> bool {
        self.values.values().all(|v| *v == 0.0)
    }

    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.values
    }
}

impl TryFrom<BTreeMap<String, f64>> for TraitVector {
    type Error = LifeError;

    fn try_from(values: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<TraitVector> for BTreeMap<String, f64> {
    fn from(vector: TraitVector) -> Self {
        vector.values
    }
}
