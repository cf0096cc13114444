//! Evolving trait state of one entity.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::UpdateConfig;
use crate::error::{LifeError, LifeResult};

use super::{EntityId, TraitVector};

/// Recurrence applied to a trait on each observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    /// Unbounded, directly modulated by engagement and environment.
    Linear,
    /// Logarithmic-in-time growth bounded by the saturation level.
    Saturating,
}

impl TraitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraitKind::Linear => "linear",
            TraitKind::Saturating => "saturating",
        }
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraitKind {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(TraitKind::Linear),
            "saturating" => Ok(TraitKind::Saturating),
            other => Err(LifeError::invalid_input(
                "kind",
                other,
                "Expected 'linear' or 'saturating'",
            )),
        }
    }
}

/// Current value of one trait plus its declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitValue {
    pub kind: TraitKind,
    pub value: f64,
}

impl TraitValue {
    pub fn linear(value: f64) -> Self {
        Self {
            kind: TraitKind::Linear,
            value,
        }
    }

    pub fn saturating(value: f64) -> Self {
        Self {
            kind: TraitKind::Saturating,
            value,
        }
    }
}

/// Trait values of one entity at one point in time.
///
/// Created at registration with baseline values, advanced only through
/// [`crate::TraitUpdater`], and dropped when the entity's processing ends.
///
/// # Example
///
/// ```
/// use life_engine::{TraitState, TraitValue};
///
/// let state = TraitState::new(
///     "participant-1",
///     [
///         ("engagement", TraitValue::linear(0.0)),
///         ("neuroplasticity", TraitValue::saturating(25.0)),
///     ],
/// )
/// .unwrap();
/// assert_eq!(state.value("neuroplasticity"), Some(25.0));
/// assert_eq!(state.cycles, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TraitStateRepr")]
pub struct TraitState {
    /// Owning entity.
    pub entity_id: EntityId,

    traits: BTreeMap<String, TraitValue>,

    /// Total elapsed time of applied observations.
    pub elapsed_time: f64,

    /// Number of observations applied.
    pub cycles: u64,
}

#[derive(Deserialize)]
struct TraitStateRepr {
    entity_id: EntityId,
    traits: BTreeMap<String, TraitValue>,
    #[serde(default)]
    elapsed_time: f64,
    #[serde(default)]
    cycles: u64,
}

impl TryFrom<TraitStateRepr> for TraitState {
    type Error = LifeError;

    fn try_from(repr: TraitStateRepr) -> Result<Self, Self::Error> {
        let mut state = TraitState::new(repr.entity_id, repr.traits)?;
        if !repr.elapsed_time.is_finite() || repr.elapsed_time < 0.0 {
            return Err(LifeError::invalid_input(
                "elapsed_time",
                repr.elapsed_time,
                "Must be finite and >= 0",
            ));
        }
        state.elapsed_time = repr.elapsed_time;
        state.cycles = repr.cycles;
        Ok(state)
    }
}

impl TraitState {
    /// Register an entity with baseline trait values.
    ///
    /// Fails on an empty trait set, an empty name or a non-finite baseline.
    /// Saturating baselines are range-checked against the update config by
    /// [`TraitState::validate_against`].
    pub fn new<I, K>(entity_id: impl Into<EntityId>, traits: I) -> LifeResult<Self>
    where
        I: IntoIterator<Item = (K, TraitValue)>,
        K: Into<String>,
    {
        let traits: BTreeMap<String, TraitValue> =
            traits.into_iter().map(|(k, v)| (k.into(), v)).collect();
        if traits.is_empty() {
            return Err(LifeError::EmptyTraitVector);
        }
        for (name, trait_value) in &traits {
            if name.is_empty() {
                return Err(LifeError::invalid_input(
                    "trait_name",
                    "\"\"",
                    "Trait names must not be empty",
                ));
            }
            if !trait_value.value.is_finite() {
                return Err(LifeError::invalid_input(
                    name.as_str(),
                    trait_value.value,
                    "Baseline must be finite",
                ));
            }
        }
        Ok(Self {
            entity_id: entity_id.into(),
            traits,
            elapsed_time: 0.0,
            cycles: 0,
        })
    }

    /// Register an entity with every trait at zero.
    pub fn zeroed<I, K>(entity_id: impl Into<EntityId>, kinds: I) -> LifeResult<Self>
    where
        I: IntoIterator<Item = (K, TraitKind)>,
        K: Into<String>,
    {
        Self::new(
            entity_id,
            kinds
                .into_iter()
                .map(|(name, kind)| (name, TraitValue { kind, value: 0.0 })),
        )
    }

    /// Check saturating traits lie within `[0, saturation_level]`.
    pub fn validate_against(&self, config: &UpdateConfig) -> LifeResult<()> {
        let ceiling = config.saturation_level;
        for (name, tv) in &self.traits {
            if tv.kind == TraitKind::Saturating && !(0.0..=ceiling).contains(&tv.value) {
                return Err(LifeError::invalid_input(
                    name.as_str(),
                    tv.value,
                    format!("Saturating trait must be in [0, {}]", ceiling),
                ));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.traits.get(name).map(|tv| tv.value)
    }

    #[inline]
    pub fn kind(&self, name: &str) -> Option<TraitKind> {
        self.traits.get(name).map(|tv| tv.kind)
    }

    pub fn get(&self, name: &str) -> Option<&TraitValue> {
        self.traits.get(name)
    }

    pub fn traits(&self) -> impl Iterator<Item = (&str, &TraitValue)> + '_ {
        self.traits.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// Always false once constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Snapshot of the current values for projection.
    pub fn vector(&self) -> LifeResult<TraitVector> {
        TraitVector::new(
            self.traits
                .iter()
                .map(|(k, tv)| (k.clone(), tv.value))
                .collect(),
        )
    }

    pub(crate) fn traits_mut(&mut self) -> impl Iterator<Item = (&str, &mut TraitValue)> + '_ {
        self.traits.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn advance(&mut self, elapsed_time: f64) {
        self.elapsed_time += elapsed_time;
        self.cycles = self.cycles.saturating_add(1);
    }
}
