//! TraitUpdater - applies observations to trait states.

use tracing::trace;

use crate::config::UpdateConfig;
use crate::error::{LifeError, LifeResult};
use crate::state::{StimulusObservation, TraitKind, TraitState};

use super::{update_linear_trait, update_saturating_trait};

/// Applies stimulus observations to trait states using a validated
/// [`UpdateConfig`].
///
/// Updates are atomic: the returned state carries every trait's new value,
/// and on error the caller's state is untouched.
///
/// # Example
///
/// ```
/// use life_engine::{StimulusObservation, TraitState, TraitUpdater, TraitValue};
///
/// let updater = TraitUpdater::with_defaults();
/// let state = TraitState::new(
///     "p1",
///     [("engagement", TraitValue::linear(0.0)), ("plasticity", TraitValue::saturating(50.0))],
/// )
/// .unwrap();
///
/// let next = updater
///     .apply_observation(&state, &StimulusObservation::new("p1", 0.8, 0.0, 1.0))
///     .unwrap();
/// assert!(next.value("engagement").unwrap() > 0.0);
/// assert!(next.value("plasticity").unwrap() > 50.0);
/// assert_eq!(next.cycles, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraitUpdater {
    config: UpdateConfig,
}

impl TraitUpdater {
    /// Create an updater, rejecting structurally invalid constants.
    pub fn try_new(config: UpdateConfig) -> LifeResult<Self> {
        config.validate().map_err(LifeError::InvalidConfiguration)?;
        Ok(Self { config })
    }

    /// Create with the default constants.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    #[inline]
    pub fn config(&self) -> &UpdateConfig {
        &self.config
    }

    /// Apply one observation to every trait according to its declared kind.
    pub fn apply_observation(
        &self,
        state: &TraitState,
        observation: &StimulusObservation,
    ) -> LifeResult<TraitState> {
        step(&self.config, state, observation, None)
    }

    /// Apply observations in order, stopping at the first error.
    pub fn apply_all<'a, I>(&self, state: &TraitState, observations: I) -> LifeResult<TraitState>
    where
        I: IntoIterator<Item = &'a StimulusObservation>,
    {
        let mut current = state.clone();
        for observation in observations {
            current = self.apply_observation(&current, observation)?;
        }
        Ok(current)
    }

    /// Compute the next value of a single trait without touching any state.
    pub fn next_value(
        &self,
        kind: TraitKind,
        current_value: f64,
        observation: &StimulusObservation,
    ) -> LifeResult<f64> {
        observation.validate()?;
        next_value(&self.config, kind, current_value, observation)
    }
}

/// Apply `observation` to every trait of `kind` in `state`, carrying other
/// traits over unchanged.
///
/// The config is validated on every call; use [`TraitUpdater`] to validate
/// once up front.
pub fn update_trait(
    kind: TraitKind,
    state: &TraitState,
    observation: &StimulusObservation,
    config: &UpdateConfig,
) -> LifeResult<TraitState> {
    config.validate().map_err(LifeError::InvalidConfiguration)?;
    step(config, state, observation, Some(kind))
}

fn step(
    config: &UpdateConfig,
    state: &TraitState,
    observation: &StimulusObservation,
    only: Option<TraitKind>,
) -> LifeResult<TraitState> {
    if observation.entity_id != state.entity_id {
        return Err(LifeError::UnknownEntity {
            expected: state.entity_id.to_string(),
            actual: observation.entity_id.to_string(),
        });
    }
    observation.validate()?;
    state.validate_against(config)?;

    let mut next = state.clone();
    for (name, trait_value) in next.traits_mut() {
        if only.is_some_and(|kind| kind != trait_value.kind) {
            continue;
        }
        let updated = next_value(config, trait_value.kind, trait_value.value, observation)
            .map_err(|err| match err {
                LifeError::NonFiniteResult { operation, details } => LifeError::NonFiniteResult {
                    operation,
                    details: format!("trait '{}': {}", name, details),
                },
                other => other,
            })?;
        trace!(
            entity = %state.entity_id,
            trait_name = name,
            kind = %trait_value.kind,
            from = trait_value.value,
            to = updated,
            "trait updated"
        );
        trait_value.value = updated;
    }
    next.advance(observation.elapsed_time);
    Ok(next)
}

fn next_value(
    config: &UpdateConfig,
    kind: TraitKind,
    current_value: f64,
    observation: &StimulusObservation,
) -> LifeResult<f64> {
    match kind {
        TraitKind::Linear => {
            let updated = update_linear_trait(
                current_value,
                observation.engagement,
                observation.environmental_factor,
                config.adaptation_rate,
                config.environment_weight,
            );
            if !updated.is_finite() {
                return Err(LifeError::non_finite(
                    "update_linear_trait",
                    format!(
                        "current={}, engagement={}, environmental_factor={}",
                        current_value, observation.engagement, observation.environmental_factor
                    ),
                ));
            }
            Ok(updated)
        }
        TraitKind::Saturating => update_saturating_trait(
            current_value,
            config.saturation_level,
            observation.experience(),
            observation.elapsed_time,
            config.base_rate,
        ),
    }
}
