//! Per-entity batch input.

use serde::{Deserialize, Serialize};

use crate::state::{EntityId, StimulusObservation, TraitState};

/// Initial state of one entity plus the observations to apply in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityInput {
    pub initial: TraitState,

    #[serde(default)]
    pub observations: Vec<StimulusObservation>,
}

impl EntityInput {
    pub fn new(initial: TraitState, observations: Vec<StimulusObservation>) -> Self {
        Self {
            initial,
            observations,
        }
    }

    #[inline]
    pub fn entity_id(&self) -> &EntityId {
        &self.initial.entity_id
    }
}
