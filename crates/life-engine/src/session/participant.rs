//! ParticipantSession - per-cycle updates with a bounded projection history.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::LifeResult;
use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::state::{StimulusObservation, TraitState};
use crate::updater::TraitUpdater;

/// One participant's live processing session.
///
/// Each [`ingest`](Self::ingest) applies a single observation, projects the
/// new state and appends the projection to a sliding window; the oldest
/// projection is dropped once the window is full.
///
/// # Example
///
/// ```
/// use life_engine::{
///     ParticipantSession, ProjectionEngine, StimulusObservation, TraitState, TraitUpdater,
///     TraitValue,
/// };
///
/// let state = TraitState::new("p1", [("focus", TraitValue::saturating(10.0))]).unwrap();
/// let mut session = ParticipantSession::new(state, 8);
///
/// let updater = TraitUpdater::with_defaults();
/// let engine = ProjectionEngine::default();
/// let projection = session
///     .ingest(&updater, &engine, &StimulusObservation::new("p1", 0.9, 0.0, 1.0))
///     .unwrap();
/// assert_eq!(projection.coherence, 1.0);
/// assert_eq!(session.cycle_count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantSession {
    /// Unique session identifier.
    pub session_id: Uuid,

    state: TraitState,

    history: VecDeque<ProjectionResult>,

    /// Maximum number of projections retained.
    pub max_history: usize,

    /// Session start time.
    pub started_at: DateTime<Utc>,

    /// Last successful ingest.
    pub last_activity: DateTime<Utc>,
}

impl ParticipantSession {
    /// Start a session from a registered state. A `max_history` of 0 is
    /// treated as 1 so the latest projection is always available.
    pub fn new(state: TraitState, max_history: usize) -> Self {
        let max_history = max_history.max(1);
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4(),
            state,
            history: VecDeque::with_capacity(max_history),
            max_history,
            started_at: now,
            last_activity: now,
        }
    }

    /// Apply one observation and project the resulting state.
    ///
    /// On error the session is unchanged.
    pub fn ingest(
        &mut self,
        updater: &TraitUpdater,
        engine: &ProjectionEngine,
        observation: &StimulusObservation,
    ) -> LifeResult<ProjectionResult> {
        let next = updater.apply_observation(&self.state, observation)?;
        let projection = engine.project(&next.vector()?)?;

        self.state = next;
        if self.history.len() >= self.max_history {
            self.history.pop_front();
        }
        self.history.push_back(projection.clone());
        self.last_activity = Utc::now();

        debug!(
            session = %self.session_id,
            entity = %self.state.entity_id,
            cycle = self.state.cycles,
            strength = projection.projection_strength,
            "session cycle ingested"
        );
        Ok(projection)
    }

    #[inline]
    pub fn state(&self) -> &TraitState {
        &self.state
    }

    /// Retained projections, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ProjectionResult> + '_ {
        self.history.iter()
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn latest(&self) -> Option<&ProjectionResult> {
        self.history.back()
    }

    #[inline]
    pub fn cycle_count(&self) -> u64 {
        self.state.cycles
    }

    /// Mean projection strength over the retained window.
    pub fn mean_strength(&self) -> Option<f64> {
        if self.history.is_empty() {
            return None;
        }
        let sum: f64 = self.history.iter().map(|p| p.projection_strength).sum();
        Some(sum / self.history.len() as f64)
    }

    /// Check if no observation has been ingested for longer than `max_age_seconds`.
    pub fn is_stale(&self, max_age_seconds: i64) -> bool {
        (Utc::now() - self.last_activity).num_seconds() > max_age_seconds
    }

    pub fn age_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    /// End the session, returning the final trait state.
    pub fn finish(self) -> TraitState {
        debug!(
            session = %self.session_id,
            cycles = self.state.cycles,
            "session finished"
        );
        self.state
    }
}
