//! BatchAggregator - runs the per-entity pipeline and reduces the results.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::{BatchMetric, EngineConfig};
use crate::error::{LifeError, LifeResult};
use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::state::TraitState;
use crate::updater::TraitUpdater;

use super::stats::{count_above, summarize};
use super::{
    BatchResult, EntityFailure, EntityInput, EntityOutcome, EntityReport, SignificanceCount,
};

/// Caller-supplied sink notified of each entity outcome, in input order.
///
/// Notifications happen after all entities are processed, so observers see
/// the same order in sequential and parallel mode.
pub trait BatchObserver {
    fn on_success(&mut self, _report: &EntityReport) {}

    fn on_failure(&mut self, _failure: &EntityFailure) {}
}

impl BatchObserver for () {}

/// Run a batch with a one-off aggregator.
///
/// Fails only when `config` is invalid; entity-level errors are recorded in
/// the returned [`BatchResult`].
///
/// # Example
///
/// ```
/// use life_engine::{process_batch, EngineConfig};
///
/// let result = process_batch(&[], &EngineConfig::default()).unwrap();
/// assert_eq!(result.count, 0);
/// assert!(result.mean().is_none());
/// ```
pub fn process_batch(entities: &[EntityInput], config: &EngineConfig) -> LifeResult<BatchResult> {
    Ok(BatchAggregator::try_new(config.clone())?.process_batch(entities))
}

/// Runs [`TraitUpdater`] and [`ProjectionEngine`] over independent entities
/// and aggregates the configured metric.
#[derive(Debug, Clone)]
pub struct BatchAggregator {
    updater: TraitUpdater,
    engine: ProjectionEngine,
    config: EngineConfig,
}

impl BatchAggregator {
    /// Create an aggregator, rejecting an invalid configuration.
    pub fn try_new(config: EngineConfig) -> LifeResult<Self> {
        config.validate().map_err(LifeError::InvalidConfiguration)?;
        Ok(Self {
            updater: TraitUpdater::try_new(config.update.clone())?,
            engine: ProjectionEngine::try_new(config.projection.clone())?,
            config,
        })
    }

    pub fn with_defaults() -> Self {
        Self {
            updater: TraitUpdater::default(),
            engine: ProjectionEngine::default(),
            config: EngineConfig::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn updater(&self) -> &TraitUpdater {
        &self.updater
    }

    #[inline]
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Process every entity and aggregate. Never fails.
    pub fn process_batch(&self, entities: &[EntityInput]) -> BatchResult {
        self.process_batch_with_observer(entities, &mut ())
    }

    /// Like [`process_batch`](Self::process_batch), reporting each outcome to
    /// `observer` in input order.
    pub fn process_batch_with_observer(
        &self,
        entities: &[EntityInput],
        observer: &mut dyn BatchObserver,
    ) -> BatchResult {
        let start = Instant::now();

        // collect() on an indexed parallel iterator preserves input order.
        let outcomes: Vec<EntityOutcome> = if self.config.batch.parallel {
            entities
                .par_iter()
                .enumerate()
                .map(|(index, input)| self.process_entity(index, input))
                .collect()
        } else {
            entities
                .iter()
                .enumerate()
                .map(|(index, input)| self.process_entity(index, input))
                .collect()
        };

        for outcome in &outcomes {
            match outcome {
                EntityOutcome::Succeeded(report) => observer.on_success(report),
                EntityOutcome::Failed(failure) => observer.on_failure(failure),
            }
        }

        let metrics: Vec<f64> = outcomes
            .iter()
            .filter_map(|o| match o {
                EntityOutcome::Succeeded(report) => Some(report.metric),
                EntityOutcome::Failed(_) => None,
            })
            .collect();

        let summary = summarize(&metrics);
        let significance = self
            .config
            .batch
            .significance_thresholds
            .iter()
            .map(|&threshold| SignificanceCount {
                threshold,
                count: count_above(&metrics, threshold),
            })
            .collect();

        let result = BatchResult {
            metric: self.config.batch.metric.clone(),
            total: entities.len(),
            count: metrics.len(),
            summary,
            significance,
            outcomes,
            duration_us: start.elapsed().as_micros() as u64,
        };

        info!(
            metric = %result.metric,
            total = result.total,
            succeeded = result.count,
            failed = result.failure_count(),
            mean = ?result.mean(),
            std_dev = ?result.std_dev(),
            duration_us = result.duration_us,
            "batch processed"
        );

        result
    }

    /// Run one entity, converting any error into a failure record.
    pub fn process_entity(&self, index: usize, input: &EntityInput) -> EntityOutcome {
        match self.run_entity(index, input) {
            Ok(report) => {
                debug!(
                    index,
                    entity = %report.entity_id,
                    metric = report.metric,
                    cycles = report.final_state.cycles,
                    "entity processed"
                );
                EntityOutcome::Succeeded(report)
            }
            Err(error) => {
                warn!(index, entity = %input.entity_id(), error = %error, "entity failed");
                EntityOutcome::Failed(EntityFailure::new(index, input.entity_id().clone(), error))
            }
        }
    }

    fn run_entity(&self, index: usize, input: &EntityInput) -> LifeResult<EntityReport> {
        input.initial.validate_against(self.updater.config())?;
        let final_state = self.updater.apply_all(&input.initial, &input.observations)?;
        let projection = self.engine.project(&final_state.vector()?)?;
        let metric = metric_value(
            &self.config.batch.metric,
            &input.initial,
            &final_state,
            &projection,
        )?;
        if !metric.is_finite() {
            return Err(LifeError::non_finite(
                "batch metric",
                format!("{} = {}", self.config.batch.metric, metric),
            ));
        }
        Ok(EntityReport {
            index,
            entity_id: input.entity_id().clone(),
            metric,
            final_state,
            projection,
        })
    }
}

impl Default for BatchAggregator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn metric_value(
    metric: &BatchMetric,
    initial: &TraitState,
    final_state: &TraitState,
    projection: &ProjectionResult,
) -> LifeResult<f64> {
    let trait_value = |state: &TraitState, name: &str| {
        state
            .value(name)
            .ok_or_else(|| LifeError::UnknownTrait(name.to_string()))
    };
    match metric {
        BatchMetric::ProjectionStrength => Ok(projection.projection_strength),
        BatchMetric::Coherence => Ok(projection.coherence),
        BatchMetric::TraitValue(name) => trait_value(final_state, name),
        BatchMetric::TraitGrowth(name) => {
            Ok(trait_value(final_state, name)? - trait_value(initial, name)?)
        }
    }
}
