//! Batch output types.

use serde::{Deserialize, Serialize};

use crate::config::BatchMetric;
use crate::error::{LifeError, LifeErrorKind};
use crate::projection::ProjectionResult;
use crate::state::{EntityId, TraitState};

/// Descriptive statistics over successful entities' metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// `std_dev / sqrt(count)`.
    pub std_error: f64,
    pub min: f64,
    pub max: f64,
}

/// Number of successful entities whose metric is strictly above `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceCount {
    pub threshold: f64,
    pub count: usize,
}

/// Successful entity run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityReport {
    /// Position in the input sequence.
    pub index: usize,
    pub entity_id: EntityId,
    /// Value of the batch metric for this entity.
    pub metric: f64,
    pub final_state: TraitState,
    pub projection: ProjectionResult,
}

/// Entity whose run was aborted by an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityFailure {
    /// Position in the input sequence.
    pub index: usize,
    pub entity_id: EntityId,
    pub kind: LifeErrorKind,
    pub message: String,
    pub error: LifeError,
}

impl EntityFailure {
    pub fn new(index: usize, entity_id: EntityId, error: LifeError) -> Self {
        Self {
            index,
            entity_id,
            kind: error.kind(),
            message: error.to_string(),
            error,
        }
    }
}

/// Per-entity outcome, kept in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntityOutcome {
    Succeeded(EntityReport),
    Failed(EntityFailure),
}

impl EntityOutcome {
    pub fn index(&self) -> usize {
        match self {
            EntityOutcome::Succeeded(report) => report.index,
            EntityOutcome::Failed(failure) => failure.index,
        }
    }

    pub fn entity_id(&self) -> &EntityId {
        match self {
            EntityOutcome::Succeeded(report) => &report.entity_id,
            EntityOutcome::Failed(failure) => &failure.entity_id,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, EntityOutcome::Succeeded(_))
    }
}

/// Aggregate result of one batch run.
///
/// `summary` is `None` when no entity succeeded, so "no data" is never
/// confused with a zero effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Metric recorded per entity.
    pub metric: BatchMetric,
    /// Entities submitted.
    pub total: usize,
    /// Entities processed successfully.
    pub count: usize,
    pub summary: Option<MetricSummary>,
    pub significance: Vec<SignificanceCount>,
    pub outcomes: Vec<EntityOutcome>,
    /// Wall-clock time of the run in microseconds.
    pub duration_us: u64,
}

impl BatchResult {
    /// Mean metric over successes, or `None` when undefined.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        self.summary.map(|s| s.mean)
    }

    /// Population standard deviation over successes, or `None` when undefined.
    #[inline]
    pub fn std_dev(&self) -> Option<f64> {
        self.summary.map(|s| s.std_dev)
    }

    pub fn successes(&self) -> impl Iterator<Item = &EntityReport> + '_ {
        self.outcomes.iter().filter_map(|o| match o {
            EntityOutcome::Succeeded(report) => Some(report),
            EntityOutcome::Failed(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntityFailure> + '_ {
        self.outcomes.iter().filter_map(|o| match o {
            EntityOutcome::Failed(failure) => Some(failure),
            EntityOutcome::Succeeded(_) => None,
        })
    }

    #[inline]
    pub fn failure_count(&self) -> usize {
        self.total - self.count
    }

    /// Significance count for an exact configured threshold.
    pub fn significant_count(&self, threshold: f64) -> Option<usize> {
        self.significance
            .iter()
            .find(|s| s.threshold == threshold)
            .map(|s| s.count)
    }

    /// Fraction of submitted entities that succeeded, `None` for an empty batch.
    pub fn success_rate(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.count as f64 / self.total as f64)
        }
    }
}
