//! Engine error types.
//!
//! Configuration problems are reported when a config is validated or an
//! updater/aggregator is constructed. Input problems are reported per call
//! and are the only errors the batch aggregator converts into failure
//! records. A degenerate (all-zero) projection is a flagged result, not an
//! error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while updating, projecting or aggregating traits.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeError {
    /// Structurally invalid configuration constants
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invalid per-call argument
    #[error("Invalid input '{field}': {value}. {reason}")]
    InvalidInput {
        /// Argument or field name
        field: String,
        /// Offending value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Observation carried a negative elapsed time
    #[error("Elapsed time must be >= 0, got {0}")]
    NegativeElapsedTime(f64),

    /// Projection requested for a trait vector with no entries
    #[error("Trait vector must contain at least one trait")]
    EmptyTraitVector,

    /// Observation addressed to a different entity than the state it was applied to
    #[error("Unknown entity: observation for '{actual}' applied to state of '{expected}'")]
    UnknownEntity {
        /// Entity owning the trait state
        expected: String,
        /// Entity named by the observation
        actual: String,
    },

    /// Trait name not present in a trait state
    #[error("Unknown trait: {0}")]
    UnknownTrait(String),

    /// Computation produced NaN or Infinity
    #[error("Non-finite result in {operation}: {details}")]
    NonFiniteResult {
        /// The operation that produced the value
        operation: String,
        /// Details about the inputs
        details: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for engine operations.
pub type LifeResult<T> = Result<T, LifeError>;

/// Coarse classification of a [`LifeError`], recorded on batch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeErrorKind {
    Configuration,
    Input,
    Computation,
    Serialization,
}

impl From<serde_json::Error> for LifeError {
    fn from(err: serde_json::Error) -> Self {
        LifeError::Serialization(err.to_string())
    }
}

impl LifeError {
    /// Create an invalid input error.
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        LifeError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a non-finite result error.
    pub fn non_finite(operation: impl Into<String>, details: impl Into<String>) -> Self {
        LifeError::NonFiniteResult {
            operation: operation.into(),
            details: details.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> LifeErrorKind {
        match self {
            LifeError::InvalidConfiguration(_) => LifeErrorKind::Configuration,
            LifeError::InvalidInput { .. }
            | LifeError::NegativeElapsedTime(_)
            | LifeError::EmptyTraitVector
            | LifeError::UnknownEntity { .. }
            | LifeError::UnknownTrait(_) => LifeErrorKind::Input,
            LifeError::NonFiniteResult { .. } => LifeErrorKind::Computation,
            LifeError::Serialization(_) => LifeErrorKind::Serialization,
        }
    }

    /// Check if this error is a configuration error (fatal to batch setup).
    pub fn is_configuration_error(&self) -> bool {
        self.kind() == LifeErrorKind::Configuration
    }

    /// Check if this error is a per-call input error (isolated within a batch).
    pub fn is_input_error(&self) -> bool {
        self.kind() == LifeErrorKind::Input
    }
}
