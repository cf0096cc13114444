//! L.I.F.E. adaptive trait engine.
//!
//! Evolves named scalar traits from a stream of engagement observations,
//! projects trait vectors into normalized weights with a coherence score,
//! and aggregates per-entity scores across batches.
//!
//! # Modules
//!
//! - [`config`]: Update, projection and batch settings with validation
//! - [`error`]: Error types and result aliases
//! - [`state`]: Entity ids, trait vectors, trait state, observations
//! - [`updater`]: Linear and saturating trait recurrences
//! - [`projection`]: Normalized weights, coherence and projection strength
//! - [`batch`]: Isolate-and-continue batch processing with statistics
//! - [`session`]: Per-cycle streaming sessions for a single participant
//!
//! # Recurrences
//!
//! - Linear: `v' = v + rate · e · (1 + w · env)`
//! - Saturating: `v' = min(S, v + k · (1 - v/S) · x · ln(1 + dt))`
//! - Projection: `wᵢ = |vᵢ| / Σ|vⱼ|`, `coherence = Σ wᵢ²`, `strength = √coherence`
//!
//! # Example
//!
//! ```
//! use life_engine::{
//!     process_batch, EngineConfig, EntityInput, StimulusObservation, TraitState, TraitValue,
//! };
//!
//! let initial = TraitState::new(
//!     "participant-1",
//!     [
//!         ("engagement", TraitValue::linear(0.0)),
//!         ("neuroplasticity", TraitValue::saturating(10.0)),
//!     ],
//! )
//! .unwrap();
//! let observations = vec![StimulusObservation::new("participant-1", 0.8, 0.1, 1.0)];
//!
//! let result = process_batch(
//!     &[EntityInput::new(initial, observations)],
//!     &EngineConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(result.count, 1);
//! assert!(result.mean().unwrap() > 0.0);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod projection;
pub mod session;
pub mod state;
pub mod updater;

pub use config::{BatchConfig, BatchMetric, EngineConfig, ProjectionConfig, UpdateConfig};
pub use error::{LifeError, LifeErrorKind, LifeResult};

pub use state::{EntityId, StimulusObservation, TraitKind, TraitState, TraitValue, TraitVector};

pub use updater::{update_linear_trait, update_saturating_trait, update_trait, TraitUpdater};

pub use projection::{project, ProjectionEngine, ProjectionResult};

pub use batch::{
    process_batch, BatchAggregator, BatchObserver, BatchResult, EntityFailure, EntityInput,
    EntityOutcome, EntityReport, MetricSummary, SignificanceCount,
};

pub use session::ParticipantSession;
