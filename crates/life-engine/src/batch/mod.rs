//! Batch aggregation over independent entities.
//!
//! Each entity's observations are applied in order, the final state is
//! projected, and the configured metric is recorded. Entity failures are
//! isolated: they are recorded in place and the batch continues. Aggregate
//! statistics cover successful entities only and are absent when there are
//! none.

mod aggregator;
mod input;
mod result;
pub mod stats;


pub use self::aggregator::{process_batch, BatchAggregator, BatchObserver};
pub use self::input::EntityInput;
pub use self::result::{
    BatchResult, EntityFailure, EntityOutcome, EntityReport, MetricSummary, SignificanceCount,
};
