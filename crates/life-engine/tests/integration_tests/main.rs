//! Integration tests for the trait engine pipeline.
//!
//! These exercise the public API end to end with deterministic data:
//! - Recurrence formulas against hand-computed values
//! - Saturation and normalization invariants over seeded random sweeps
//! - Batch isolate-and-continue and empty-batch semantics
//! - JSON batch documents

mod helpers;
mod edge_case_tests;
mod projection_tests;
mod serialization_tests;
