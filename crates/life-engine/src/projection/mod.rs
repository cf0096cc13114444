//! Trait projection: normalized weights and coherence.
//!
//! `w_i = |v_i| / Σ|v_j|`, `coherence = Σ w_i²` (in `[1/n, 1]`),
//! `projection_strength = √coherence`. An all-zero vector yields the
//! degenerate result with every weight, coherence and strength at 0.

mod engine;
mod result;


pub use self::engine::{project, ProjectionEngine};
pub use self::result::ProjectionResult;
