//! Per-cycle trait recurrences.
//!
//! - [`update_linear_trait`]: `v + rate · e · (1 + w · env)`, unbounded
//! - [`update_saturating_trait`]: `min(S, v + k · (1 - v/S) · x · ln(1 + dt))`
//! - [`TraitUpdater`]: applies an observation to every trait of a state
//!   according to its declared kind

mod linear;
mod saturating;
mod trait_updater;


pub use self::linear::update_linear_trait;
pub use self::saturating::update_saturating_trait;
pub use self::trait_updater::{update_trait, TraitUpdater};
