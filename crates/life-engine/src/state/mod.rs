//! Entity identifiers, trait vectors, trait state and stimulus observations.

mod entity;
mod observation;
mod trait_state;
mod vector;

pub use self::entity::EntityId;
pub use self::observation::StimulusObservation;
pub use self::trait_state::{TraitKind, TraitState, TraitValue};
pub use self::vector::TraitVector;
