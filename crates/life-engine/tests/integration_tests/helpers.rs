//! Helper Functions: Deterministic Data Generation

use life_engine::{EntityInput, StimulusObservation, TraitState, TraitValue};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn make_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Participant with one linear and one saturating trait.
pub fn participant_state(id: &str, engagement: f64, plasticity: f64) -> TraitState {
    TraitState::new(
        id,
        [
            ("engagement", TraitValue::linear(engagement)),
            ("neuroplasticity", TraitValue::saturating(plasticity)),
        ],
    )
    .expect("valid participant state")
}

/// Participant with `cycles` sin-based observations for reproducible values.
pub fn generate_participant(id: &str, cycles: usize, seed: u64) -> EntityInput {
    let observations = (0..cycles)
        .map(|i| {
            let x = (i as f64 + seed as f64) * 0.37;
            StimulusObservation::new(
                id,
                (x.sin() + 1.0) / 2.0,
                x.cos() * 0.5,
                0.5 + (i % 3) as f64 * 0.25,
            )
        })
        .collect();
    EntityInput::new(participant_state(id, 0.0, (seed % 50) as f64), observations)
}

/// Random batch of participants using a seeded RNG.
pub fn random_batch(count: usize, cycles: usize, seed: u64) -> Vec<EntityInput> {
    let mut rng = make_rng(seed);
    (0..count)
        .map(|p| {
            let id = format!("participant-{:03}", p);
            let observations = (0..cycles)
                .map(|_| {
                    StimulusObservation::new(
                        id.as_str(),
                        rng.gen_range(0.0..1.0),
                        rng.gen_range(-0.5..0.5),
                        rng.gen_range(0.1..2.0),
                    )
                })
                .collect();
            EntityInput::new(
                participant_state(&id, rng.gen_range(0.0..0.5), rng.gen_range(0.0..50.0)),
                observations,
            )
        })
        .collect()
}
