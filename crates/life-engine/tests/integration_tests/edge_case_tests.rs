//! Edge Case Tests: boundary conditions and pathological inputs

use life_engine::{
    process_batch, EngineConfig, EntityInput, LifeError, LifeErrorKind, StimulusObservation,
    TraitState, TraitUpdater, TraitValue, UpdateConfig,
};

use super::helpers::participant_state;

#[test]
fn test_nan_engagement_isolated() {
    let good = EntityInput::new(
        participant_state("good", 0.0, 5.0),
        vec![StimulusObservation::new("good", 0.5, 0.0, 1.0)],
    );
    let bad = EntityInput::new(
        participant_state("bad", 0.0, 5.0),
        vec![StimulusObservation::new("bad", f64::NAN, 0.0, 1.0)],
    );
    let result = process_batch(&[bad, good], &EngineConfig::default()).unwrap();
    assert_eq!(result.count, 1);
    let failure = result.failures().next().unwrap();
    assert_eq!(failure.index, 0);
    assert_eq!(failure.kind, LifeErrorKind::Input);
}

#[test]
fn test_linear_overflow_isolated() {
    let initial = TraitState::new("big", [("e", TraitValue::linear(f64::MAX))]).unwrap();
    let input = EntityInput::new(
        initial,
        vec![StimulusObservation::new("big", 1e300, 1e300, 1.0)],
    );
    let result = process_batch(&[input], &EngineConfig::default()).unwrap();
    let failure = result.failures().next().unwrap();
    assert!(matches!(failure.error, LifeError::NonFiniteResult { .. }));
    assert_eq!(failure.kind, LifeErrorKind::Computation);
    assert!(failure.message.contains("trait 'e'"));
}

#[test]
fn test_saturating_at_exact_ceiling() {
    let updater = TraitUpdater::with_defaults();
    let state = participant_state("p", 0.0, 100.0);
    let next = updater
        .apply_observation(&state, &StimulusObservation::new("p", 1.0, 0.0, 1e9))
        .unwrap();
    assert_eq!(next.value("neuroplasticity"), Some(100.0));
}

#[test]
fn test_small_saturation_level() {
    let updater = TraitUpdater::try_new(UpdateConfig {
        saturation_level: 1e-6,
        ..Default::default()
    })
    .unwrap();
    let state = TraitState::new("p", [("n", TraitValue::saturating(0.0))]).unwrap();
    let next = updater
        .apply_observation(&state, &StimulusObservation::new("p", 1.0, 0.0, 1e6))
        .unwrap();
    assert!(next.value("n").unwrap() <= 1e-6);
}

#[test]
fn test_zero_elapsed_observation_only_moves_linear() {
    let updater = TraitUpdater::with_defaults();
    let state = participant_state("p", 0.0, 30.0);
    let next = updater
        .apply_observation(&state, &StimulusObservation::new("p", 1.0, 0.0, 0.0))
        .unwrap();
    assert_eq!(next.value("neuroplasticity"), Some(30.0));
    assert!(next.value("engagement").unwrap() > 0.0);
    assert_eq!(next.cycles, 1);
}

#[test]
fn test_invalid_config_rejected_up_front() {
    for config in [
        UpdateConfig {
            saturation_level: -1.0,
            ..Default::default()
        },
        UpdateConfig {
            adaptation_rate: -0.01,
            ..Default::default()
        },
        UpdateConfig {
            base_rate: f64::NAN,
            ..Default::default()
        },
    ] {
        let err = TraitUpdater::try_new(config).unwrap_err();
        assert!(matches!(err, LifeError::InvalidConfiguration(_)));
    }
}
