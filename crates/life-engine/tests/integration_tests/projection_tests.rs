//! Projection Tests: normalization and coherence bounds

use std::collections::BTreeMap;

use life_engine::{project, LifeError, ProjectionConfig, ProjectionEngine, TraitVector};
use rand::Rng;

use super::helpers::make_rng;

#[test]
fn test_normalization_property() {
    let mut rng = make_rng(3);
    for _ in 0..5_000 {
        let n = rng.gen_range(1..20);
        let pairs: Vec<(String, f64)> = (0..n)
            .map(|i| (format!("trait_{}", i), rng.gen_range(0.0..1000.0)))
            .collect();
        let result = project(pairs).unwrap();
        if result.degenerate {
            continue;
        }
        assert!((result.weight_sum() - 1.0).abs() < 1e-9);
        assert!(result.coherence >= 1.0 / n as f64 - 1e-12);
        assert!(result.coherence <= 1.0);
        assert!((result.projection_strength - result.coherence.sqrt()).abs() < 1e-15);
    }
}

#[test]
fn test_degenerate_two_zero_traits() {
    let result = project([("a", 0.0), ("b", 0.0)]).unwrap();
    assert_eq!(result.coherence, 0.0);
    assert_eq!(result.normalized.get("a"), Some(&0.0));
    assert_eq!(result.normalized.get("b"), Some(&0.0));
    assert!(result.degenerate);
}

#[test]
fn test_empty_mapping_is_rejected() {
    let empty: BTreeMap<String, f64> = BTreeMap::new();
    assert_eq!(project(empty).unwrap_err(), LifeError::EmptyTraitVector);
}

#[test]
fn test_transient_negative_linear_trait() {
    let result = project([("engagement", -0.2), ("neuroplasticity", 0.6)]).unwrap();
    assert!((result.weight("engagement").unwrap() - 0.25).abs() < 1e-12);
    assert!((result.weight("neuroplasticity").unwrap() - 0.75).abs() < 1e-12);
}

#[test]
fn test_engine_default_matches_free_function() {
    let vector = TraitVector::from_pairs([("a", 1.5), ("b", 0.5), ("c", 2.0)]).unwrap();
    let engine = ProjectionEngine::try_new(ProjectionConfig::default()).unwrap();
    assert_eq!(
        engine.project(&vector).unwrap(),
        project([("a", 1.5), ("b", 0.5), ("c", 2.0)]).unwrap()
    );
}

#[test]
fn test_weights_shift_dominance() {
    let vector = TraitVector::from_pairs([("engagement", 4.0), ("neuroplasticity", 1.0)]).unwrap();
    let plain = ProjectionEngine::default().project(&vector).unwrap();
    assert_eq!(plain.dominant_trait().map(|(n, _)| n), Some("engagement"));

    let mut config = ProjectionConfig::default();
    config.weights.insert("neuroplasticity".to_string(), 10.0);
    let weighted = ProjectionEngine::try_new(config).unwrap().project(&vector).unwrap();
    assert_eq!(weighted.dominant_trait().map(|(n, _)| n), Some("neuroplasticity"));
}
