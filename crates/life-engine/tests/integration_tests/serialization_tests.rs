//! Serialization Tests: JSON batch inputs and results

use life_engine::{process_batch, BatchResult, EngineConfig, EntityInput};

const BATCH_JSON: &str = r#"[
    {
        "initial": {
            "entity_id": "p1",
            "traits": {
                "engagement": { "kind": "linear", "value": 0.0 },
                "neuroplasticity": { "kind": "saturating", "value": 50.0 }
            }
        },
        "observations": [
            { "entity_id": "p1", "engagement": 2.0, "elapsed_time": 9.0 }
        ]
    },
    {
        "initial": {
            "entity_id": "p2",
            "traits": { "focus": { "kind": "saturating", "value": 5.0 } }
        },
        "observations": [
            { "entity_id": "p2", "engagement": 0.5, "environmental_factor": 0.3, "elapsed_time": -1.0 }
        ]
    }
]"#;

#[test]
fn test_batch_from_json() {
    let entities: Vec<EntityInput> = serde_json::from_str(BATCH_JSON).unwrap();
    assert_eq!(entities.len(), 2);

    let result = process_batch(&entities, &EngineConfig::default()).unwrap();
    assert_eq!(result.count, 1);
    let report = result.successes().next().unwrap();
    let plasticity = report.final_state.value("neuroplasticity").unwrap();
    assert!((plasticity - 50.1151).abs() < 1e-4);
    assert_eq!(result.failures().next().unwrap().entity_id.as_str(), "p2");
}

#[test]
fn test_batch_result_round_trip() {
    let entities: Vec<EntityInput> = serde_json::from_str(BATCH_JSON).unwrap();
    let result = process_batch(&entities, &EngineConfig::default()).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: BatchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.total, result.total);
    assert_eq!(back.count, result.count);
    assert_eq!(back.metric, result.metric);
    assert_eq!(
        back.failures().map(|f| f.error.clone()).collect::<Vec<_>>(),
        result.failures().map(|f| f.error.clone()).collect::<Vec<_>>()
    );
    let (a, b) = (back.mean().unwrap(), result.mean().unwrap());
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn test_out_of_range_state_is_deserializable_but_fails_in_batch() {
    let json = r#"[{
        "initial": {
            "entity_id": "p1",
            "traits": { "n": { "kind": "saturating", "value": 120.0 } }
        }
    }]"#;
    let entities: Vec<EntityInput> = serde_json::from_str(json).unwrap();
    let result = process_batch(&entities, &EngineConfig::default()).unwrap();
    assert_eq!(result.count, 0);
    assert_eq!(result.failure_count(), 1);
}
