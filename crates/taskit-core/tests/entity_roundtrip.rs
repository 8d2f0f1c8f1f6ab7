//! Serde roundtrip and JsonSchema validation tests for stored entity types.

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use taskit_core::entities::*;
use taskit_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    task_minimal_roundtrip,
    Task,
    Task {
        id: "0b6c1a4e-2f0e-4c55-9d59-0f3c7c1b2a11".into(),
        title: "Buy groceries".into(),
        description: String::new(),
        completed: false,
        priority: Priority::Medium,
        due_date: None,
        category_id: None,
        created_at: Utc::now(),
        updated_at: None,
        estimated_time: None,
        elapsed_time: None,
    }
);

roundtrip_and_validate!(
    task_full_roundtrip,
    Task,
    Task {
        id: "6f1d0d3a-94b1-4d8e-8f0a-5c2d9e7b4a30".into(),
        title: "Quarterly report".into(),
        description: "Collect numbers from finance".into(),
        completed: true,
        priority: Priority::High,
        due_date: Some(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()),
        category_id: Some("c-work".into()),
        created_at: Utc::now(),
        updated_at: Some(Utc::now()),
        estimated_time: Some("3 hours".into()),
        elapsed_time: Some(5_400),
    }
);

roundtrip_and_validate!(
    category_roundtrip,
    Category,
    Category {
        id: "c-work".into(),
        name: "Work".into(),
    }
);

roundtrip_and_validate!(priority_roundtrip, Priority, Priority::Low);

roundtrip_and_validate!(status_filter_roundtrip, StatusFilter, StatusFilter::Pending);

#[test]
fn task_collection_roundtrip_is_field_for_field() {
    let tasks = vec![
        NewTask::titled("one").into_task("a".into(), Utc::now()),
        NewTask {
            title: "two".into(),
            priority: Some(Priority::Low),
            elapsed_time: Some(42),
            ..NewTask::default()
        }
        .into_task("b".into(), Utc::now()),
    ];

    let raw = serde_json::to_string(&tasks).unwrap();
    let recovered: Vec<Task> = serde_json::from_str(&raw).unwrap();
    assert_eq!(recovered, tasks);
}

#[test]
fn reads_records_written_by_a_browser_client() {
    let raw = r#"[
        {
            "id": "1f7a",
            "title": "Stretch",
            "description": "",
            "completed": false,
            "priority": "low",
            "dueDate": "2025-05-02T17:00:00.000Z",
            "categoryId": "health",
            "createdAt": "2025-05-01T08:15:30.123Z",
            "estimatedTime": "15 min",
            "elapsedTime": 300
        }
    ]"#;

    let tasks: Vec<Task> = serde_json::from_str(raw).unwrap();
    assert_eq!(tasks.len(), 1);
    let task = &tasks[0];
    assert_eq!(task.priority, Priority::Low);
    assert_eq!(task.category_id.as_deref(), Some("health"));
    assert_eq!(task.estimated_time.as_deref(), Some("15 min"));
    assert_eq!(task.elapsed_time, Some(300));
    assert!(task.updated_at.is_none());
}
