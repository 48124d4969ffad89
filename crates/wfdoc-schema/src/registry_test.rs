use crate::{get_json_schema, known_schema_ids};
use crate::versions::SCHEMA_WORKFLOW_EXPORT_1;
use serde_json::Value;

#[test]
fn registry_returns_workflow_export_schema() {
    let schema = get_json_schema(SCHEMA_WORKFLOW_EXPORT_1).expect("schema must exist");
    assert!(schema.json.contains("$schema"));
    assert_eq!(schema.id, SCHEMA_WORKFLOW_EXPORT_1);
}

#[test]
fn embedded_schema_lists_every_required_top_level_field() {
    let schema = get_json_schema(SCHEMA_WORKFLOW_EXPORT_1)
        .expect("schema must exist")
        .to_value()
        .expect("embedded schema must be json");
    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .expect("required list");
    assert_eq!(required.len(), 13);
    assert!(required.iter().any(|field| field == "triggerCount"));
}

#[test]
fn unknown_schema_returns_none() {
    assert!(get_json_schema("wfdoc-unknown/1").is_none());
    assert_eq!(known_schema_ids(), &[SCHEMA_WORKFLOW_EXPORT_1]);
}
