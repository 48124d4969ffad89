use super::validate_workflow_semantics;
use crate::parse::workflow_from_value;
use serde_json::{json, Value};
use wfdoc_core::{IssueSeverity, ViolationKind};

fn node(id: &str, name: &str) -> Value {
    json!({
        "parameters": {},
        "name": name,
        "type": "n8n-nodes-base.noOp",
        "typeVersion": 1,
        "position": [0, 0],
        "id": id
    })
}

fn workflow(nodes: Vec<Value>, connections: Value) -> crate::documents::WorkflowDocument {
    workflow_from_value(json!({
        "name": "wf",
        "nodes": nodes,
        "settings": {},
        "connections": connections,
        "staticData": {},
        "active": false,
        "versionId": "v1",
        "id": "wf-1",
        "meta": null,
        "pinData": null,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "triggerCount": 0
    }))
    .expect("fixture must decode")
}

#[test]
fn well_formed_connections_produce_no_warnings() {
    let workflow = workflow(
        vec![node("a", "Start"), node("b", "Send Mail")],
        json!({
            "Start": { "main": [[{ "node": "Send Mail", "type": "main", "index": 0 }]] }
        }),
    );
    assert!(validate_workflow_semantics(&workflow).is_empty());
}

#[test]
fn duplicate_ids_and_names_point_at_later_node() {
    let workflow = workflow(vec![node("a", "Start"), node("a", "Start")], json!({}));

    let violations = validate_workflow_semantics(&workflow);
    assert_eq!(violations.len(), 2);
    assert!(violations
        .iter()
        .all(|violation| violation.severity == IssueSeverity::Warning));
    assert_eq!(violations[0].kind, ViolationKind::DuplicateNodeId);
    assert_eq!(violations[0].field_path.to_string(), "$.nodes[1].id");
    assert!(violations[0].message.contains("first at nodes[0]"));
    assert_eq!(violations[1].kind, ViolationKind::DuplicateNodeName);
}

#[test]
fn unknown_connection_source_and_target_are_reported() {
    let workflow = workflow(
        vec![node("a", "Start")],
        json!({
            "Ghost": { "main": [[]] },
            "Start": { "main": [[{ "node": "Missing Node", "type": "main", "index": 0 }]] }
        }),
    );

    let violations = validate_workflow_semantics(&workflow);
    let paths = violations
        .iter()
        .map(|violation| violation.field_path.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        paths,
        vec!["$.connections.Ghost", "$.connections.Start.main[0][0].node"]
    );
    assert!(violations
        .iter()
        .all(|violation| violation.kind == ViolationKind::UnknownConnectionNode));
}
