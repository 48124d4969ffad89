use super::{
    parse_document, parse_document_value, parse_document_with_options, DocumentFormat,
    ParseDocumentOptions,
};
use crate::validate::ValidationEngine;
use serde_json::{json, Number};
use wfdoc_core::ViolationKind;

const EXPORT_WITH_SHEETS_NODE: &str = r#"{
  "name": "Leads to sheet",
  "nodes": [
    {
      "parameters": {},
      "name": "When clicking \"Execute\"",
      "type": "n8n-nodes-base.manualTrigger",
      "typeVersion": 1,
      "position": [240, 300],
      "id": "8d7a"
    },
    {
      "parameters": { "operation": "append", "sheetName": "Leads" },
      "name": "Google Sheets",
      "type": "n8n-nodes-base.googleSheets",
      "typeVersion": 4.2,
      "position": [460, 300],
      "id": "c0f1",
      "credentials": {
        "googleSheetsOAuth2Api": { "id": "17", "name": "Sheets account" }
      },
      "notesInFlow": true
    }
  ],
  "settings": { "executionOrder": "v1" },
  "connections": {
    "When clicking \"Execute\"": {
      "main": [[{ "node": "Google Sheets", "type": "main", "index": 0 }]]
    }
  },
  "staticData": {},
  "active": false,
  "versionId": "5b3e",
  "id": "WF1",
  "meta": { "instanceId": "abc" },
  "pinData": null,
  "createdAt": "2024-03-01T10:00:00.000Z",
  "updatedAt": "2024-03-02T10:00:00.000Z",
  "triggerCount": 0,
  "tags": []
}"#;

#[test]
fn parse_json_export_into_typed_document() {
    let workflow = parse_document(EXPORT_WITH_SHEETS_NODE).expect("must parse");
    assert_eq!(workflow.nodes.len(), 2);
    assert_eq!(workflow.version_id, "5b3e");
    assert!(workflow.pin_data.is_none());
    assert_eq!(workflow.extensions.get("tags"), Some(&json!([])));

    let sheets = workflow.node_by_name("Google Sheets").expect("node must exist");
    assert_eq!(sheets.node_type, "n8n-nodes-base.googleSheets");
    assert_eq!(sheets.position, [Number::from(460), Number::from(300)]);
    assert_eq!(sheets.extensions.get("notesInFlow"), Some(&json!(true)));
    let credential = sheets
        .credentials
        .as_ref()
        .and_then(|credentials| credentials.google_sheets_oauth2_api.as_ref())
        .expect("sheets credential must decode");
    assert_eq!(credential.name, "Sheets account");
    assert_eq!(workflow.nodes[0].id, "8d7a");
    assert_eq!(workflow.nodes[0].position, [Number::from(240), Number::from(300)]);
}

#[test]
fn typed_document_serializes_back_to_export_field_names() {
    let workflow = parse_document(EXPORT_WITH_SHEETS_NODE).expect("must parse");
    let value = serde_json::to_value(&workflow).expect("must serialize");
    assert_eq!(value.get("versionId"), Some(&json!("5b3e")));
    assert_eq!(value.get("triggerCount"), Some(&json!(0)));
    assert_eq!(value["nodes"][1]["type"], json!("n8n-nodes-base.googleSheets"));
    assert_eq!(
        value["nodes"][1]["credentials"]["googleSheetsOAuth2Api"]["id"],
        json!("17")
    );
}

#[test]
fn invalid_document_is_rejected_with_violations() {
    let input = r#"{"name":"wf1","nodes":[{"name":"n1"}]}"#;
    let violations = parse_document(input).expect_err("must reject");
    assert!(violations
        .iter()
        .any(|violation| violation.kind == ViolationKind::MissingField
            && violation.field_path.to_string() == "$.nodes[0].typeVersion"));
}

#[test]
fn schema_engine_can_gate_parsing() {
    let options = ParseDocumentOptions {
        engine: ValidationEngine::Schema,
        ..ParseDocumentOptions::default()
    };
    assert!(parse_document_with_options(EXPORT_WITH_SHEETS_NODE, options).is_ok());
}

#[test]
fn skipping_validation_surfaces_typed_decode_error() {
    let options = ParseDocumentOptions {
        format: DocumentFormat::Json,
        validate: false,
        ..ParseDocumentOptions::default()
    };
    let violations = parse_document_with_options(r#"{"name":"wf1"}"#, options)
        .expect_err("must reject");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::ParseError);
}

#[test]
fn auto_format_detects_yaml() {
    let value = parse_document_value("name: wf1\nactive: true\n", DocumentFormat::Auto)
        .expect("yaml must parse");
    assert_eq!(value, json!({ "name": "wf1", "active": true }));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let violations = parse_document_value("name: [\n", DocumentFormat::Yaml).expect_err("must reject");
    assert_eq!(violations[0].kind, ViolationKind::ParseError);
    assert!(violations[0].message.starts_with("yaml parse failed"));
}

#[test]
fn integral_float_coordinates_are_accepted() {
    let input = EXPORT_WITH_SHEETS_NODE.replace("[240, 300]", "[240.0, 300.0]");
    let workflow = parse_document(input.as_str()).expect("must parse");
    let [x, y] = &workflow.nodes[0].position;
    assert_eq!((x.as_f64(), y.as_f64()), (Some(240.0), Some(300.0)));
}

#[test]
fn trigger_count_beyond_i64_still_decodes() {
    let input = EXPORT_WITH_SHEETS_NODE.replace(
        "\"triggerCount\": 0",
        "\"triggerCount\": 18446744073709551615",
    );
    let workflow = parse_document(input.as_str()).expect("must parse");
    assert_eq!(workflow.trigger_count, Number::from(u64::MAX));
}

#[test]
fn fractional_coordinates_fail_typed_decode() {
    let options = ParseDocumentOptions {
        validate: false,
        ..ParseDocumentOptions::default()
    };
    let input = EXPORT_WITH_SHEETS_NODE.replace("[240, 300]", "[240.5, 300]");
    let violations = parse_document_with_options(input.as_str(), options).expect_err("must reject");
    assert_eq!(violations[0].kind, ViolationKind::ParseError);
    assert!(violations[0].message.contains("expected integer pair"));
}
