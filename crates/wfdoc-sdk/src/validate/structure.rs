use super::report::ValidationReport;
use serde_json::{Map, Value};
use wfdoc_core::{describe_kinds, FieldPath, ValueKind, Violation, ViolationKind};

struct FieldRule {
    name: &'static str,
    kinds: &'static [ValueKind],
}

const fn rule(name: &'static str, kinds: &'static [ValueKind]) -> FieldRule {
    FieldRule { name, kinds }
}

const STRING: &[ValueKind] = &[ValueKind::String];
const OBJECT: &[ValueKind] = &[ValueKind::Object];
const NULLABLE_OBJECT: &[ValueKind] = &[ValueKind::Object, ValueKind::Null];

const WORKFLOW_FIELDS: &[FieldRule] = &[
    rule("name", STRING),
    rule("nodes", &[ValueKind::Array]),
    rule("settings", OBJECT),
    rule("connections", OBJECT),
    rule("staticData", OBJECT),
    rule("active", &[ValueKind::Boolean]),
    rule("versionId", STRING),
    rule("id", STRING),
    rule("meta", NULLABLE_OBJECT),
    rule("pinData", NULLABLE_OBJECT),
    rule("createdAt", STRING),
    rule("updatedAt", STRING),
    rule("triggerCount", &[ValueKind::Integer]),
];

const NODE_FIELDS: &[FieldRule] = &[
    rule("parameters", OBJECT),
    rule("name", STRING),
    rule("type", STRING),
    rule("typeVersion", &[ValueKind::Number]),
    rule("position", &[ValueKind::Array]),
    rule("id", STRING),
];

const CREDENTIAL_REF_FIELDS: &[FieldRule] = &[rule("id", STRING), rule("name", STRING)];

const POSITION_LEN: usize = 2;

/// Checks a workflow export against the required export shape.
///
/// Every violation is collected; the walk only stops descending where the
/// value is not an object and there is nothing left to inspect.
pub fn validate_workflow_value(document: &Value) -> ValidationReport {
    let mut violations = Vec::new();
    let root = FieldPath::root();

    match document.as_object() {
        Some(object) => {
            check_fields(object, WORKFLOW_FIELDS, &root, None, &mut violations);
            if let Some(Value::Array(nodes)) = object.get("nodes") {
                let nodes_path = root.key("nodes");
                for (index, node) in nodes.iter().enumerate() {
                    validate_node(node, &nodes_path.index(index), &mut violations);
                }
            }
        }
        None => violations.push(Violation::error(
            ViolationKind::WrongType,
            root,
            format!(
                "workflow document must be an object, found {}",
                ValueKind::of(document)
            ),
        )),
    }

    ValidationReport::from_violations(violations)
}

fn validate_node(node: &Value, path: &FieldPath, violations: &mut Vec<Violation>) {
    let Some(object) = node.as_object() else {
        violations.push(Violation::error(
            ViolationKind::WrongArrayElementType,
            path.clone(),
            format!("workflow node must be an object, found {}", ValueKind::of(node)),
        ));
        return;
    };
    let node_id = object.get("id").and_then(Value::as_str);

    check_fields(object, NODE_FIELDS, path, node_id, violations);

    if let Some(Value::Array(position)) = object.get("position") {
        let position_path = path.key("position");
        for (index, coordinate) in position.iter().enumerate() {
            if !ValueKind::Integer.accepts(coordinate) {
                violations.push(
                    Violation::error(
                        ViolationKind::WrongArrayElementType,
                        position_path.index(index),
                        format!(
                            "position coordinate must be an integer, found {}",
                            ValueKind::of(coordinate)
                        ),
                    )
                    .with_node_id(node_id),
                );
            }
        }
        if position.len() != POSITION_LEN {
            violations.push(
                Violation::error(
                    ViolationKind::InvalidArrayLength,
                    position_path,
                    format!(
                        "position must contain exactly {POSITION_LEN} coordinates, found {}",
                        position.len()
                    ),
                )
                .with_node_id(node_id),
            );
        }
    }

    if let Some(credentials) = object.get("credentials") {
        validate_credentials(credentials, &path.key("credentials"), node_id, violations);
    }
}

fn validate_credentials(
    credentials: &Value,
    path: &FieldPath,
    node_id: Option<&str>,
    violations: &mut Vec<Violation>,
) {
    let Some(object) = credentials.as_object() else {
        violations.push(wrong_type(path.clone(), "credentials", OBJECT, credentials, node_id));
        return;
    };

    let key = "googleSheetsOAuth2Api";
    let Some(sheets) = object.get(key) else {
        return;
    };
    let sheets_path = path.key(key);
    match sheets.as_object() {
        Some(sheets_object) => {
            check_fields(sheets_object, CREDENTIAL_REF_FIELDS, &sheets_path, node_id, violations)
        }
        None => violations.push(wrong_type(sheets_path, key, OBJECT, sheets, node_id)),
    }
}

fn check_fields(
    object: &Map<String, Value>,
    rules: &[FieldRule],
    path: &FieldPath,
    node_id: Option<&str>,
    violations: &mut Vec<Violation>,
) {
    for rule in rules {
        match object.get(rule.name) {
            None => violations.push(
                Violation::error(
                    ViolationKind::MissingField,
                    path.key(rule.name),
                    format!("missing required field `{}`", rule.name),
                )
                .with_node_id(node_id),
            ),
            Some(value) if !rule.kinds.iter().any(|kind| kind.accepts(value)) => violations.push(
                wrong_type(path.key(rule.name), rule.name, rule.kinds, value, node_id),
            ),
            Some(_) => {}
        }
    }
}

fn wrong_type(
    path: FieldPath,
    field: &str,
    expected: &[ValueKind],
    value: &Value,
    node_id: Option<&str>,
) -> Violation {
    Violation::error(
        ViolationKind::WrongType,
        path,
        format!(
            "field `{field}` must be {}, found {}",
            describe_kinds(expected),
            ValueKind::of(value)
        ),
    )
    .with_node_id(node_id)
}

#[cfg(test)]
#[path = "structure_test.rs"]
mod tests;
