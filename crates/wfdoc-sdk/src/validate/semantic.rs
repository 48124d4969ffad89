use crate::documents::WorkflowDocument;
use serde_json::Value;
use std::collections::HashMap;
use wfdoc_core::{FieldPath, Violation, ViolationKind};

/// Cross-node checks on a structurally valid workflow. Everything reported
/// here is a warning: the export shape itself does not forbid it.
pub fn validate_workflow_semantics(workflow: &WorkflowDocument) -> Vec<Violation> {
    let mut violations = Vec::new();
    let nodes_path = FieldPath::root().key("nodes");
    let mut seen_ids: HashMap<&str, usize> = HashMap::new();
    let mut seen_names: HashMap<&str, usize> = HashMap::new();

    for (index, node) in workflow.nodes.iter().enumerate() {
        let node_path = nodes_path.index(index);
        if let Some(first) = seen_ids.insert(node.id.as_str(), index) {
            violations.push(
                Violation::warning(
                    ViolationKind::DuplicateNodeId,
                    node_path.key("id"),
                    format!("duplicate node id `{}` (first at nodes[{first}])", node.id),
                )
                .with_node_id(Some(node.id.as_str())),
            );
            seen_ids.insert(node.id.as_str(), first);
        }
        if let Some(first) = seen_names.insert(node.name.as_str(), index) {
            violations.push(
                Violation::warning(
                    ViolationKind::DuplicateNodeName,
                    node_path.key("name"),
                    format!("duplicate node name `{}` (first at nodes[{first}])", node.name),
                )
                .with_node_id(Some(node.id.as_str())),
            );
            seen_names.insert(node.name.as_str(), first);
        }
    }

    let connections_path = FieldPath::root().key("connections");
    for (source, outputs) in &workflow.connections {
        let source_path = connections_path.key(source.as_str());
        if workflow.node_by_name(source.as_str()).is_none() {
            violations.push(Violation::warning(
                ViolationKind::UnknownConnectionNode,
                source_path.clone(),
                format!("connection source `{source}` is not a node name"),
            ));
        }
        collect_unknown_targets(outputs, &source_path, workflow, &mut violations);
    }

    Violation::sort_stable(&mut violations);
    violations
}

// Targets look like `{"node": "Name", "type": "main", "index": 0}` nested
// inside per-output arrays; walk generically so every output type is covered.
fn collect_unknown_targets(
    value: &Value,
    path: &FieldPath,
    workflow: &WorkflowDocument,
    violations: &mut Vec<Violation>,
) {
    match value {
        Value::Object(object) => {
            if let Some(target) = object.get("node").and_then(Value::as_str) {
                if workflow.node_by_name(target).is_none() {
                    violations.push(Violation::warning(
                        ViolationKind::UnknownConnectionNode,
                        path.key("node"),
                        format!("connection target `{target}` is not a node name"),
                    ));
                }
                return;
            }
            for (key, child) in object {
                collect_unknown_targets(child, &path.key(key.as_str()), workflow, violations);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_unknown_targets(child, &path.index(index), workflow, violations);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "semantic_test.rs"]
mod tests;
