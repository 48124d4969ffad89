use jsonschema::error::ValidationErrorKind;
use jsonschema::JSONSchema;
use serde_json::Value;
use wfdoc_core::{FieldPath, FieldPathSegment, ValueKind, Violation, ViolationKind};

use crate::registry::get_json_schema;

/// Validates `instance` with the JSON Schema engine and maps every error onto
/// the violation taxonomy used by the structural validator.
pub fn validate_schema_instance(schema_id: &str, instance: &Value) -> Vec<Violation> {
    let Some(schema) = get_json_schema(schema_id) else {
        return vec![Violation::error(
            ViolationKind::SchemaError,
            FieldPath::root(),
            format!("unknown schema id: {schema_id}"),
        )];
    };

    let schema_json = match schema.to_value() {
        Ok(value) => value,
        Err(err) => {
            return vec![Violation::error(
                ViolationKind::SchemaError,
                FieldPath::root(),
                format!("embedded schema json parse failed: {err}"),
            )];
        }
    };

    let compiled = match JSONSchema::options().compile(&schema_json) {
        Ok(compiled) => compiled,
        Err(err) => {
            return vec![Violation::error(
                ViolationKind::SchemaError,
                FieldPath::root(),
                format!("schema compile failed for {schema_id}: {err}"),
            )];
        }
    };

    let mut violations = Vec::new();
    if let Err(errors) = compiled.validate(instance) {
        for error in errors {
            let path = json_pointer_to_field_path(error.instance_path.to_string().as_str());
            let violation = match &error.kind {
                ValidationErrorKind::Required { property } => {
                    let field = property
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| property.to_string());
                    Violation::error(
                        ViolationKind::MissingField,
                        path.key(field.as_str()),
                        format!("missing required field `{field}`"),
                    )
                }
                ValidationErrorKind::Type { .. } => {
                    let kind = if matches!(path.last(), Some(FieldPathSegment::Index(_))) {
                        ViolationKind::WrongArrayElementType
                    } else {
                        ViolationKind::WrongType
                    };
                    Violation::error(
                        kind,
                        path,
                        format!("{error} (found {})", ValueKind::of(&error.instance)),
                    )
                }
                ValidationErrorKind::MinItems { .. } | ValidationErrorKind::MaxItems { .. } => {
                    Violation::error(ViolationKind::InvalidArrayLength, path, error.to_string())
                }
                _ => Violation::error(ViolationKind::WrongType, path, error.to_string()),
            };
            violations.push(violation);
        }
    }
    tracing::debug!(
        schema_id,
        violations = violations.len(),
        "json schema validation finished"
    );
    Violation::sort_stable(&mut violations);
    violations
}

fn json_pointer_to_field_path(pointer: &str) -> FieldPath {
    if pointer.is_empty() || pointer == "/" {
        return FieldPath::root();
    }

    let mut segments = Vec::new();
    for raw_segment in pointer.trim_start_matches('/').split('/') {
        if raw_segment.is_empty() {
            continue;
        }
        let decoded = raw_segment.replace("~1", "/").replace("~0", "~");
        if let Ok(index) = decoded.parse::<usize>() {
            segments.push(FieldPathSegment::Index(index));
        } else {
            segments.push(FieldPathSegment::Key(decoded));
        }
    }
    FieldPath::from_segments(segments)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
