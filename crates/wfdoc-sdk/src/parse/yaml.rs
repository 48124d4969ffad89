use serde_json::Value;
use wfdoc_core::{FieldPath, Violation, ViolationKind};

pub fn parse_yaml(input: &str) -> Result<Value, Vec<Violation>> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_str(input).map_err(|err| {
        vec![Violation::error(
            ViolationKind::ParseError,
            FieldPath::root(),
            format!("yaml parse failed: {err}"),
        )]
    })?;

    // Non-string keys and tagged values have no JSON counterpart.
    serde_json::to_value(yaml_value).map_err(|err| {
        vec![Violation::error(
            ViolationKind::ParseError,
            FieldPath::root(),
            format!("yaml-to-json conversion failed: {err}"),
        )]
    })
}
