use serde_json::Value;
use wfdoc_core::{FieldPath, Violation, ViolationKind};

pub fn parse_json(input: &str) -> Result<Value, Vec<Violation>> {
    serde_json::from_str::<Value>(input).map_err(|err| {
        vec![Violation::error(
            ViolationKind::ParseError,
            FieldPath::root(),
            format!("json parse failed: {err}"),
        )]
    })
}
