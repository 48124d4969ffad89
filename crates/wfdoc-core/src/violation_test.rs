use super::{IssueSeverity, Violation, ViolationKind};
use crate::FieldPath;
use serde_json::json;

#[test]
fn violations_are_sorted_by_path_then_severity() {
    let mut violations = vec![
        Violation::warning(
            ViolationKind::DuplicateNodeName,
            "$.nodes[1].name".parse().expect("must parse"),
            "second",
        ),
        Violation::error(
            ViolationKind::MissingField,
            "$.nodes[0].id".parse().expect("must parse"),
            "first",
        ),
        Violation::error(ViolationKind::WrongType, FieldPath::root().key("active"), "zeroth"),
    ];

    Violation::sort_stable(&mut violations);

    assert_eq!(violations[0].message, "zeroth");
    assert_eq!(violations[1].message, "first");
    assert_eq!(violations[2].severity, IssueSeverity::Warning);
}

#[test]
fn display_includes_severity_kind_and_path() {
    let violation = Violation::error(
        ViolationKind::WrongArrayElementType,
        "$.nodes[0].position[1]".parse().expect("must parse"),
        "expected integer, found string",
    );
    assert_eq!(
        violation.to_string(),
        "error [wrong_array_element_type] $.nodes[0].position[1]: expected integer, found string"
    );
}

#[test]
fn serializes_kind_as_snake_case_and_skips_empty_options() {
    let violation = Violation::error(
        ViolationKind::MissingField,
        FieldPath::root().key("triggerCount"),
        "missing required field `triggerCount`",
    );
    let value = serde_json::to_value(&violation).expect("must serialize");
    assert_eq!(value.get("kind"), Some(&json!("missing_field")));
    assert_eq!(value.get("severity"), Some(&json!("error")));
    assert!(value.get("node_id").is_none());
    assert!(value.get("related").is_none());
}
