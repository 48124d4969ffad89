use crate::field_path::FieldPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

impl IssueSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
            IssueSeverity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingField,
    WrongType,
    WrongArrayElementType,
    InvalidArrayLength,
    ParseError,
    SchemaError,
    DuplicateNodeId,
    DuplicateNodeName,
    UnknownConnectionNode,
    ConfigError,
    IoError,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::MissingField => "missing_field",
            ViolationKind::WrongType => "wrong_type",
            ViolationKind::WrongArrayElementType => "wrong_array_element_type",
            ViolationKind::InvalidArrayLength => "invalid_array_length",
            ViolationKind::ParseError => "parse_error",
            ViolationKind::SchemaError => "schema_error",
            ViolationKind::DuplicateNodeId => "duplicate_node_id",
            ViolationKind::DuplicateNodeName => "duplicate_node_name",
            ViolationKind::UnknownConnectionNode => "unknown_connection_node",
            ViolationKind::ConfigError => "config_error",
            ViolationKind::IoError => "io_error",
        }
    }
}

impl Display for ViolationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected deviation from the workflow export shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: IssueSeverity,
    pub field_path: FieldPath,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Value>,
}

impl Violation {
    pub fn error(kind: ViolationKind, field_path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: IssueSeverity::Error,
            field_path,
            message: message.into(),
            node_id: None,
            related: None,
        }
    }

    pub fn warning(kind: ViolationKind, field_path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            ..Self::error(kind, field_path, message)
        }
    }

    pub fn with_node_id(mut self, node_id: Option<&str>) -> Self {
        self.node_id = node_id.map(str::to_string);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    /// Document order first, so a node's violations stay together.
    pub fn sort_stable(violations: &mut [Self]) {
        violations.sort_by(|left, right| {
            (
                &left.field_path,
                left.severity,
                left.kind,
                &left.message,
                &left.node_id,
            )
                .cmp(&(
                    &right.field_path,
                    right.severity,
                    right.kind,
                    &right.message,
                    &right.node_id,
                ))
        });
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity.as_str(),
            self.kind,
            self.field_path,
            self.message
        )
    }
}

#[cfg(test)]
#[path = "violation_test.rs"]
mod tests;
