mod report;
mod semantic;
mod structure;

pub use report::ValidationReport;
pub use semantic::validate_workflow_semantics;
pub use structure::validate_workflow_value;

use crate::parse::{parse_document_value, workflow_from_value, DocumentFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wfdoc_schema::{validate_schema_instance, SCHEMA_WORKFLOW_EXPORT_1};

/// Which checker produces the structural violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationEngine {
    /// Hand-written recursive descent over the export shape.
    #[default]
    Structural,
    /// The embedded JSON Schema run through `jsonschema`.
    Schema,
}

pub fn validate_with_engine(document: &Value, engine: ValidationEngine) -> ValidationReport {
    match engine {
        ValidationEngine::Structural => validate_workflow_value(document),
        ValidationEngine::Schema => ValidationReport::from_violations(validate_schema_instance(
            SCHEMA_WORKFLOW_EXPORT_1,
            document,
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidateOptions {
    pub format: DocumentFormat,
    pub engine: ValidationEngine,
    pub semantic: bool,
}

/// Parses and validates a document in one go. Parse failures come back as
/// violations, never as `Err`.
pub fn validate_document_text(input: &str, options: ValidateOptions) -> ValidationReport {
    let value = match parse_document_value(input, options.format) {
        Ok(value) => value,
        Err(violations) => return ValidationReport::from_violations(violations),
    };

    let mut report = validate_with_engine(&value, options.engine);
    if options.semantic && report.valid {
        // Semantic checks only ever add warnings; a typed decode failure
        // skips them instead of changing the verdict.
        match workflow_from_value(value) {
            Ok(workflow) => report.extend(validate_workflow_semantics(&workflow)),
            Err(violations) => tracing::warn!(
                violations = violations.len(),
                "typed decode failed on a valid document, semantic checks skipped"
            ),
        }
    }
    tracing::debug!(
        engine = ?options.engine,
        semantic = options.semantic,
        valid = report.valid,
        violations = report.violations.len(),
        "validated workflow document"
    );
    report
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
