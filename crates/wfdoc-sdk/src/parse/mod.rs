mod json;
mod yaml;

use crate::documents::WorkflowDocument;
use crate::validate::{validate_with_engine, ValidationEngine};
use serde_json::Value;
use wfdoc_core::{FieldPath, Violation, ViolationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Auto,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDocumentOptions {
    pub format: DocumentFormat,
    pub validate: bool,
    pub engine: ValidationEngine,
}

impl Default for ParseDocumentOptions {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Auto,
            validate: true,
            engine: ValidationEngine::Structural,
        }
    }
}

pub fn parse_document(input: &str) -> Result<WorkflowDocument, Vec<Violation>> {
    parse_document_with_options(input, ParseDocumentOptions::default())
}

pub fn parse_document_with_options(
    input: &str,
    options: ParseDocumentOptions,
) -> Result<WorkflowDocument, Vec<Violation>> {
    let value = parse_document_value(input, options.format)?;

    if options.validate {
        let report = validate_with_engine(&value, options.engine);
        if !report.valid {
            return Err(report.violations);
        }
    }

    workflow_from_value(value)
}

/// Reads JSON or YAML text into an untyped document.
pub fn parse_document_value(input: &str, format: DocumentFormat) -> Result<Value, Vec<Violation>> {
    match format {
        DocumentFormat::Auto => {
            if looks_like_json(input) {
                json::parse_json(input)
            } else {
                yaml::parse_yaml(input)
            }
        }
        DocumentFormat::Json => json::parse_json(input),
        DocumentFormat::Yaml => yaml::parse_yaml(input),
    }
}

pub fn workflow_from_value(value: Value) -> Result<WorkflowDocument, Vec<Violation>> {
    serde_json::from_value::<WorkflowDocument>(value).map_err(|err| {
        vec![Violation::error(
            ViolationKind::ParseError,
            FieldPath::root(),
            format!("typed parse of workflow document failed: {err}"),
        )]
    })
}

fn looks_like_json(input: &str) -> bool {
    let trimmed = input.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
