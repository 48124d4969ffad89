use crate::cli::{OutputFormat, SchemaCommand, ValidateCommand, ValidateDirCommand};
use crate::config::{load_settings, EffectiveSettings, RunnerConfigError};
use crate::io::{validate_workspace, WorkspaceValidation};
use serde_json::json;
use std::fs;
use std::path::Path;
use wfdoc_core::IssueSeverity;
use wfdoc_schema::{get_json_schema, known_schema_ids};
use wfdoc_sdk::{validate_document_text, ValidationEngine, ValidationReport};

const REPORT_SCHEMA: &str = "wfdoc-report/0.0.1";
const WORKSPACE_REPORT_SCHEMA: &str = "wfdoc-workspace-report/0.0.1";

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("read file failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("runner config load failed: {0}")]
    Config(#[from] RunnerConfigError),
    #[error("unknown schema id `{schema_id}` (known: {known})")]
    UnknownSchema { schema_id: String, known: String },
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
    #[error("logging init failed: {0}")]
    Logging(String),
}

/// Rendered command result. `success` drives the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

pub fn execute_validate(command: &ValidateCommand) -> Result<CommandOutput, RunnerError> {
    let settings = load_settings(&command.validation)?;
    let text = fs::read_to_string(&command.document).map_err(|source| RunnerError::ReadFile {
        path: command.document.display().to_string(),
        source,
    })?;
    tracing::debug!(
        document = %command.document.display(),
        engine = ?settings.options.engine,
        "validating document"
    );

    let report = validate_document_text(text.as_str(), settings.options);
    let success = passes(&report, &settings);
    let text = match command.validation.format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "schema": REPORT_SCHEMA,
            "document": command.document.display().to_string(),
            "engine": settings.options.engine,
            "valid": report.valid,
            "violations": report.violations,
        }))?,
        OutputFormat::Text => render_report_text(
            command.document.as_path(),
            settings.options.engine,
            &report,
        ),
    };
    Ok(CommandOutput { text, success })
}

pub fn execute_validate_dir(command: &ValidateDirCommand) -> Result<CommandOutput, RunnerError> {
    let settings = load_settings(&command.validation)?;
    let validation = validate_workspace(command.workspace.as_path(), settings.options);
    let success = validation.valid()
        && validation
            .files
            .iter()
            .all(|file| passes(&file.report, &settings));
    tracing::debug!(
        workspace = %command.workspace.display(),
        files = validation.files.len(),
        success,
        "validated workspace"
    );

    let text = match command.validation.format {
        OutputFormat::Json => {
            let files = validation
                .files
                .iter()
                .map(|file| {
                    json!({
                        "file": file.path.display().to_string(),
                        "valid": file.report.valid,
                    })
                })
                .collect::<Vec<_>>();
            serde_json::to_string_pretty(&json!({
                "schema": WORKSPACE_REPORT_SCHEMA,
                "workspace": command.workspace.display().to_string(),
                "engine": settings.options.engine,
                "valid": validation.valid(),
                "files": files,
                "violations": validation.combined().violations,
            }))?
        }
        OutputFormat::Text => render_workspace_text(command.workspace.as_path(), &validation),
    };
    Ok(CommandOutput { text, success })
}

pub fn execute_schema(command: &SchemaCommand) -> Result<CommandOutput, RunnerError> {
    let schema = get_json_schema(command.schema_id.as_str())
        .ok_or_else(|| RunnerError::UnknownSchema {
            schema_id: command.schema_id.clone(),
            known: known_schema_ids().join(", "),
        })?;
    Ok(CommandOutput {
        text: schema.json.trim_end().to_string(),
        success: true,
    })
}

fn passes(report: &ValidationReport, settings: &EffectiveSettings) -> bool {
    report.valid && !(settings.fail_on_warnings && report.count(IssueSeverity::Warning) > 0)
}

fn engine_label(engine: ValidationEngine) -> &'static str {
    match engine {
        ValidationEngine::Structural => "structural",
        ValidationEngine::Schema => "schema",
    }
}

fn render_report_text(document: &Path, engine: ValidationEngine, report: &ValidationReport) -> String {
    let mut lines = vec![
        "wfdoc validate".to_string(),
        format!("document: {}", document.display()),
        format!("engine: {}", engine_label(engine)),
        format!("valid: {}", report.valid),
        format!("errors: {}", report.count(IssueSeverity::Error)),
        format!("warnings: {}", report.count(IssueSeverity::Warning)),
    ];
    lines.extend(report.violations.iter().map(ToString::to_string));
    lines.join("\n")
}

fn render_workspace_text(workspace: &Path, validation: &WorkspaceValidation) -> String {
    let mut lines = vec![
        "wfdoc validate-dir".to_string(),
        format!("workspace: {}", workspace.display()),
        format!("files: {}", validation.files.len()),
        format!("valid: {}", validation.valid()),
    ];
    for file in &validation.files {
        let status = if file.report.valid { "ok" } else { "invalid" };
        lines.push(format!("{status} {}", file.path.display()));
        lines.extend(
            file.report
                .violations
                .iter()
                .map(|violation| format!("  {violation}")),
        );
    }
    lines.extend(validation.io_violations.iter().map(ToString::to_string));
    lines.join("\n")
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
