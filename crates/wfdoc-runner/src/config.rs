use crate::cli::ValidationArgs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wfdoc_core::{FieldPath, Violation, ViolationKind};
use wfdoc_sdk::{ValidateOptions, ValidationEngine};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_schema")]
    pub schema: String,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema: default_runner_schema(),
            validation: ValidationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    #[serde(default)]
    pub engine: Option<ValidationEngine>,
    #[serde(default)]
    pub semantic: Option<bool>,
    #[serde(default)]
    pub fail_on_warnings: bool,
}

/// Config merged with command-line overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveSettings {
    pub options: ValidateOptions,
    pub fail_on_warnings: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerConfigError {
    #[error("read runner config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("runner config parse failed: {0}")]
    Parse(String),
    #[error("runner config validation failed: {}", render_violations(.0))]
    Validation(Vec<Violation>),
}

pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, RunnerConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| RunnerConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let expanded = expand_env_placeholders(raw.as_str()).map_err(RunnerConfigError::Parse)?;
    let config: RunnerConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(expanded.as_str()).map_err(|error| {
            RunnerConfigError::Parse(format!("json decode error: {error}"))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(expanded.as_str()).map_err(|error| {
            RunnerConfigError::Parse(format!("yaml decode error: {error}"))
        })?,
        _ => serde_yaml::from_str(expanded.as_str())
            .or_else(|_| serde_json::from_str(expanded.as_str()))
            .map_err(|error| RunnerConfigError::Parse(error.to_string()))?,
    };

    let mut violations = validate_runner_config(&config);
    Violation::sort_stable(&mut violations);
    if !violations.is_empty() {
        return Err(RunnerConfigError::Validation(violations));
    }
    tracing::debug!(path = %path.display(), "loaded runner config");
    Ok(config)
}

pub fn validate_runner_config(config: &RunnerConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    if config.schema != default_runner_schema() {
        violations.push(Violation::error(
            ViolationKind::ConfigError,
            FieldPath::root().key("schema"),
            format!(
                "unsupported runner config schema `{}` (expected `{}`)",
                config.schema,
                default_runner_schema()
            ),
        ));
    }
    violations
}

/// Flags given on the command line win over the config file. The merged
/// settings are checked once more since a flag can switch semantic checks
/// off underneath `fail_on_warnings`.
pub fn resolve_settings(
    args: &ValidationArgs,
    config: &RunnerConfig,
) -> Result<EffectiveSettings, RunnerConfigError> {
    let engine = args
        .engine
        .map(ValidationEngine::from)
        .or(config.validation.engine)
        .unwrap_or_default();
    let semantic = if args.no_semantic {
        false
    } else {
        args.semantic || config.validation.semantic.unwrap_or(false)
    };

    if config.validation.fail_on_warnings && !semantic {
        return Err(RunnerConfigError::Validation(vec![Violation::error(
            ViolationKind::ConfigError,
            FieldPath::root().key("validation").key("fail_on_warnings"),
            "fail_on_warnings has no effect while semantic checks are disabled",
        )]));
    }

    Ok(EffectiveSettings {
        options: ValidateOptions {
            engine,
            semantic,
            ..ValidateOptions::default()
        },
        fail_on_warnings: config.validation.fail_on_warnings,
    })
}

pub fn load_settings(args: &ValidationArgs) -> Result<EffectiveSettings, RunnerConfigError> {
    let config = match &args.config {
        Some(path) => load_runner_config(path.as_path())?,
        None => RunnerConfig::default(),
    };
    let settings = resolve_settings(args, &config)?;
    tracing::debug!(
        engine = ?settings.options.engine,
        semantic = settings.options.semantic,
        fail_on_warnings = settings.fail_on_warnings,
        "resolved validation settings"
    );
    Ok(settings)
}

fn default_runner_schema() -> String {
    "wfdoc-runner/0.0.1".to_string()
}

fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn expand_env_placeholders(input: &str) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    while let Some(start_offset) = input[cursor..].find("${") {
        let start = cursor + start_offset;
        out.push_str(&input[cursor..start]);
        let var_start = start + 2;
        let Some(end_offset) = input[var_start..].find('}') else {
            return Err("unterminated env placeholder `${...`".to_string());
        };
        let end = var_start + end_offset;
        let key = &input[var_start..end];
        if key.is_empty() {
            return Err("empty env placeholder `${}`".to_string());
        }
        let value = std::env::var(key)
            .map_err(|_| format!("missing env var for placeholder `${{{key}}}`"))?;
        out.push_str(value.as_str());
        cursor = end + 1;
    }
    out.push_str(&input[cursor..]);
    Ok(out)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
