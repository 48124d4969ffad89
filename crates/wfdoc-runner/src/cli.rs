use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wfdoc_schema::SCHEMA_WORKFLOW_EXPORT_1;
use wfdoc_sdk::ValidationEngine;

#[derive(Debug, Clone, Parser)]
#[command(name = "wfdoc")]
#[command(about = "Workflow export document validator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate a single workflow export.
    Validate(ValidateCommand),
    /// Validate every JSON/YAML file below a directory.
    ValidateDir(ValidateDirCommand),
    /// Print the embedded JSON Schema.
    Schema(SchemaCommand),
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum EngineArg {
    Structural,
    Schema,
}

impl From<EngineArg> for ValidationEngine {
    fn from(value: EngineArg) -> Self {
        match value {
            EngineArg::Structural => ValidationEngine::Structural,
            EngineArg::Schema => ValidationEngine::Schema,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ValidationArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub engine: Option<EngineArg>,
    #[arg(long, default_value_t = false)]
    pub semantic: bool,
    /// Turn semantic checks off even when the config enables them.
    #[arg(long, default_value_t = false, conflicts_with = "semantic")]
    pub no_semantic: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ValidateCommand {
    #[arg(long)]
    pub document: PathBuf,
    #[command(flatten)]
    pub validation: ValidationArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ValidateDirCommand {
    #[arg(long)]
    pub workspace: PathBuf,
    #[command(flatten)]
    pub validation: ValidationArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SchemaCommand {
    #[arg(long, default_value = SCHEMA_WORKFLOW_EXPORT_1)]
    pub schema_id: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
