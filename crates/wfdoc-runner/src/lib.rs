mod cli;
mod config;
mod io;
mod logging;
mod run;

pub use cli::{
    Cli, Commands, EngineArg, OutputFormat, SchemaCommand, ValidateCommand, ValidateDirCommand,
    ValidationArgs,
};
pub use config::{
    load_runner_config, load_settings, resolve_settings, validate_runner_config,
    EffectiveSettings, RunnerConfig, RunnerConfigError, ValidationConfig,
};
pub use io::{validate_workspace, FileValidation, WorkspaceValidation};
pub use logging::init_tracing;
pub use run::{execute_schema, execute_validate, execute_validate_dir, CommandOutput, RunnerError};
