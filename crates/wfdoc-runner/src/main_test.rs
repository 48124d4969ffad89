use wfdoc_runner::Cli;
use clap::CommandFactory;

#[test]
fn help_smoke_lists_core_subcommands() {
    let mut command = Cli::command();
    let help = command.render_long_help().to_string();
    assert!(help.contains("validate"));
    assert!(help.contains("validate-dir"));
    assert!(help.contains("schema"));
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
