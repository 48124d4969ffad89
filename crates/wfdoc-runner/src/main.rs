use clap::Parser;
use wfdoc_runner::{
    execute_schema, execute_validate, execute_validate_dir, init_tracing, Cli, Commands,
};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_tracing() {
        eprintln!("{error}");
    }

    let result = match cli.command {
        Commands::Validate(command) => execute_validate(&command),
        Commands::ValidateDir(command) => execute_validate_dir(&command),
        Commands::Schema(command) => execute_schema(&command),
    };

    match result {
        Ok(output) => {
            println!("{}", output.text);
            if !output.success {
                std::process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
