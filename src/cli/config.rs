//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ConfigArgs {
    /// Execute config command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => show(args),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to locate config file: {e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

fn show(args: &ConfigShowArgs) -> CliResult<()> {
    let config = load_config()?;
    if args.json {
        return print_json(&config);
    }

    let text = toml::to_string_pretty(&config)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
    if !Config::exists() {
        println!("# No config file found; showing defaults");
    }
    print!("{text}");
    Ok(())
}
