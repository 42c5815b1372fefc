//! `sola config`: inspect and create the configuration file.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = AppConfig::active_path(config_file);

    match cmd {
        ConfigCommands::Path => {
            output.raw(&path.display().to_string())?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&render(&config)?)?;
        }

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::ConfigError {
                    message: format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    ),
                    source: None,
                });
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_cli_context(|| format!("Cannot create {}", parent.display()))?;
            }
            let defaults = AppConfig::default_toml().map_err(|e| CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            })?;
            std::fs::write(&path, defaults)
                .with_cli_context(|| format!("Cannot write {}", path.display()))?;
            output.success(&format!("Configuration written to {}", path.display()))?;
        }
    }

    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}
