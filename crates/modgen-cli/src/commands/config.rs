//! `modgen config`: show, locate, or create the configuration file.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            output.header("Effective configuration:")?;
            output.raw(&render(&config)?)?;
        }

        ConfigCommands::Path => {
            let path = config_file.unwrap_or_else(AppConfig::config_path);
            output.raw(&format!("{}\n", path.display()))?;
        }

        ConfigCommands::Init { force, local } => {
            let path = if local {
                PathBuf::from(LOCAL_CONFIG_FILE)
            } else {
                config_file.unwrap_or_else(AppConfig::config_path)
            };

            if path.exists() {
                if !force {
                    return Err(CliError::ConfigExists { path });
                }
                output.warning(&format!("Overwriting {}", path.display()))?;
            }

            write_default(&path)?;
            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).with_cli_context(|| "Failed to serialise configuration")
}

fn write_default(path: &Path) -> CliResult<()> {
    let text = render(&AppConfig::default())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_has_every_section() {
        let text = render(&AppConfig::default()).unwrap();
        assert!(text.contains("[paths]"));
        assert!(text.contains("ipp_prefix = \"./\""));
        assert!(text.contains("[generation]"));
        assert!(text.contains("strict_modules = false"));
    }

    #[test]
    fn write_default_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/modgen/config.toml");

        write_default(&path).unwrap();

        let parsed: AppConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
