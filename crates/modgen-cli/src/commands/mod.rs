//! Command handlers, one module per subcommand.

use std::path::PathBuf;

use crate::config::AppConfig;

pub mod check;
pub mod completions;
pub mod config;
pub mod generate;

/// Documents named on the command line, or the configured default.
fn documents(files: Vec<PathBuf>, config: &AppConfig) -> Vec<PathBuf> {
    if files.is_empty() {
        vec![config.paths.default_spec.clone()]
    } else {
        files
    }
}
