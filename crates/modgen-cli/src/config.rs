//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`GenerationOptions`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `MODGEN_<SECTION>__<KEY>`, e.g.
//!    `MODGEN_PATHS__IPP_PREFIX=out/`
//! 3. `.modgen.toml` in the current directory
//! 4. Config file (`--config FILE`, or the platform config directory)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use modgen_core::domain::{GenerationOptions, UnknownModulePolicy};

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".modgen.toml";

/// Prefix for configuration environment variables.
const ENV_PREFIX: &str = "MODGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input and output locations.
    pub paths: PathsConfig,
    /// Generation behaviour.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub ipp_prefix: String,
    pub hpp_prefix: String,
    /// Document read when `generate`/`check` get no FILES.
    pub default_spec: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub strict_modules: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            ipp_prefix: GenerationOptions::DEFAULT_IPP_PREFIX.into(),
            hpp_prefix: GenerationOptions::DEFAULT_HPP_PREFIX.into(),
            default_spec: PathBuf::from(modgen_adapters::JsonSpecLoader::DEFAULT_DOCUMENT),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.  When
    /// `None`, the platform config file is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (file, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        Self::load_from(&file, required, Path::new(LOCAL_CONFIG_FILE))
    }

    fn load_from(file: &Path, required: bool, local: &Path) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(file).required(required))
            .add_source(config::File::from(local).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", file.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has an invalid value")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.modgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "modgen", "modgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Options for the generator, before CLI overrides.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions::new(&self.paths.ipp_prefix, &self.paths.hpp_prefix)
            .with_unknown_module(UnknownModulePolicy::from_strict(
                self.generation.strict_modules,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_match_generator_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths.ipp_prefix, "./");
        assert_eq!(cfg.paths.hpp_prefix, "include/");
        assert_eq!(cfg.paths.default_spec, PathBuf::from("modules.json"));
        assert!(!cfg.generation.strict_modules);
        assert_eq!(cfg.generation_options(), GenerationOptions::default());
    }

    #[test]
    fn missing_optional_files_give_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(
            &dir.path().join("config.toml"),
            false,
            &dir.path().join(LOCAL_CONFIG_FILE),
        )
        .unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(
            &dir.path().join("absent.toml"),
            true,
            &dir.path().join(LOCAL_CONFIG_FILE),
        );
        assert!(result.is_err());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(
            &file,
            "[paths]\nipp_prefix = \"generated/\"\n\n[generation]\nstrict_modules = true\n",
        )
        .unwrap();

        let cfg =
            AppConfig::load_from(&file, true, &dir.path().join(LOCAL_CONFIG_FILE)).unwrap();

        assert_eq!(cfg.paths.ipp_prefix, "generated/");
        assert_eq!(cfg.paths.hpp_prefix, "include/");
        assert_eq!(
            cfg.generation_options().unknown_module,
            UnknownModulePolicy::Report
        );
    }

    #[test]
    fn local_file_overrides_global_file() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("config.toml");
        let local = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&global, "[paths]\nhpp_prefix = \"global/\"\n").unwrap();
        fs::write(&local, "[paths]\nhpp_prefix = \"local/\"\n").unwrap();

        let cfg = AppConfig::load_from(&global, true, &local).unwrap();
        assert_eq!(cfg.paths.hpp_prefix, "local/");
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
