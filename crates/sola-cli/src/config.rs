//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SOLA_`-prefixed environment variables (`SOLA_GENERATION__MODEL`, ...)
//! 3. `OPENAI_BASE_URL` for `generation.base_url`
//! 4. Config file (`--config FILE`, else the platform config path)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use sola_adapters::completion::DEFAULT_BASE_URL;
use sola_core::domain::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where templates and standards documents live.
    #[serde(default)]
    pub paths: PathsConfig,
    /// Remote completion settings.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// Unset directories mean the templates and standards built into the binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            generation: GenerationConfig {
                model: DEFAULT_MODEL.into(),
                temperature: DEFAULT_TEMPERATURE,
                base_url: DEFAULT_BASE_URL.into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist unless
    /// `allow_missing` is set (`sola config init` is about to create it).
    /// Without it the platform config file is read when present.
    pub fn load(config_file: Option<&PathBuf>, allow_missing: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), !allow_missing),
            None => (Self::config_path(), false),
        };

        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let openai_env = Config::builder()
            .set_override_option(
                "generation.base_url",
                std::env::var("OPENAI_BASE_URL").ok(),
            )?
            .build()?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(openai_env)
            .add_source(
                Environment::with_prefix("SOLA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sola.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sola", "sola")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".sola.toml"))
    }

    /// The defaults, as written by `sola config init`.
    pub fn default_toml() -> anyhow::Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to serialise defaults")
    }

    /// Active file: `--config` when given, else the platform path.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }
}
