//! Toolkit configuration file handling

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use toolkit_catalog::AccessLevel;

pub const CONFIG_FILE_NAME: &str = "toolkit.toml";

/// Top-level toolkit configuration (toolkit.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ToolkitConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where theme preferences are persisted
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding `local_storage.json`
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(".toolkit")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// TOML file with theme overrides
    #[serde(default)]
    pub overrides: Option<PathBuf>,
}

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// YAML catalog to use instead of the built-in one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Stub sign-in
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub access_level: AccessLevel,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Fallback log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl ToolkitConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `toolkit.toml` in the
    /// working directory is used if present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => Self::load_from_dir(Path::new(".")),
        }
    }

    /// Load `toolkit.toml` from a directory, falling back to defaults when
    /// the file does not exist
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        }
        Self::load_file(&config_path)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: ToolkitConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
