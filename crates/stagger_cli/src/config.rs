//! Stagger configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stagger_markup::{AnimatorConfig, TitleSelection};
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "stagger.toml";

/// Top-level Stagger configuration (stagger.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct StaggerConfig {
    #[serde(default)]
    pub animator: AnimatorConfig,
    #[serde(default)]
    pub selection: TitleSelection,
}

impl StaggerConfig {
    /// Load configuration from a file, or from a directory containing
    /// stagger.toml
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `stagger init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Invalid config {}", config_path.display()))
    }

    /// Load `path` if given, else ./stagger.toml if present, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(CONFIG_FILE_NAME);
                if local.is_file() {
                    Self::load(local)
                } else {
                    tracing::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: StaggerConfig = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.animator.validate().context("Invalid [animator] section")?;
        self.selection
            .validate()
            .context("Invalid [selection] section")?;
        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
