use crate::config::constants::files;
use crate::config::{DefaultsConfig, RemoteConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for promptcraft
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PromptcraftConfig {
    /// Preferred option per platform
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Remote structured-prompt endpoint
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl PromptcraftConfig {
    /// Write the default configuration to `output`.
    ///
    /// Returns `false` without touching the file when it already exists and
    /// `force` is not set.
    pub fn create_sample_config<P: AsRef<Path>>(output: P, force: bool) -> Result<bool> {
        let output = output.as_ref();
        if output.exists() && !force {
            return Ok(false);
        }

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let content = toml::to_string_pretty(&PromptcraftConfig::default())
            .context("Failed to serialize default configuration")?;
        fs::write(output, content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(true)
    }
}

/// Configuration manager for locating and loading promptcraft.toml
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PromptcraftConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load from an explicit file when given, otherwise search `workspace`
    pub fn load_with_override(explicit: Option<&Path>, workspace: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Self::load_from_workspace(workspace),
        }
    }

    /// Get the user's home directory path
    fn get_home_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home));
        }

        if let Ok(userprofile) = std::env::var("USERPROFILE") {
            return Some(PathBuf::from(userprofile));
        }

        dirs::home_dir()
    }

    /// Candidate locations, most specific first
    pub fn search_paths(workspace: &Path) -> Vec<PathBuf> {
        let mut paths = vec![
            workspace.join(files::CONFIG_FILE_NAME),
            workspace
                .join(files::CONFIG_DIR_NAME)
                .join(files::CONFIG_FILE_NAME),
        ];
        if let Some(home_dir) = Self::get_home_dir() {
            paths.push(
                home_dir
                    .join(files::CONFIG_DIR_NAME)
                    .join(files::CONFIG_FILE_NAME),
            );
        }
        paths
    }

    /// Load configuration from a specific workspace
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        for candidate in Self::search_paths(workspace) {
            if candidate.exists() {
                return Self::load_from_file(&candidate);
            }
        }

        tracing::debug!(workspace = %workspace.display(), "no promptcraft.toml found; using defaults");
        Ok(Self {
            config: PromptcraftConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PromptcraftConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        for (platform, option) in config.defaults.unknown_options() {
            tracing::warn!(
                %platform,
                option,
                "configured default option is not in the catalog; it will be used verbatim"
            );
        }
        if !config.remote.has_known_prompt_type() {
            tracing::warn!(
                prompt_type = %config.remote.prompt_type,
                "configured remote prompt type is not in the catalog; it will be sent verbatim"
            );
        }

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &PromptcraftConfig {
        &self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
