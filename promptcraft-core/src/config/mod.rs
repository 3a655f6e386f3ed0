//! promptcraft configuration
//!
//! Loads `promptcraft.toml` and exposes the preferred option per platform and
//! the remote endpoint settings.

pub mod constants;
pub mod loader;

pub use loader::{ConfigManager, PromptcraftConfig};

use crate::prompts::{Platform, catalog};
use serde::{Deserialize, Serialize};

/// Preferred option per platform, used when the caller does not pick one
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    #[serde(default = "default_prompt_type")]
    pub general: String,

    #[serde(default = "default_prompt_type")]
    pub chatgpt: String,

    #[serde(default = "default_orientation")]
    pub midjourney: String,

    #[serde(default = "default_image_style")]
    pub stable_diffusion: String,

    #[serde(default = "default_structure")]
    pub claude: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            general: default_prompt_type(),
            chatgpt: default_prompt_type(),
            midjourney: default_orientation(),
            stable_diffusion: default_image_style(),
            claude: default_structure(),
        }
    }
}

impl DefaultsConfig {
    pub fn option_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::General => &self.general,
            Platform::ChatGpt => &self.chatgpt,
            Platform::Midjourney => &self.midjourney,
            Platform::StableDiffusion => &self.stable_diffusion,
            Platform::Claude => &self.claude,
        }
    }

    /// Platforms whose configured option is not in the catalog. Such values
    /// are still honored by the transformers.
    pub fn unknown_options(&self) -> Vec<(Platform, String)> {
        Platform::ALL
            .into_iter()
            .filter(|&platform| !catalog::is_known_option(platform, self.option_for(platform)))
            .map(|platform| (platform, self.option_for(platform).to_string()))
            .collect()
    }
}

fn default_prompt_type() -> String {
    catalog::default_option(Platform::General).to_string()
}
fn default_orientation() -> String {
    catalog::default_option(Platform::Midjourney).to_string()
}
fn default_image_style() -> String {
    catalog::default_option(Platform::StableDiffusion).to_string()
}
fn default_structure() -> String {
    catalog::default_option(Platform::Claude).to_string()
}

/// Remote structured-prompt endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RemoteConfig {
    /// URL receiving the POST request
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout; unset means wait for the server
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Prompt type sent when none is given
    #[serde(default = "default_remote_prompt_type")]
    pub prompt_type: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
            prompt_type: default_remote_prompt_type(),
        }
    }
}

impl RemoteConfig {
    /// Whether the configured prompt type is one of the catalog prompt types
    pub fn has_known_prompt_type(&self) -> bool {
        catalog::is_known_option(Platform::General, &self.prompt_type)
    }
}

fn default_endpoint() -> String {
    constants::remote::DEFAULT_ENDPOINT.to_string()
}
fn default_remote_prompt_type() -> String {
    constants::remote::DEFAULT_PROMPT_TYPE.to_string()
}
