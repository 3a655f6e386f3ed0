//! Target platforms and their option vocabularies

use crate::config::constants::{platforms, structures};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// AI tool a prompt is being drafted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    General,
    #[value(name = "chatgpt")]
    #[serde(rename = "chatgpt")]
    ChatGpt,
    Midjourney,
    StableDiffusion,
    Claude,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::General,
        Platform::ChatGpt,
        Platform::Midjourney,
        Platform::StableDiffusion,
        Platform::Claude,
    ];

    /// Identifier used on the command line and in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => platforms::GENERAL,
            Self::ChatGpt => platforms::CHATGPT,
            Self::Midjourney => platforms::MIDJOURNEY,
            Self::StableDiffusion => platforms::STABLE_DIFFUSION,
            Self::Claude => platforms::CLAUDE,
        }
    }

    /// Human-facing name used in notices
    pub fn display_name(self) -> &'static str {
        match self {
            Self::General => "AI",
            Self::ChatGpt => "ChatGPT",
            Self::Midjourney => "Midjourney",
            Self::StableDiffusion => "Stable Diffusion",
            Self::Claude => "Claude",
        }
    }

    /// Image platforms ask for an "idea" rather than a "prompt"
    pub fn takes_idea(self) -> bool {
        matches!(self, Self::Midjourney | Self::StableDiffusion)
    }

    /// General and ChatGPT share the text-prompt option set
    pub fn is_text_prompt(self) -> bool {
        matches!(self, Self::General | Self::ChatGpt)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output structure for Claude prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaudeStructure {
    #[default]
    NonXml,
    Xml,
    Json,
    Markdown,
}

impl ClaudeStructure {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NonXml => structures::NON_XML,
            Self::Xml => structures::XML,
            Self::Json => structures::JSON,
            Self::Markdown => structures::MARKDOWN,
        }
    }

    /// Resolve an option string; anything unrecognized selects the plain structure
    pub fn from_option(option: &str) -> Self {
        match option {
            structures::XML => Self::Xml,
            structures::JSON => Self::Json,
            structures::MARKDOWN => Self::Markdown,
            _ => Self::NonXml,
        }
    }
}

impl fmt::Display for ClaudeStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
