use super::platform::Platform;
use serde::{Deserialize, Serialize};

/// One generate action: the user's raw text, the target platform and the
/// selected option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    raw_text: String,
    platform: Platform,
    option: String,
}

impl PromptRequest {
    pub fn new(platform: Platform, raw_text: impl Into<String>, option: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            platform,
            option: option.into(),
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn option(&self) -> &str {
        &self.option
    }

    /// Whitespace-only text counts as empty
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}

/// Formatted prompt handed back to the caller for display or copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResult {
    pub text: String,
}

impl PromptResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl AsRef<str> for PromptResult {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Raised when the raw text is empty or whitespace-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No text provided for the {} prompt", .platform.display_name())]
pub struct EmptyInputError {
    pub platform: Platform,
}

impl EmptyInputError {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}
