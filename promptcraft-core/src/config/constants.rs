/// Stable platform identifiers used on the command line and in promptcraft.toml
pub mod platforms {
    pub const GENERAL: &str = "general";
    pub const CHATGPT: &str = "chatgpt";
    pub const MIDJOURNEY: &str = "midjourney";
    pub const STABLE_DIFFUSION: &str = "stable-diffusion";
    pub const CLAUDE: &str = "claude";
}

/// Fixed fragments interpolated by the prompt transformers
pub mod templates {
    /// Closing instruction appended to every Claude structure
    pub const CLAUDE_INSTRUCTION: &str = "Please provide a detailed and helpful response";

    /// Midjourney model version flag
    pub const MIDJOURNEY_VERSION: &str = "6";

    /// Quality tail appended after the Stable Diffusion style
    pub const STABLE_DIFFUSION_QUALITY: &str = "high quality, detailed, 8k resolution";

    /// Prefix used to seed the input box from a quick action
    pub const QUICK_ACTION_PREFIX: &str = "I want a prompt that will";
}

/// Midjourney aspect ratios keyed by orientation
pub mod aspect_ratios {
    pub const WIDE: &str = "16:9";
    pub const TALL: &str = "9:16";
    pub const SQUARE: &str = "1:1";
}

/// Claude structure identifiers
pub mod structures {
    pub const NON_XML: &str = "non-xml";
    pub const XML: &str = "xml";
    pub const JSON: &str = "json";
    pub const MARKDOWN: &str = "markdown";
}

/// Remote structured-prompt endpoint defaults
pub mod remote {
    pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate-structured-prompt/";
    pub const DEFAULT_PROMPT_TYPE: &str = "standard";
}

/// Configuration file locations
pub mod files {
    pub const CONFIG_FILE_NAME: &str = "promptcraft.toml";
    pub const CONFIG_DIR_NAME: &str = ".promptcraft";
}
