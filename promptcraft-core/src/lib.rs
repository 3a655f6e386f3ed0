//! # promptcraft-core
//!
//! Turns a rough idea into a prompt shaped for a specific AI tool.
//!
//! - [`prompts`]: one pure transformation per platform (ChatGPT and general
//!   text prompts, Midjourney, Stable Diffusion, Claude) plus the static option
//!   catalog.
//! - [`generation`]: a small facade that validates, transforms and reports the
//!   outcome to a [`generation::Notifier`].
//! - [`remote`]: client for an external structured-prompt endpoint.
//! - [`config`]: `promptcraft.toml` loading.
//!
//! ```
//! use promptcraft_core::{Platform, PromptRequest, transform};
//!
//! let request = PromptRequest::new(Platform::Midjourney, "a lighthouse at dusk", "vertical");
//! let result = transform(&request).unwrap();
//! assert_eq!(result.text, "a lighthouse at dusk --ar 9:16 --v 6");
//! ```

pub mod config;
pub mod generation;
pub mod prompts;
pub mod remote;

pub use config::{ConfigManager, DefaultsConfig, PromptcraftConfig, RemoteConfig};
pub use generation::{GenerationFacade, Notice, NoticeSeverity, Notifier};
pub use prompts::{
    ClaudeStructure, EmptyInputError, Platform, PlatformOption, PromptRequest, PromptResult,
    transform,
};
pub use remote::{RemoteGenerationError, RemoteGenerator};
