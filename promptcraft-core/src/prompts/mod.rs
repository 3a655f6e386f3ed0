//! Prompt transformation for each supported platform

pub mod catalog;
pub mod platform;
pub mod request;
pub mod transformer;

pub use catalog::PlatformOption;
pub use platform::{ClaudeStructure, Platform};
pub use request::{EmptyInputError, PromptRequest, PromptResult};
pub use transformer::{
    aspect_ratio, transform, transform_claude, transform_general, transform_midjourney,
    transform_stable_diffusion,
};
