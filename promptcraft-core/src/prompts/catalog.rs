//! Static option lists, defaults, sample inputs and quick-action presets.
//!
//! This is presentation data shared by every front end. The transformers never
//! consult it, so an option missing here is still transformed.

use super::platform::Platform;
use crate::config::constants::templates;
use serde::Serialize;

/// One selectable option: the value fed to the transformer plus a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> PlatformOption {
    PlatformOption { value, label }
}

pub const PROMPT_TYPES: &[PlatformOption] = &[
    opt(
        "standard",
        "Standard Prompt – For general use prompt generation",
    ),
    opt(
        "reasoning",
        "Reasoning Prompt – For reasoning tasks and complex problem solving",
    ),
    opt("race", "Race Prompt – Follow the RACE Framework"),
];

pub const ORIENTATIONS: &[PlatformOption] = &[
    opt("horizontal", "Horizontal"),
    opt("vertical", "Vertical"),
    opt("square", "Square"),
    opt("portrait", "Portrait"),
    opt("landscape", "Landscape"),
];

pub const IMAGE_STYLES: &[PlatformOption] = &[
    opt("3d-render", "3D Render"),
    opt("photorealistic", "Photorealistic"),
    opt("anime", "Anime"),
    opt("oil-painting", "Oil Painting"),
    opt("watercolor", "Watercolor"),
    opt("sketch", "Sketch"),
];

pub const CLAUDE_STRUCTURES: &[PlatformOption] = &[
    opt("non-xml", "Non XML Structure"),
    opt("xml", "XML Structure"),
    opt("json", "JSON Structure"),
    opt("markdown", "Markdown Structure"),
];

pub const QUICK_ACTIONS: &[&str] = &[
    "Create a LinkedIn post",
    "Draft a product description",
    "Write customer support response",
    "Write marketing copy",
    "Write a blog post outline",
    "Create presentation outline",
    "Create a proposal",
    "Write a professional email",
];

const SAMPLE_IDEA: &str = "a photo of a man eating spinach on a ship";
const SAMPLE_CLAUDE_TASK: &str = "Convert Spanish into Japanese";

/// Options offered for a platform, in display order
pub fn options_for(platform: Platform) -> &'static [PlatformOption] {
    match platform {
        Platform::General | Platform::ChatGpt => PROMPT_TYPES,
        Platform::Midjourney => ORIENTATIONS,
        Platform::StableDiffusion => IMAGE_STYLES,
        Platform::Claude => CLAUDE_STRUCTURES,
    }
}

/// The option preselected for a platform (first in its list)
pub fn default_option(platform: Platform) -> &'static str {
    match platform {
        Platform::General | Platform::ChatGpt => "standard",
        Platform::Midjourney => "horizontal",
        Platform::StableDiffusion => "3d-render",
        Platform::Claude => "non-xml",
    }
}

/// Example input shown to first-time users, if the platform has one
pub fn sample_input(platform: Platform) -> Option<&'static str> {
    match platform {
        Platform::Midjourney | Platform::StableDiffusion => Some(SAMPLE_IDEA),
        Platform::Claude => Some(SAMPLE_CLAUDE_TASK),
        Platform::General | Platform::ChatGpt => None,
    }
}

pub fn is_known_option(platform: Platform, value: &str) -> bool {
    options_for(platform).iter().any(|o| o.value == value)
}

pub fn option_label(platform: Platform, value: &str) -> Option<&'static str> {
    options_for(platform)
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label)
}

/// Quick actions only apply to the text-prompt platforms
pub fn quick_actions(platform: Platform) -> &'static [&'static str] {
    if platform.is_text_prompt() {
        QUICK_ACTIONS
    } else {
        &[]
    }
}

/// Seed text for a quick action, e.g. "I want a prompt that will create a proposal"
pub fn quick_action_prompt(action: &str) -> String {
    format!("{} {}", templates::QUICK_ACTION_PREFIX, action.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_listed_option() {
        for platform in Platform::ALL {
            let options = options_for(platform);
            assert_eq!(options[0].value, default_option(platform));
            assert!(is_known_option(platform, default_option(platform)));
        }
    }

    #[test]
    fn quick_action_lowercases() {
        assert_eq!(
            quick_action_prompt("Create a LinkedIn post"),
            "I want a prompt that will create a linkedin post"
        );
    }

    #[test]
    fn image_platforms_have_no_quick_actions() {
        assert!(quick_actions(Platform::Midjourney).is_empty());
        assert_eq!(quick_actions(Platform::ChatGpt).len(), 8);
    }

    #[test]
    fn labels_resolve() {
        assert_eq!(option_label(Platform::StableDiffusion, "3d-render"), Some("3D Render"));
        assert_eq!(option_label(Platform::Claude, "yaml"), None);
    }
}
