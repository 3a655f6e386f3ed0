//! Per-platform prompt transformations
//!
//! Every transform is a pure function of the raw text and the option string.
//! The emptiness check looks at the trimmed text, but the output always
//! carries the original text untouched, surrounding whitespace included.

use super::platform::{ClaudeStructure, Platform};
use super::request::{EmptyInputError, PromptRequest, PromptResult};
use crate::config::constants::{aspect_ratios, templates};
use tracing::debug;

/// Transform a request with the rule for its platform
pub fn transform(request: &PromptRequest) -> Result<PromptResult, EmptyInputError> {
    let platform = request.platform();
    let raw = request.raw_text();
    let option = request.option();

    let text = match platform {
        Platform::General | Platform::ChatGpt => transform_general(platform, raw, option)?,
        Platform::Midjourney => transform_midjourney(raw, option)?,
        Platform::StableDiffusion => transform_stable_diffusion(raw, option)?,
        Platform::Claude => transform_claude(raw, option)?,
    };

    debug!(
        platform = %platform,
        option,
        input_len = raw.len(),
        output_len = text.len(),
        "transformed prompt"
    );
    Ok(PromptResult::new(text))
}

/// `Enhanced {option} prompt: {raw}`
///
/// `platform` only feeds the error; General and ChatGPT share the rule.
pub fn transform_general(
    platform: Platform,
    raw: &str,
    option: &str,
) -> Result<String, EmptyInputError> {
    ensure_not_blank(platform, raw)?;
    Ok(format!("Enhanced {option} prompt: {raw}"))
}

/// `{raw} --ar {ratio} --v 6`
pub fn transform_midjourney(raw: &str, option: &str) -> Result<String, EmptyInputError> {
    ensure_not_blank(Platform::Midjourney, raw)?;
    let ratio = aspect_ratio(option);
    let version = templates::MIDJOURNEY_VERSION;
    Ok(format!("{raw} --ar {ratio} --v {version}"))
}

/// `{raw}, {option} style, high quality, detailed, 8k resolution`
pub fn transform_stable_diffusion(raw: &str, option: &str) -> Result<String, EmptyInputError> {
    ensure_not_blank(Platform::StableDiffusion, raw)?;
    let quality = templates::STABLE_DIFFUSION_QUALITY;
    Ok(format!("{raw}, {option} style, {quality}"))
}

/// Wrap the text in the selected Claude structure.
///
/// The JSON structure interpolates the text verbatim, without escaping, so the
/// raw text always appears as-is in the output.
pub fn transform_claude(raw: &str, option: &str) -> Result<String, EmptyInputError> {
    ensure_not_blank(Platform::Claude, raw)?;
    let instruction = templates::CLAUDE_INSTRUCTION;
    let text = match ClaudeStructure::from_option(option) {
        ClaudeStructure::Xml => format!("<task>{raw}</task>\n\n{instruction}."),
        ClaudeStructure::Json => {
            format!("{{\n  \"task\": \"{raw}\",\n  \"instructions\": \"{instruction}\"\n}}")
        }
        ClaudeStructure::Markdown => {
            format!("# Task\n{raw}\n\n## Instructions\n{instruction}.")
        }
        ClaudeStructure::NonXml => format!("{raw}\n\n{instruction}."),
    };
    Ok(text)
}

/// Midjourney `--ar` value for an orientation. Only `horizontal` and
/// `vertical` change the ratio; every other value is square.
pub fn aspect_ratio(orientation: &str) -> &'static str {
    match orientation {
        "horizontal" => aspect_ratios::WIDE,
        "vertical" => aspect_ratios::TALL,
        _ => aspect_ratios::SQUARE,
    }
}

fn ensure_not_blank(platform: Platform, raw: &str) -> Result<(), EmptyInputError> {
    if raw.trim().is_empty() {
        return Err(EmptyInputError::new(platform));
    }
    Ok(())
}
