use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use promptcraft_core::generation::{GenerationFacade, Notifier};
use promptcraft_core::prompts::catalog;
use promptcraft_core::{DefaultsConfig, Platform, PromptRequest};
use std::io::Read;

/// Where the raw text for a request comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Args(Vec<String>),
    QuickAction(usize),
    Stdin,
}

impl InputSource {
    pub fn from_args(text: Vec<String>, quick_action: Option<usize>) -> Self {
        match quick_action {
            Some(index) => Self::QuickAction(index),
            None if text.is_empty() => Self::Stdin,
            None => Self::Args(text),
        }
    }
}

/// Produce the raw text for `platform`. Argument words are joined with single
/// spaces; piped input keeps its content apart from one trailing newline.
pub fn resolve_text(platform: Platform, source: InputSource) -> Result<String> {
    match source {
        InputSource::Args(words) => Ok(words.join(" ")),
        InputSource::QuickAction(index) => {
            let actions = catalog::quick_actions(platform);
            if actions.is_empty() {
                bail!("{platform} has no quick actions");
            }
            let action = index
                .checked_sub(1)
                .and_then(|i| actions.get(i))
                .with_context(|| {
                    format!(
                        "Quick action {index} does not exist; choose 1-{}",
                        actions.len()
                    )
                })?;
            Ok(catalog::quick_action_prompt(action))
        }
        InputSource::Stdin => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Ok(String::new());
            }
            let mut buffer = String::new();
            stdin
                .lock()
                .read_to_string(&mut buffer)
                .context("Failed to read prompt text from stdin")?;
            Ok(strip_trailing_newline(buffer))
        }
    }
}

pub fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Pick the option: explicit flag (must be in the catalog), then the
/// configured default, then the catalog default.
pub fn resolve_option(
    platform: Platform,
    explicit: Option<String>,
    defaults: &DefaultsConfig,
) -> Result<String> {
    match explicit {
        Some(option) => {
            if !catalog::is_known_option(platform, &option) {
                let allowed: Vec<&str> = catalog::options_for(platform)
                    .iter()
                    .map(|o| o.value)
                    .collect();
                bail!(
                    "Unknown {platform} option '{option}'. Allowed values: {}",
                    allowed.join(", ")
                );
            }
            Ok(option)
        }
        None => Ok(defaults.option_for(platform).to_string()),
    }
}

/// Handle the generate command
pub fn handle_generate_command(
    notifier: &dyn Notifier,
    defaults: &DefaultsConfig,
    platform: Platform,
    option: Option<String>,
    source: InputSource,
) -> Result<()> {
    let option = resolve_option(platform, option, defaults)?;
    let raw_text = resolve_text(platform, source)?;
    let request = PromptRequest::new(platform, raw_text, option);

    let facade = GenerationFacade::new(notifier);
    let result = facade.generate(&request)?;
    println!("{}", result.text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_source_selection() {
        assert_eq!(InputSource::from_args(vec![], None), InputSource::Stdin);
        assert_eq!(InputSource::from_args(vec![], Some(3)), InputSource::QuickAction(3));
        assert_eq!(
            InputSource::from_args(vec!["hi".into()], None),
            InputSource::Args(vec!["hi".into()])
        );
    }

    #[test]
    fn quick_actions_are_one_based() {
        let text = resolve_text(Platform::General, InputSource::QuickAction(1)).unwrap();
        assert_eq!(text, "I want a prompt that will create a linkedin post");
        assert!(resolve_text(Platform::General, InputSource::QuickAction(0)).is_err());
        assert!(resolve_text(Platform::General, InputSource::QuickAction(9)).is_err());
        assert!(resolve_text(Platform::Claude, InputSource::QuickAction(1)).is_err());
    }

    #[test]
    fn args_are_joined_verbatim() {
        let words = vec!["a".to_string(), " spaced ".to_string(), "idea".to_string()];
        assert_eq!(
            resolve_text(Platform::Midjourney, InputSource::Args(words)).unwrap(),
            "a  spaced  idea"
        );
    }

    #[test]
    fn strips_exactly_one_newline() {
        assert_eq!(strip_trailing_newline("idea\n".into()), "idea");
        assert_eq!(strip_trailing_newline("idea\r\n".into()), "idea");
        assert_eq!(strip_trailing_newline("idea\n\n".into()), "idea\n");
        assert_eq!(strip_trailing_newline("  idea  ".into()), "  idea  ");
    }

    #[test]
    fn option_resolution_order() {
        let mut defaults = DefaultsConfig::default();
        defaults.claude = "markdown".to_string();

        assert_eq!(
            resolve_option(Platform::Claude, None, &defaults).unwrap(),
            "markdown"
        );
        assert_eq!(
            resolve_option(Platform::Claude, Some("json".into()), &defaults).unwrap(),
            "json"
        );
        let err = resolve_option(Platform::Midjourney, Some("wide".into()), &defaults).unwrap_err();
        assert!(err.to_string().contains("horizontal, vertical, square, portrait, landscape"));
    }
}
