use super::generate::{InputSource, resolve_text};
use anyhow::{Context, Result, bail};
use promptcraft_core::generation::{GenerationFacade, Notifier};
use promptcraft_core::prompts::catalog;
use promptcraft_core::{Platform, PromptRequest, RemoteConfig, RemoteGenerator};

/// An explicit `--prompt-type` must come from the catalog; the configured
/// default is sent verbatim (the loader already warned about it)
fn resolve_prompt_type(explicit: Option<String>, remote: &RemoteConfig) -> Result<String> {
    match explicit {
        Some(prompt_type) => {
            if !catalog::is_known_option(Platform::General, &prompt_type) {
                let allowed: Vec<&str> = catalog::options_for(Platform::General)
                    .iter()
                    .map(|o| o.value)
                    .collect();
                bail!(
                    "Unknown prompt type '{prompt_type}'. Allowed values: {}",
                    allowed.join(", ")
                );
            }
            Ok(prompt_type)
        }
        None => Ok(remote.prompt_type.clone()),
    }
}

/// Handle the remote command: one request to the structured-prompt endpoint
pub async fn handle_remote_command(
    notifier: &dyn Notifier,
    remote: &RemoteConfig,
    prompt_type: Option<String>,
    endpoint: Option<String>,
    text: Vec<String>,
) -> Result<()> {
    let prompt_type = resolve_prompt_type(prompt_type, remote)?;

    let mut remote = remote.clone();
    if let Some(endpoint) = endpoint {
        remote.endpoint = endpoint;
    }
    let generator = RemoteGenerator::from_config(&remote)
        .context("Failed to initialize the remote generator")?;

    let idea = resolve_text(Platform::General, InputSource::from_args(text, None))?;
    let request = PromptRequest::new(Platform::General, idea, prompt_type);

    let facade = GenerationFacade::new(notifier);
    let result = facade
        .generate_remote(&generator, &request)
        .await
        .with_context(|| format!("Remote generation via {} failed", generator.endpoint()))?;
    println!("{}", result.text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_prompt_type_must_be_in_catalog() {
        let remote = RemoteConfig::default();
        assert_eq!(
            resolve_prompt_type(Some("race".to_string()), &remote).unwrap(),
            "race"
        );
        let err = resolve_prompt_type(Some("custom".to_string()), &remote).unwrap_err();
        assert!(err.to_string().contains("Allowed values: standard, reasoning, race"));
    }

    #[test]
    fn configured_prompt_type_is_used_verbatim() {
        let remote = RemoteConfig {
            prompt_type: "custom".to_string(),
            ..RemoteConfig::default()
        };
        assert_eq!(resolve_prompt_type(None, &remote).unwrap(), "custom");
    }
}
