//! Generation facade: validate, transform and report the outcome
//!
//! The facade owns no state besides its notifier. Every call is synchronous
//! and deterministic except [`GenerationFacade::generate_remote`], which
//! performs exactly one HTTP request.

pub mod notifier;

pub use notifier::{Notice, NoticeSeverity, Notifier, RecordingNotifier, TracingNotifier};

use crate::prompts::{EmptyInputError, Platform, PromptRequest, PromptResult, transform};
use crate::remote::{RemoteGenerationError, RemoteGenerator};
use tracing::info;

pub struct GenerationFacade<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> GenerationFacade<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run the local transformation for `request` and notify the outcome
    pub fn generate(&self, request: &PromptRequest) -> Result<PromptResult, EmptyInputError> {
        match transform(request) {
            Ok(result) => {
                info!(platform = %request.platform(), option = request.option(), "prompt generated");
                self.notifier.notify(&success_notice(request.platform()));
                Ok(result)
            }
            Err(err) => {
                self.notifier.notify(&empty_input_notice(err.platform));
                Err(err)
            }
        }
    }

    /// Delegate generation to the remote endpoint, using the request option as
    /// the prompt type
    pub async fn generate_remote(
        &self,
        generator: &RemoteGenerator,
        request: &PromptRequest,
    ) -> Result<PromptResult, RemoteGenerationError> {
        if request.is_blank() {
            let err = EmptyInputError::new(request.platform());
            self.notifier.notify(&empty_input_notice(err.platform));
            return Err(err.into());
        }

        match generator.generate(request.raw_text(), request.option()).await {
            Ok(result) => {
                info!(endpoint = generator.endpoint(), "remote prompt generated");
                self.notifier.notify(&Notice::success(
                    "AI prompt generated!",
                    "Your prompt has been enhanced and optimized.",
                ));
                Ok(result)
            }
            Err(err) => {
                self.notifier.notify(&Notice::destructive(
                    "Error generating prompt",
                    "Please try again later.",
                ));
                Err(err)
            }
        }
    }
}

/// Validation notice shown when the input is empty
pub fn empty_input_notice(platform: Platform) -> Notice {
    let title = if platform.takes_idea() {
        "Please enter an idea"
    } else {
        "Please enter a prompt"
    };
    Notice::destructive(
        title,
        format!(
            "Add some text to generate your {} prompt.",
            platform.display_name()
        ),
    )
}

/// Notice shown after a local transformation succeeds. The general prompt
/// form uses an unqualified title.
pub fn success_notice(platform: Platform) -> Notice {
    let name = platform.display_name();
    match platform {
        Platform::General => Notice::success(
            "Prompt generated!",
            "Your AI prompt has been enhanced and optimized.",
        ),
        Platform::ChatGpt => Notice::success(
            format!("{name} prompt generated!"),
            "Your AI prompt has been enhanced and optimized.",
        ),
        _ => Notice::success(
            format!("{name} prompt generated!"),
            format!("Your prompt has been optimized for {name}."),
        ),
    }
}
