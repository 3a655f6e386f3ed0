use promptcraft_core::generation::{
    GenerationFacade, NoticeSeverity, RecordingNotifier, TracingNotifier,
};
use promptcraft_core::{Platform, PromptRequest};

#[test]
fn success_returns_text_and_notifies_once() {
    let facade = GenerationFacade::new(RecordingNotifier::new());
    let request = PromptRequest::new(Platform::Claude, "Convert Spanish into Japanese", "markdown");

    let result = facade.generate(&request).unwrap();
    assert_eq!(
        result.text,
        "# Task\nConvert Spanish into Japanese\n\n## Instructions\nPlease provide a detailed and helpful response."
    );

    let notices = facade.notifier().notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Claude prompt generated!");
    assert_eq!(notices[0].description, "Your prompt has been optimized for Claude.");
    assert_eq!(notices[0].severity, NoticeSeverity::Success);
}

#[test]
fn empty_input_reports_validation_notice() {
    let facade = GenerationFacade::new(RecordingNotifier::new());
    let request = PromptRequest::new(Platform::Midjourney, "   ", "horizontal");

    let err = facade.generate(&request).unwrap_err();
    assert_eq!(err.platform, Platform::Midjourney);

    let notices = facade.notifier().notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Please enter an idea");
    assert_eq!(
        notices[0].description,
        "Add some text to generate your Midjourney prompt."
    );
    assert_eq!(notices[0].severity, NoticeSeverity::Destructive);
}

#[test]
fn text_platforms_share_generic_success_copy() {
    let notifier = RecordingNotifier::new();
    let facade = GenerationFacade::new(&notifier);

    facade
        .generate(&PromptRequest::new(Platform::ChatGpt, "draft an email", "race"))
        .unwrap();

    let notices = notifier.notices();
    assert_eq!(notices[0].title, "ChatGPT prompt generated!");
    assert_eq!(
        notices[0].description,
        "Your AI prompt has been enhanced and optimized."
    );
}

#[test]
fn facade_output_matches_transformer() {
    let facade = GenerationFacade::new(TracingNotifier);
    for platform in Platform::ALL {
        let request = PromptRequest::new(platform, "idea", "square");
        let via_facade = facade.generate(&request).unwrap();
        let direct = promptcraft_core::transform(&request).unwrap();
        assert_eq!(via_facade, direct);
    }
}
