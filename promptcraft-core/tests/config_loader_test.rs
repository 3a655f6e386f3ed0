use promptcraft_core::config::{ConfigManager, PromptcraftConfig};
use promptcraft_core::Platform;
use std::fs;
use tempfile::tempdir;

#[test]
fn explicit_missing_file_is_an_error() {
    let workspace = tempdir().unwrap();
    let missing = workspace.path().join("missing.toml");
    let err = ConfigManager::load_with_override(Some(&missing), workspace.path()).unwrap_err();
    assert!(format!("{err}").contains("Failed to read config file"));
}

#[test]
fn default_values() {
    let config = PromptcraftConfig::default();
    assert_eq!(config.defaults.option_for(Platform::Midjourney), "horizontal");
    assert_eq!(config.defaults.option_for(Platform::Claude), "non-xml");
    assert_eq!(
        config.remote.endpoint,
        "http://localhost:8000/generate-structured-prompt/"
    );
    assert_eq!(config.remote.timeout_seconds, None);
}

#[test]
fn workspace_file_is_preferred() {
    let workspace = tempdir().unwrap();
    fs::write(
        workspace.path().join("promptcraft.toml"),
        r#"
[defaults]
midjourney = "vertical"

[remote]
endpoint = "http://prompts.internal/generate"
timeout_seconds = 15
"#,
    )
    .unwrap();

    let manager = ConfigManager::load_from_workspace(workspace.path()).unwrap();
    let config = manager.config();
    assert_eq!(config.defaults.option_for(Platform::Midjourney), "vertical");
    // untouched keys keep their defaults
    assert_eq!(config.defaults.option_for(Platform::StableDiffusion), "3d-render");
    assert_eq!(config.remote.endpoint, "http://prompts.internal/generate");
    assert_eq!(config.remote.timeout_seconds, Some(15));
    assert_eq!(config.remote.prompt_type, "standard");
    assert_eq!(
        manager.config_path(),
        Some(workspace.path().join("promptcraft.toml").as_path())
    );
}

#[test]
fn dot_directory_is_searched() {
    let workspace = tempdir().unwrap();
    let dir = workspace.path().join(".promptcraft");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("promptcraft.toml"), "[defaults]\nclaude = \"json\"\n").unwrap();

    let manager = ConfigManager::load_from_workspace(workspace.path()).unwrap();
    assert_eq!(manager.config().defaults.option_for(Platform::Claude), "json");
}

#[test]
fn unknown_default_options_are_kept() {
    let workspace = tempdir().unwrap();
    let path = workspace.path().join("custom.toml");
    fs::write(&path, "[defaults]\nstable_diffusion = \"pixel-art\"\n").unwrap();

    let manager = ConfigManager::load_from_file(&path).unwrap();
    let defaults = &manager.config().defaults;
    assert_eq!(defaults.option_for(Platform::StableDiffusion), "pixel-art");
    assert_eq!(
        defaults.unknown_options(),
        vec![(Platform::StableDiffusion, "pixel-art".to_string())]
    );
}

#[test]
fn unknown_remote_prompt_type_is_kept() {
    let workspace = tempdir().unwrap();
    let path = workspace.path().join("promptcraft.toml");
    fs::write(&path, "[remote]\nprompt_type = \"custom\"\n").unwrap();

    let manager = ConfigManager::load_from_file(&path).unwrap();
    let remote = &manager.config().remote;
    assert_eq!(remote.prompt_type, "custom");
    assert!(!remote.has_known_prompt_type());
    assert!(PromptcraftConfig::default().remote.has_known_prompt_type());
}

#[test]
fn malformed_file_reports_path() {
    let workspace = tempdir().unwrap();
    let path = workspace.path().join("promptcraft.toml");
    fs::write(&path, "[defaults\nbroken").unwrap();

    let err = ConfigManager::load_from_file(&path).unwrap_err();
    assert!(format!("{err}").contains("Failed to parse config file"));
}

#[test]
fn sample_config_round_trips_and_respects_force() {
    let workspace = tempdir().unwrap();
    let path = workspace.path().join("nested").join("promptcraft.toml");

    assert!(PromptcraftConfig::create_sample_config(&path, false).unwrap());
    let loaded = ConfigManager::load_from_file(&path).unwrap();
    assert_eq!(loaded.config(), &PromptcraftConfig::default());

    fs::write(&path, "[defaults]\ngeneral = \"race\"\n").unwrap();
    assert!(!PromptcraftConfig::create_sample_config(&path, false).unwrap());
    assert!(fs::read_to_string(&path).unwrap().contains("race"));

    assert!(PromptcraftConfig::create_sample_config(&path, true).unwrap());
    assert!(!fs::read_to_string(&path).unwrap().contains("race"));
}
