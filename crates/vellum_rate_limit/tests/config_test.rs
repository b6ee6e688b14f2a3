//! Tests for the layered configuration.

use std::io::Write;
use vellum_core::GenerationTask;
use vellum_error::{NarrativeErrorKind, VellumErrorKind};
use vellum_rate_limit::VellumConfig;

#[test]
fn test_bundled_defaults_load() {
    let config = VellumConfig::from_toml_str("").unwrap();

    assert_eq!(config.provider.name, "openai");
    assert_eq!(config.provider.model, "gpt-4o-mini");
    assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
    assert_eq!(config.provider.timeout_secs, 120);
    assert_eq!(config.retry.max_retries, 3);
    assert_eq!(config.projects.default_channel, "shrouded");
    assert!(config.projects.root.is_none());
}

#[test]
fn test_bundled_channels_have_keys() {
    let config = VellumConfig::from_toml_str("").unwrap();

    assert_eq!(config.channel_keys(), vec!["aperture", "shrouded"]);

    let shrouded = config.channel("shrouded").unwrap();
    assert_eq!(shrouded.key(), "shrouded");
    assert_eq!(shrouded.display_name(), "The Shrouded Ledger");
    assert!(shrouded.supports_broll());

    let aperture = config.channel("aperture").unwrap();
    assert_eq!(aperture.key(), "aperture");
    assert!(!aperture.supports_broll());
}

#[test]
fn test_unknown_channel_lists_choices() {
    let config = VellumConfig::from_toml_str("").unwrap();

    let err = config.channel("cozy").unwrap_err();
    match err.kind() {
        VellumErrorKind::Narrative(e) => match &e.kind {
            NarrativeErrorKind::UnknownChannel { given, valid } => {
                assert_eq!(given, "cozy");
                assert_eq!(valid, "aperture, shrouded");
            }
            other => panic!("unexpected kind: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_new_channel_is_a_config_change() {
    let config = VellumConfig::from_toml_str(
        r#"
[channels.cozy]
display_name = "Cozy Dread"
outline_persona = "You write gentle unsettling stories."
outline_tone = "Warm rooms, wrong details."
narration_voice = "Soft and slow."
metadata_blurb = "A cozy horror channel."
thumbnail_style = "Lamplight and long shadows."
"#,
    )
    .unwrap();

    assert_eq!(config.channel_keys(), vec!["aperture", "cozy", "shrouded"]);
    let cozy = config.channel("cozy").unwrap();
    assert_eq!(cozy.key(), "cozy");
    assert_eq!(cozy.narration_voice(), "Soft and slow.");
}

#[test]
fn test_channel_or_default() {
    let config = VellumConfig::from_toml_str("[projects]\ndefault_channel = \"aperture\"").unwrap();

    assert_eq!(config.channel_or_default(None).unwrap().key(), "aperture");
    assert_eq!(
        config.channel_or_default(Some("shrouded")).unwrap().key(),
        "shrouded"
    );
}

#[test]
fn test_task_params_from_config_and_fallback() {
    let config = VellumConfig::from_toml_str("[tasks.metadata]\nmax_tokens = 42\ntemperature = 0.1")
        .unwrap();

    let metadata = config.task_params(GenerationTask::Metadata);
    assert_eq!(*metadata.max_tokens(), 42);
    assert!((*metadata.temperature() - 0.1).abs() < f32::EPSILON);

    let outline = config.task_params(GenerationTask::Outline);
    assert_eq!(*outline.max_tokens(), 1400);

    let mut config = config;
    config.tasks.clear();
    assert_eq!(
        config.task_params(GenerationTask::Expand),
        GenerationTask::Expand.default_params()
    );
}

#[test]
fn test_from_file_overrides_bundled() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[provider]\nmodel = \"gpt-4o\"\n\n[retry]\nmax_retries = 0\n\n[projects]\nroot = \"/tmp/vellum-projects\""
    )
    .unwrap();

    let config = VellumConfig::from_file(file.path()).unwrap();

    assert_eq!(config.provider.model, "gpt-4o");
    assert_eq!(config.provider.name, "openai");
    assert_eq!(config.retry.max_retries, 0);
    assert_eq!(
        config.projects.root.as_deref(),
        Some(std::path::Path::new("/tmp/vellum-projects"))
    );
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = VellumConfig::load_with(Some(&missing)).unwrap_err();
    assert!(matches!(err.kind(), VellumErrorKind::Config(_)));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_missing_api_key_names_variable() {
    let mut config = VellumConfig::from_toml_str("").unwrap();
    config.provider.api_key_env = "VELLUM_TEST_KEY_THAT_IS_NEVER_SET".to_string();

    let err = config.provider.api_key().unwrap_err();
    assert!(err.to_string().contains("VELLUM_TEST_KEY_THAT_IS_NEVER_SET"));
}

#[test]
fn test_prompt_templates_present() {
    let config = VellumConfig::from_toml_str("").unwrap();

    assert!(config.prompts.outline().contains("{beats}"));
    assert!(config.prompts.expand_structure_broll().contains("NARRATION:"));
    assert!(config.prompts.polish_notes().contains("- Original:"));
}
