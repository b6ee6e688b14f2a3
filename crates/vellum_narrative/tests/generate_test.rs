//! Tests for single-shot generation commands.

mod test_utils;

use test_utils::{MockDriver, MockReply, config, narrative_kind, project_with, read};
use vellum_error::{ModelsErrorKind, NarrativeErrorKind, VellumErrorKind};
use vellum_narrative::workflow::{
    AddBeatOptions, add_beat, add_outline, generate_expansion, generate_outline, save_idea,
    save_treatments,
};
use vellum_narrative::{GenerationContext, Screened, latest_section, parse_beats};

const OUTLINE_REPLY: &str = "1. A radio tower hums at 03:12.\n\n2. A clerk logs the hum.\n\n3. The log is redacted.";

#[tokio::test]
async fn test_outline_prompt_and_reply() {
    let config = config();
    let driver = MockDriver::with_replies(vec![MockReply::text(OUTLINE_REPLY)]);
    let ctx = GenerationContext::new(&driver, &config);

    let screened = generate_outline(&ctx, None, "A radio tower hums at night.", 3).await.unwrap();

    assert_eq!(screened, Screened::Accepted(OUTLINE_REPLY.to_string()));
    let request = &driver.requests()[0];
    assert_eq!(*request.max_tokens(), Some(1400));
    assert!(request.messages()[0].content().contains("The Shrouded Ledger"));
    assert!(driver.user_prompt(0).contains("3-beat outline"));
}

#[tokio::test]
async fn test_empty_seed_is_rejected() {
    let config = config();
    let driver = MockDriver::new();
    let ctx = GenerationContext::new(&driver, &config);

    let err = generate_outline(&ctx, None, "   ", 10).await.unwrap_err();

    assert!(matches!(narrative_kind(&err), NarrativeErrorKind::EmptyInput(_)));
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_expansion_without_broll() {
    let config = config();
    let driver = MockDriver::new();
    let ctx = GenerationContext::new(&driver, &config);

    let screened = generate_expansion(&ctx, Some("shrouded"), "The tower hums.", false).await.unwrap();

    assert!(matches!(screened, Screened::Accepted(ref text) if text.contains("NARRATION")));
    assert!(driver.user_prompt(0).contains("B-ROLL MODE (DISABLED)"));
}

#[tokio::test]
async fn test_service_errors_propagate() {
    let config = config();
    let driver = MockDriver::with_replies(vec![MockReply::Error(ModelsErrorKind::Api {
        status: 401,
        message: "Invalid API key".to_string(),
    })]);
    let ctx = GenerationContext::new(&driver, &config);

    let err = generate_outline(&ctx, None, "seed", 10).await.unwrap_err();

    assert!(matches!(err.kind(), VellumErrorKind::Models(_)));
}

#[tokio::test]
async fn test_add_outline_appends_section() {
    let (_temp, project) = project_with(&[("outline.md", "# Hush Pulse Initiative\n")]);
    let config = config();
    let driver = MockDriver::with_replies(vec![MockReply::text(OUTLINE_REPLY)]);
    let ctx = GenerationContext::new(&driver, &config);

    let report = add_outline(&ctx, &project, Some("aperture"), "A radio tower hums.", 3).await.unwrap();

    assert_eq!(report.text().as_deref(), Some(OUTLINE_REPLY));
    let outline = read(&project, "outline.md");
    assert!(outline.starts_with("# Hush Pulse Initiative\n"));
    let section = latest_section(&outline, "AUTO-GENERATED OUTLINE");
    assert!(section.starts_with("## AUTO-GENERATED OUTLINE | "));
    assert!(section.contains("| aperture | seed: A radio tower hums."));
    assert_eq!(parse_beats(section).len(), 3);
}

#[tokio::test]
async fn test_refused_outline_writes_only_sidecar() {
    let (_temp, project) = project_with(&[("outline.md", "# Hush Pulse Initiative\n")]);
    let config = config();
    let driver = MockDriver::with_replies(vec![MockReply::text(
        "I'm sorry, but I can't help with that request.",
    )]);
    let ctx = GenerationContext::new(&driver, &config);

    let report = add_outline(&ctx, &project, None, "seed", 10).await.unwrap();

    assert_eq!(report.refused(), &vec!["outline".to_string()]);
    assert_eq!(read(&project, "outline.md"), "# Hush Pulse Initiative\n");
    assert!(read(&project, "outline_refusals.md").contains("**outline**"));
}

#[tokio::test]
async fn test_add_beat_expands_requested_beat() {
    let outline = format!(
        "# Outline\n\n\n---\n\n## AUTO-GENERATED OUTLINE | 2025-01-01 10:00:00 | shrouded | seed: x\n\n{}\n",
        OUTLINE_REPLY
    );
    let (_temp, project) = project_with(&[("outline.md", &outline)]);
    let config = config();
    let driver = MockDriver::new();
    let ctx = GenerationContext::new(&driver, &config);

    add_beat(&ctx, &project, 2, &AddBeatOptions::default()).await.unwrap();

    assert!(driver.user_prompt(0).contains("A clerk logs the hum."));
    let script = read(&project, "script.md");
    assert!(script.contains("## AUTO-GENERATED BEAT | "));
    assert!(script.contains("| Beat 2\n\n## Beat 2\n\n### 1) NARRATION:\nGenerated narration 1."));
}

#[tokio::test]
async fn test_add_beat_missing_number() {
    let (_temp, project) = project_with(&[("outline.md", OUTLINE_REPLY)]);
    let config = config();
    let driver = MockDriver::new();
    let ctx = GenerationContext::new(&driver, &config);

    let err = add_beat(&ctx, &project, 7, &AddBeatOptions::default()).await.unwrap_err();

    assert_eq!(
        narrative_kind(&err),
        &NarrativeErrorKind::BeatNotFound {
            number: 7,
            available: 3
        }
    );
    assert_eq!(driver.call_count(), 0);
    assert!(!project.file("script.md").exists());
}

#[test]
fn test_save_idea() {
    let (_temp, project) = project_with(&[]);

    save_idea(&project, "  A radio tower that only hums for one listener.  ").unwrap();

    let concepts = read(&project, "concepts.md");
    assert!(concepts.contains("## SAVED IDEA | "));
    assert!(concepts.contains("| manual\n\nA radio tower that only hums for one listener.\n"));
}

#[test]
fn test_empty_idea_is_rejected() {
    let (_temp, project) = project_with(&[]);

    let err = save_idea(&project, " \n ").unwrap_err();

    assert!(matches!(narrative_kind(&err), NarrativeErrorKind::EmptyInput(_)));
    assert!(!project.file("concepts.md").exists());
}

#[tokio::test]
async fn test_treatments_saved_to_concepts() {
    let (_temp, project) = project_with(&[]);
    let config = config();
    let driver = MockDriver::with_replies(vec![MockReply::text("### Treatment 1: The Mast\n- ANGLE: Forensic.")]);
    let ctx = GenerationContext::new(&driver, &config);

    save_treatments(&ctx, &project, None, "A radio tower hums.", 2).await.unwrap();

    assert!(driver.user_prompt(0).contains("Propose 2 distinct treatments"));
    let concepts = read(&project, "concepts.md");
    assert!(concepts.contains("## ALTERNATIVE TREATMENTS | "));
    assert!(concepts.contains("### Treatment 1: The Mast"));
}
