//! Tests for publish packs.

mod test_utils;

use test_utils::{MockDriver, MockReply, config, project_kind, project_with, read};
use vellum_error::ProjectErrorKind;
use vellum_narrative::GenerationContext;
use vellum_narrative::workflow::{PublishOptions, publish};

const FINAL: &str = "\n\n---\n\n## FINAL NARRATION | 2025-01-04 09:00:00 | source: script.md | 2 beats\n\nNarration extracted from script.md.\n\
                     \n\n---\n\n## Beat 1\n\nThe tower hums at 03:12.\n\
                     \n\n---\n\n## Beat 2\n\nThe ledger is redacted.\n";

#[tokio::test]
async fn test_pack_holds_metadata_and_thumbnails() {
    let (_temp, project) = project_with(&[("script_narration_final.md", FINAL)]);
    let config = config();
    let driver = MockDriver::with_replies(vec![
        MockReply::text("TITLE:\nThe Hush Pulse\n\nDESCRIPTION:\nA tower hums."),
        MockReply::text("1. CONCEPT TITLE: The Humming Mast"),
    ]);
    let ctx = GenerationContext::new(&driver, &config);

    let report = publish(&ctx, &project, &PublishOptions::default()).await.unwrap();

    assert!(report.refused().is_empty());
    assert_eq!(driver.call_count(), 2);
    let metadata_prompt = driver.user_prompt(0);
    assert!(metadata_prompt.contains("The tower hums at 03:12.\n\nThe ledger is redacted."));
    assert!(metadata_prompt.contains("The Shrouded Ledger"));

    let pack = read(&project, "publish_pack.md");
    assert!(pack.contains("## PUBLISH PACK | "));
    assert!(pack.contains("### METADATA\n\nTITLE:\nThe Hush Pulse"));
    assert!(pack.contains("### THUMBNAIL CONCEPTS\n\n1. CONCEPT TITLE: The Humming Mast"));
}

#[tokio::test]
async fn test_no_thumbnails() {
    let (_temp, project) = project_with(&[("script_narration_final.md", FINAL)]);
    let config = config();
    let driver = MockDriver::with_replies(vec![MockReply::text("TITLE:\nThe Hush Pulse")]);
    let ctx = GenerationContext::new(&driver, &config);
    let options = PublishOptions {
        thumbnails: false,
        ..PublishOptions::default()
    };

    publish(&ctx, &project, &options).await.unwrap();

    assert_eq!(driver.call_count(), 1);
    assert!(!read(&project, "publish_pack.md").contains("THUMBNAIL CONCEPTS"));
}

#[tokio::test]
async fn test_refused_metadata_is_noted() {
    let (_temp, project) = project_with(&[("script_narration_final.md", FINAL)]);
    let config = config();
    let driver = MockDriver::with_replies(vec![
        MockReply::Refusal("Declined.".to_string()),
        MockReply::text("1. CONCEPT TITLE: The Humming Mast"),
    ]);
    let ctx = GenerationContext::new(&driver, &config);

    let report = publish(&ctx, &project, &PublishOptions::default()).await.unwrap();

    assert_eq!(report.refused(), &vec!["metadata".to_string()]);
    let pack = read(&project, "publish_pack.md");
    assert!(pack.contains("The service declined this part"));
    assert!(pack.contains("The Humming Mast"));
    assert!(project.file("publish_pack_refusals.md").exists());
}

#[tokio::test]
async fn test_dry_run_shows_prompts() {
    let (_temp, project) = project_with(&[("script_narration_final.md", FINAL)]);
    let config = config();
    let driver = MockDriver::new();
    let ctx = GenerationContext::new(&driver, &config);
    let options = PublishOptions {
        dry_run: true,
        ..PublishOptions::default()
    };

    let report = publish(&ctx, &project, &options).await.unwrap();

    let plan = report.plan().as_deref().unwrap();
    assert!(plan.contains("--- metadata prompt ---"));
    assert!(plan.contains("--- thumbnail prompt ---"));
    assert_eq!(driver.call_count(), 0);
    assert!(!project.file("publish_pack.md").exists());
}

#[tokio::test]
async fn test_missing_narration_names_finalize() {
    let (_temp, project) = project_with(&[]);
    let config = config();
    let driver = MockDriver::new();
    let ctx = GenerationContext::new(&driver, &config);

    let err = publish(&ctx, &project, &PublishOptions::default()).await.unwrap_err();

    match project_kind(&err) {
        ProjectErrorKind::DocumentMissing { remedy, .. } => assert!(remedy.contains("vellum finalize")),
        other => panic!("unexpected: {other}"),
    }
}
