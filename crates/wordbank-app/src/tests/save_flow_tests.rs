use wordbank_store::KeyValueStorage;

use super::{FakeLookup, Harness, KEY, cat_result};
use crate::render::{NOTHING_TO_SAVE, PERSONAL_EMPTY, PERSONAL_FALLBACK};

#[tokio::test]
async fn test_startup_shows_empty_dictionary() {
    let mut harness = Harness::new(FakeLookup::default());

    harness.console.start().await.unwrap();
    harness.settle().await;

    assert_eq!(harness.state.screen.personal(), PERSONAL_EMPTY);
}

#[tokio::test]
async fn test_save_persists_shown_result_and_rerenders() {
    let mut harness = Harness::new(FakeLookup::answering(Ok(cat_result())));

    harness.search("cat").await;
    harness.save().await;

    assert_eq!(
        harness.slot().as_deref(),
        Some(
            r#"[{"word":"cat","noun":["A small domesticated feline."],"verb":["To hoist an anchor."]}]"#
        )
    );
    assert_eq!(
        harness.state.screen.personal(),
        "cat\n  noun:\n    A small domesticated feline.\n  verb:\n    To hoist an anchor."
    );
    assert!(
        harness
            .output()
            .contains("\"cat\" has been added to your vocabulary!")
    );
}

#[tokio::test]
async fn test_duplicate_save_keeps_slot_identical() {
    let mut harness = Harness::new(FakeLookup::answering(Ok(cat_result())));

    harness.search("cat").await;
    harness.save().await;
    let before = harness.slot();

    harness.save().await;

    assert_eq!(harness.slot(), before);
    assert!(
        harness
            .output()
            .contains("\"cat\" is already in your vocabulary!")
    );
}

#[tokio::test]
async fn test_save_without_result_notifies() {
    let mut harness = Harness::new(FakeLookup::default());

    harness.save().await;

    assert!(harness.output().contains(NOTHING_TO_SAVE));
    assert_eq!(harness.slot(), None);
}

#[tokio::test]
async fn test_corrupt_slot_shows_fallback() {
    let mut harness = Harness::new(FakeLookup::default());
    harness.memory.set_item(KEY, "this is not json").unwrap();

    harness.console.start().await.unwrap();
    harness.settle().await;

    assert_eq!(harness.state.screen.personal(), PERSONAL_FALLBACK);
    assert_eq!(harness.slot().as_deref(), Some("this is not json"));
}

#[tokio::test]
async fn test_save_over_corrupt_slot_reports_and_keeps_data() {
    let mut harness = Harness::new(FakeLookup::answering(Ok(cat_result())));
    harness.search("cat").await;
    harness.memory.set_item(KEY, "{broken").unwrap();

    harness.save().await;

    assert!(harness.output().contains("Could not save \"cat\""));
    assert_eq!(harness.state.screen.personal(), PERSONAL_FALLBACK);
    assert_eq!(harness.slot().as_deref(), Some("{broken"));
}
