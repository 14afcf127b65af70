use dioxus::prelude::ReadableExt;
use study_core::TimeSource;
use study_core::model::StudyResourceDraft;

use super::StudyTab;
use super::study::StudyIntent;
use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_duration};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hero_and_actions() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    for expected in [
        "Study Sprint",
        "Ace Your Exams!",
        "Start Studying",
        "Add Resources",
        "Everything You Need to Excel",
        "3 flashcards ready",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn input_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Input);
    harness.rebuild();
    let html = harness.render();
    for expected in [
        "Add Study Resource",
        "Title *",
        "Computer Science",
        "Fill in the Blank",
        "Excellent",
        "Clear Form",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Missing Information"), "unexpected notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn input_view_empty_submit_shows_missing_information() {
    let mut harness = setup_view_harness(ViewKind::Input);
    harness.rebuild();
    harness.submit_form();
    let html = harness.render();
    assert!(html.contains("Missing Information"), "missing notice in {html}");
    assert!(
        html.contains("Please fill in at least Title, Subject, and Topic."),
        "missing description in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn input_view_valid_submit_confirms_and_clears() {
    let mut harness = setup_view_harness(ViewKind::Input);
    harness.rebuild();
    harness.fill_form(StudyResourceDraft {
        title: "Organic Chemistry Flash Review".into(),
        subject: "Chemistry".into(),
        topic: "Functional Groups".into(),
        rating: "4".into(),
        ..StudyResourceDraft::default()
    });
    harness.submit_form();

    let html = harness.render();
    assert!(html.contains("Resource Added Successfully!"), "missing notice in {html}");
    assert!(
        html.contains("Organic Chemistry Flash Review has been added to your study resources."),
        "missing description in {html}"
    );
    let form = harness.input().form();
    let cleared = harness.dom.in_runtime(|| form.read().clone());
    assert_eq!(cleared, StudyResourceDraft::default());
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_walks_the_deck() {
    let mut harness = setup_view_harness(ViewKind::Study(StudyTab::Flashcards));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Flashcard 1 of 3"), "missing position in {html}");
    assert!(html.contains("What is the quadratic formula?"), "missing question in {html}");
    assert!(html.contains("Show Answer"), "missing reveal in {html}");
    assert!(html.contains("Difficulty: Medium"), "missing difficulty in {html}");

    harness.dispatch_study(StudyIntent::Reveal);
    let html = harness.render();
    assert!(html.contains("Answer:"), "missing answer heading in {html}");
    assert!(html.contains("Next Card"), "missing next in {html}");
    assert!(harness.navigator_state().answer_revealed);

    harness.dispatch_study(StudyIntent::Next);
    let html = harness.render();
    assert!(html.contains("Flashcard 2 of 3"), "missing position in {html}");
    assert!(html.contains("Define photosynthesis"), "missing question in {html}");
    assert!(!harness.navigator_state().answer_revealed);

    harness.dispatch_study(StudyIntent::Previous);
    harness.dispatch_study(StudyIntent::Previous);
    let state = harness.navigator_state();
    assert_eq!(state.current_index, 2);
    let html = harness.render();
    assert!(html.contains("Flashcard 3 of 3"), "missing wrapped position in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_notes() {
    let mut harness = setup_view_harness(ViewKind::Study(StudyTab::Notes));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Chemical Bonding Summary"), "missing note in {html}");
    assert!(html.contains("Last modified: 2 hours ago"), "missing age in {html}");
    assert!(html.contains("Last modified: 1 day ago"), "missing age in {html}");
    assert!(html.contains("Create Your First Note"), "missing empty card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_timer_counts_down_on_ticks() {
    let mut harness = setup_view_harness(ViewKind::Study(StudyTab::Timer));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("25:00"), "missing display in {html}");
    assert!(html.contains("Focus Time"), "missing status in {html}");
    assert!(html.contains("Start"), "missing start in {html}");
    assert!(html.contains("25-minute focused study sessions"), "missing description in {html}");

    harness.dispatch_study(StudyIntent::ToggleTimer);
    assert_eq!(harness.time_source.active_subscriptions(), 1);
    let html = harness.render();
    assert!(html.contains("Pause"), "missing pause in {html}");

    harness.time_source.advance_secs(3);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("24:57"), "missing countdown in {html}");

    harness.dispatch_study(StudyIntent::ToggleTimer);
    harness.dispatch_study(StudyIntent::ToggleTimer);
    assert_eq!(harness.time_source.active_subscriptions(), 1);

    harness.dispatch_study(StudyIntent::ResetTimer);
    assert_eq!(harness.time_source.active_subscriptions(), 0);
    let html = harness.render();
    assert!(html.contains("25:00"), "missing reset display in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_timer_expires_into_break() {
    let mut harness = setup_view_harness_with_duration(ViewKind::Study(StudyTab::Timer), 3);
    harness.rebuild();
    harness.dispatch_study(StudyIntent::ToggleTimer);

    harness.time_source.advance_secs(5);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("00:00"), "missing zero in {html}");
    assert!(html.contains("Time for a break!"), "missing break status in {html}");
    assert_eq!(harness.time_source.active_subscriptions(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_timer_runs_while_browsing_cards() {
    let mut harness = setup_view_harness(ViewKind::Study(StudyTab::Flashcards));
    harness.rebuild();
    harness.dispatch_study(StudyIntent::Next);
    harness.dispatch_study(StudyIntent::ToggleTimer);

    harness.time_source.advance_secs(2);
    harness.drive_async().await;
    assert_eq!(harness.navigator_state().current_index, 1);
    assert_eq!(harness.time_source.active_subscriptions(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn dropping_study_view_releases_running_timer() {
    let mut harness = setup_view_harness(ViewKind::Study(StudyTab::Timer));
    harness.rebuild();
    harness.dispatch_study(StudyIntent::ToggleTimer);
    let time_source = harness.time_source.clone();
    assert_eq!(time_source.active_subscriptions(), 1);

    drop(harness);
    assert_eq!(time_source.active_subscriptions(), 0);
    time_source.advance_secs(2);
}
