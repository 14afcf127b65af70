use std::sync::Arc;
use std::time::Duration;

use services::{AppServices, Clock, StudyLibrary, TokioTimeSource};
use study_core::time::fixed_now;
use study_core::{DeckNavigator, TimeSource, TimerPhase};

fn services(source: &TokioTimeSource, secs: u32) -> AppServices {
    let clock = Clock::fixed(fixed_now());
    AppServices::new(clock, StudyLibrary::builtin(clock), Arc::new(source.clone()))
        .with_timer_duration(secs)
}

#[tokio::test(start_paused = true)]
async fn timer_counts_down_on_tokio_ticks() {
    let source = TokioTimeSource::current();
    let timer = services(&source, 3).new_timer();
    let mut updates = timer.watch();

    assert!(timer.start());
    assert_eq!(source.active_subscriptions(), 1);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(timer.snapshot().display, "00:02");

    while updates.borrow_and_update().phase != TimerPhase::Expired {
        updates.changed().await.unwrap();
    }
    let snapshot = timer.snapshot();
    assert_eq!(snapshot.remaining_seconds, 0);
    assert!(!snapshot.running);

    // The finished task deregisters itself.
    tokio::task::yield_now().await;
    assert_eq!(source.active_subscriptions(), 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_timer_cancels_its_ticks() {
    let source = TokioTimeSource::current();
    let timer = services(&source, 60).new_timer();
    timer.start();
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(timer.snapshot().remaining_seconds, 58);

    drop(timer);
    assert_eq!(source.active_subscriptions(), 0);
}

#[tokio::test(start_paused = true)]
async fn pause_then_start_keeps_a_single_subscription() {
    let source = TokioTimeSource::current();
    let timer = services(&source, 60).new_timer();

    timer.start();
    timer.start();
    assert_eq!(source.active_subscriptions(), 1);
    timer.pause();
    assert_eq!(source.active_subscriptions(), 0);
    timer.start();
    assert_eq!(source.active_subscriptions(), 1);

    tokio::time::sleep(Duration::from_millis(4500)).await;
    assert_eq!(timer.snapshot().remaining_seconds, 56);
}

#[test]
fn builtin_library_feeds_the_navigator() {
    let library = StudyLibrary::builtin(Clock::fixed(fixed_now()));
    let mut nav = DeckNavigator::new(library.deck().clone());
    nav.previous();
    assert_eq!(nav.current_card().question(), "What year did World War II end?");
    nav.reveal();
    nav.next();
    assert!(!nav.is_revealed());
    assert_eq!(nav.current_card().subject(), "Mathematics");
}
