//! Scheduler and renderer tests
//!
//! Virtual-time tests for the typewriter renderer, the live feed
//! scheduler (visibility gate, singleton timer), and the block height
//! ticker (no visibility gate, baseline reset).

use clawdeck::sim::feed::{BLOCK_BASELINE, FEED_CATALOG};
use clawdeck::sim::{Engine, LogCategory, Page, PanelId};
use std::time::Duration;
use tokio::time::{sleep, Instant};

#[tokio::test(start_paused = true)]
async fn test_typewriter_reveals_one_char_per_tick() {
    let engine = Engine::new();

    let start = Instant::now();
    engine
        .append_log("main-terminal", "TEST", LogCategory::Scan, "🔍")
        .await;

    // Four characters at 15ms each
    assert_eq!(start.elapsed(), Duration::from_millis(60));

    let session = engine.session();
    let entries = session.panel(PanelId::MainTerminal).entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "TEST");
    assert_eq!(entries[0].category, LogCategory::Scan);
    assert_eq!(entries[0].icon, "🔍");
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_reveal_is_gradual() {
    let engine = Engine::new();

    let writer = engine.clone();
    tokio::spawn(async move {
        writer
            .append_log("main-terminal", "TEST", LogCategory::Scan, "🔍")
            .await;
    });

    sleep(Duration::from_millis(1)).await;
    assert_eq!(engine.session().panel(PanelId::MainTerminal).entries()[0].text, "T");

    sleep(Duration::from_millis(30)).await;
    assert_eq!(
        engine.session().panel(PanelId::MainTerminal).entries()[0].text,
        "TES"
    );

    sleep(Duration::from_millis(30)).await;
    assert_eq!(
        engine.session().panel(PanelId::MainTerminal).entries()[0].text,
        "TEST"
    );
}

#[tokio::test(start_paused = true)]
async fn test_sequential_appends_keep_arrival_order() {
    let engine = Engine::new();

    engine
        .append_log("main-terminal", "first", LogCategory::Scan, "📡")
        .await;
    engine
        .append_log("main-terminal", "second", LogCategory::Trade, "💰")
        .await;

    let session = engine.session();
    let entries = session.panel(PanelId::MainTerminal).entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "first");
    assert_eq!(entries[1].text, "second");
}

#[tokio::test(start_paused = true)]
async fn test_feed_skips_ticks_while_dashboard_inactive() {
    let engine = Engine::new();
    engine.start_live_feed();

    // Landing is active: ticks fire but emit nothing, and nothing is queued
    sleep(Duration::from_secs(20)).await;
    assert!(engine.session().panel(PanelId::MainTerminal).is_empty());

    engine.session().active_page = Page::Dashboard;

    // Next tick emits exactly one catalog entry
    sleep(Duration::from_millis(4600)).await;
    assert_eq!(engine.session().panel(PanelId::MainTerminal).len(), 1);

    sleep(Duration::from_millis(4500)).await;
    assert_eq!(engine.session().panel(PanelId::MainTerminal).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_feed_entries_come_from_the_catalog() {
    let engine = Engine::new();
    engine.session().active_page = Page::Dashboard;
    engine.start_live_feed();

    // Long enough for several emissions with every reveal finished
    sleep(Duration::from_secs(30)).await;

    let session = engine.session();
    let entries = session.panel(PanelId::MainTerminal).entries();
    assert!(entries.len() >= 5);
    for entry in entries {
        assert!(
            FEED_CATALOG
                .iter()
                .any(|t| t.text.starts_with(entry.text.as_str())),
            "entry not from catalog: {}",
            entry.text
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_starting_feed_twice_leaves_one_timer() {
    let engine = Engine::new();
    engine.session().active_page = Page::Dashboard;

    engine.start_live_feed();
    engine.start_live_feed();

    // One emission per period, not two
    sleep(Duration::from_millis(4600)).await;
    assert_eq!(engine.session().panel(PanelId::MainTerminal).len(), 1);

    sleep(Duration::from_millis(4500)).await;
    assert_eq!(engine.session().panel(PanelId::MainTerminal).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_stop_live_feed_disarms_timer() {
    let engine = Engine::new();
    engine.session().active_page = Page::Dashboard;

    engine.start_live_feed();
    engine.stop_live_feed();

    sleep(Duration::from_secs(20)).await;
    assert!(engine.session().panel(PanelId::MainTerminal).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_block_ticker_ticks_regardless_of_page() {
    let engine = Engine::new();
    assert_eq!(engine.session().active_page, Page::Landing);

    engine.start_block_ticker();
    assert_eq!(engine.session().block_height, Some(BLOCK_BASELINE));

    // Stay off the exact tick instants so every checkpoint lands after
    // the increment it observes
    sleep(Duration::from_millis(100)).await;

    let mut previous = BLOCK_BASELINE;
    for _ in 0..5 {
        sleep(Duration::from_millis(2000)).await;
        let height = engine.session().block_height.expect("ticker running");
        let step = height - previous;
        assert!((1..=3).contains(&step), "unexpected increment: {step}");
        previous = height;
    }
}

#[tokio::test(start_paused = true)]
async fn test_block_ticker_restart_resets_to_baseline() {
    let engine = Engine::new();
    engine.start_block_ticker();

    sleep(Duration::from_millis(6100)).await;
    let advanced = engine.session().block_height.expect("ticker running");
    assert!(advanced > BLOCK_BASELINE);

    engine.start_block_ticker();
    assert_eq!(engine.session().block_height, Some(BLOCK_BASELINE));

    sleep(Duration::from_millis(2100)).await;
    let height = engine.session().block_height.expect("ticker running");
    assert!((1..=3).contains(&(height - BLOCK_BASELINE)));
}

#[tokio::test(start_paused = true)]
async fn test_stop_block_ticker_freezes_height() {
    let engine = Engine::new();
    engine.start_block_ticker();

    sleep(Duration::from_millis(4100)).await;
    let frozen = engine.session().block_height.expect("ticker running");

    engine.stop_block_ticker();
    sleep(Duration::from_secs(20)).await;
    assert_eq!(engine.session().block_height, Some(frozen));
}
