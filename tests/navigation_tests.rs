//! Page navigation tests
//!
//! Tests for the navigation state machine: exactly one active page,
//! unknown-id handling, and the dashboard entry actions (boot sequence
//! plus timer re-arming). Timed behavior runs under tokio's paused
//! virtual clock.

use clawdeck::sim::feed::{BLOCK_BASELINE, BOOT_SEQUENCE};
use clawdeck::sim::{Engine, Page, PanelId};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn test_navigate_to_activates_exactly_the_target() {
    let engine = Engine::new();
    assert_eq!(engine.session().active_page, Page::Landing);

    for page in Page::ALL {
        engine.navigate_to(page.id());
        assert_eq!(engine.session().active_page, page);
    }
}

#[tokio::test]
async fn test_navigate_to_unknown_id_keeps_current_page() {
    let engine = Engine::new();
    engine.navigate_to(Page::Setup.id());

    engine.navigate_to("treasury");

    let session = engine.session();
    assert_eq!(session.active_page, Page::Setup);
    assert_eq!(session.last_diagnostic(), Some("page not found: treasury"));
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_entry_plays_boot_sequence_in_order() {
    let engine = Engine::new();
    engine.navigate_to(Page::Dashboard.id());

    // The last boot entry starts at +1600ms and its reveal is done well
    // before the first live-feed emission at +7500ms.
    sleep(Duration::from_millis(2500)).await;

    let session = engine.session();
    let entries = session.panel(PanelId::MainTerminal).entries();
    assert_eq!(entries.len(), BOOT_SEQUENCE.len());
    for (entry, scripted) in entries.iter().zip(BOOT_SEQUENCE.iter()) {
        assert_eq!(entry.text, scripted.text);
        assert_eq!(entry.category, scripted.category);
        assert_eq!(entry.icon, scripted.icon);
    }
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_entry_arms_block_ticker_after_delay() {
    let engine = Engine::new();
    engine.navigate_to(Page::Dashboard.id());

    // Before the +500ms arming delay the ticker has never run
    sleep(Duration::from_millis(400)).await;
    assert_eq!(engine.session().block_height, None);

    // Armed, baseline shown, first increment only at +2500ms
    sleep(Duration::from_millis(200)).await;
    assert_eq!(engine.session().block_height, Some(BLOCK_BASELINE));

    sleep(Duration::from_millis(2000)).await;
    let height = engine.session().block_height.expect("ticker running");
    let step = height - BLOCK_BASELINE;
    assert!((1..=3).contains(&step), "unexpected increment: {step}");
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_entry_arms_live_feed_after_delay() {
    let engine = Engine::new();
    engine.navigate_to(Page::Dashboard.id());

    // Feed armed at +3000ms, first emission one period later at +7500ms
    sleep(Duration::from_millis(7400)).await;
    assert_eq!(
        engine.session().panel(PanelId::MainTerminal).len(),
        BOOT_SEQUENCE.len()
    );

    sleep(Duration::from_millis(200)).await;
    assert_eq!(
        engine.session().panel(PanelId::MainTerminal).len(),
        BOOT_SEQUENCE.len() + 1
    );
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_reentry_clears_terminal_and_rearms_timers() {
    let engine = Engine::new();
    engine.navigate_to(Page::Dashboard.id());

    // First visit: boot logs done, feed armed (at +3000ms) but not yet
    // ticked, ticker counting
    sleep(Duration::from_millis(4000)).await;
    assert_eq!(
        engine.session().panel(PanelId::MainTerminal).len(),
        BOOT_SEQUENCE.len()
    );

    engine.navigate_to(Page::Landing.id());
    engine.navigate_to(Page::Dashboard.id());

    // Re-entry cleared the panel and replays the boot sequence
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(
        engine.session().panel(PanelId::MainTerminal).len(),
        BOOT_SEQUENCE.len()
    );

    // The first visit's feed would have ticked at +7500ms from the first
    // entry. It was cancelled by the re-arm, so nothing lands then...
    sleep(Duration::from_millis(2600)).await; // now at +9100ms overall
    assert_eq!(
        engine.session().panel(PanelId::MainTerminal).len(),
        BOOT_SEQUENCE.len()
    );

    // ...and exactly one entry lands at the re-armed feed's first tick,
    // +7500ms after the second entry (+11500ms overall)
    sleep(Duration::from_millis(2600)).await; // now at +11700ms overall
    assert_eq!(
        engine.session().panel(PanelId::MainTerminal).len(),
        BOOT_SEQUENCE.len() + 1
    );
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_reentry_resets_block_height_to_baseline() {
    let engine = Engine::new();
    engine.navigate_to(Page::Dashboard.id());

    // Let the ticker advance a few times
    sleep(Duration::from_millis(7000)).await;
    let advanced = engine.session().block_height.expect("ticker running");
    assert!(advanced > BLOCK_BASELINE);

    engine.navigate_to(Page::Landing.id());
    engine.navigate_to(Page::Dashboard.id());

    sleep(Duration::from_millis(600)).await;
    assert_eq!(engine.session().block_height, Some(BLOCK_BASELINE));
}
