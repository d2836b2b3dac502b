//! # Simulation Engine
//!
//! The view-state and timed-animation engine. One [`Engine`] owns the
//! shared [`Session`] and exposes every operation the key-driven triggers
//! invoke: page navigation (with the dashboard entry actions), the
//! suspending typewriter renderer, the scripted demo sequencer, the two
//! recurring schedulers, the deployment flow, and the collaborator-backed
//! wallet/clipboard actions.
//!
//! ## Concurrency
//!
//! Everything runs on the tokio runtime as cooperative tasks over one
//! mutex-guarded session. Guards are never held across an await: the
//! typewriter locks once per revealed character, so concurrent writers to
//! the same panel interleave per character but each mutates only its own
//! entry. Recurring timers are singletons in the session; re-arming drops
//! (and thereby aborts) the previous handle. In-flight one-shot delays
//! (demo steps, deployment waits, boot logs) are not cancellable and run
//! to completion even if the user navigates away.

use crate::sim::demo::DemoScenario;
use crate::sim::deploy;
use crate::sim::feed::{
    BLOCK_BASELINE, BLOCK_PERIOD, BLOCK_TICKER_START_DELAY, BOOT_SEQUENCE, FEED_CATALOG,
    FEED_PERIOD, FEED_START_DELAY,
};
use crate::sim::log::{LogCategory, PanelId, REVEAL_DELAY};
use crate::sim::page::Page;
use crate::sim::session::{AgentMode, ButtonState, Network, Session};
use crate::sim::timer::TimerHandle;
use crate::sim::wallet::{Clipboard, WalletAdapter};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::{interval, sleep};

/// The token contract address offered by the copy affordance.
pub const CONTRACT_ADDRESS: &str = "824s8Mv422yeC1jukfjKYCYe2eFvYTQEY2C47wFRpump";

/// How long the "COPIED!" affordance shows before reverting.
const COPY_AFFORDANCE_DURATION: Duration = Duration::from_millis(2000);

/// How long the node-link simulation takes to report an established link.
const LINK_DELAY: Duration = Duration::from_millis(2000);

/// Pause on the handshake caption before the modal closes.
const HANDSHAKE_LINGER: Duration = Duration::from_millis(600);

/// The engine behind every UI trigger. Cheap to clone; clones share the
/// same session.
#[derive(Clone)]
pub struct Engine {
    session: Arc<Mutex<Session>>,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Lock the shared session. Recovers the data from a poisoned lock:
    /// nothing in the session is left half-written by a panicking holder
    /// that matters more than keeping the tour alive.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn diag(&self, message: String) {
        self.session().push_diagnostic(message);
    }

    // -- Page navigation ---------------------------------------------------

    /// Switch the active page. Unknown ids record a diagnostic and change
    /// nothing. Entering the dashboard (every time, not just the first)
    /// clears the main terminal, plays the boot sequence, and re-arms the
    /// block ticker and live feed.
    pub fn navigate_to(&self, page_id: &str) {
        let Some(page) = Page::from_id(page_id) else {
            self.diag(format!("page not found: {page_id}"));
            return;
        };
        self.session().active_page = page;
        if page == Page::Dashboard {
            self.enter_dashboard();
        }
    }

    /// One-shot dashboard entry actions: boot logs at their authored
    /// offsets, block ticker after 500 ms, live feed after 3 s.
    fn enter_dashboard(&self) {
        self.session().panel_mut(PanelId::MainTerminal).clear();

        for entry in BOOT_SEQUENCE {
            let engine = self.clone();
            tokio::spawn(async move {
                sleep(entry.delay).await;
                engine
                    .append_log_to(PanelId::MainTerminal, entry.text, entry.category, entry.icon)
                    .await;
            });
        }

        let engine = self.clone();
        tokio::spawn(async move {
            sleep(BLOCK_TICKER_START_DELAY).await;
            engine.start_block_ticker();
        });

        let engine = self.clone();
        tokio::spawn(async move {
            sleep(FEED_START_DELAY).await;
            engine.start_live_feed();
        });
    }

    // -- Typewriter log renderer -------------------------------------------

    /// Append a log entry to the panel with the given id, revealing its
    /// text one character per 15 ms. Suspends until fully revealed.
    /// Unknown panel ids record a diagnostic and do nothing.
    pub async fn append_log(&self, panel_id: &str, text: &str, category: LogCategory, icon: &str) {
        let Some(panel) = PanelId::from_id(panel_id) else {
            self.diag(format!("log panel not found: {panel_id}"));
            return;
        };
        self.append_log_to(panel, text, category, icon).await;
    }

    /// As [`Engine::append_log`], for an already-resolved panel.
    pub async fn append_log_to(
        &self,
        panel: PanelId,
        text: &str,
        category: LogCategory,
        icon: &str,
    ) {
        let entry = self.session().panel_mut(panel).begin_entry(category, icon);
        for ch in text.chars() {
            self.session().panel_mut(panel).push_char(entry, ch);
            sleep(REVEAL_DELAY).await;
        }
    }

    // -- Scripted demo sequencer -------------------------------------------

    /// Play a demo scenario into its panel: clear it, then run each
    /// authored step in order, awaiting every reveal before the next
    /// delay starts. A second invocation while one is in flight is not
    /// guarded against and interleaves on the same panel.
    pub async fn run_demo(&self, scenario: DemoScenario) {
        let panel = scenario.panel();
        self.session().panel_mut(panel).clear();

        for step in scenario.script() {
            if step.delay_before_ms > 0 {
                sleep(Duration::from_millis(step.delay_before_ms)).await;
            }
            if let Some(agent) = step.activates_agent {
                let mut session = self.session();
                if let Some(indicator) = session.agents.get_mut(agent) {
                    *indicator = true;
                }
            }
            self.append_log_to(panel, step.text, step.category, step.icon)
                .await;
        }
    }

    // -- Live feed scheduler -----------------------------------------------

    /// Arm the 4.5 s live feed, cancelling any prior instance. Each tick
    /// emits one uniformly random catalog entry into the main terminal,
    /// but only while the dashboard page is active; off-dashboard ticks
    /// are skipped entirely.
    pub fn start_live_feed(&self) {
        let engine = self.clone();
        let handle = TimerHandle::spawn(async move {
            let mut ticker = interval(FEED_PERIOD);
            // consume the immediate first tick; emission starts one full
            // period after arming
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let visible = engine.session().active_page == Page::Dashboard;
                if !visible {
                    continue;
                }
                let template = {
                    let mut rng = rand::thread_rng();
                    FEED_CATALOG.choose(&mut rng).copied()
                };
                if let Some(template) = template {
                    let writer = engine.clone();
                    // fire and forget so the reveal never delays the next tick
                    tokio::spawn(async move {
                        writer
                            .append_log_to(
                                PanelId::MainTerminal,
                                template.text,
                                template.category,
                                template.icon,
                            )
                            .await;
                    });
                }
            }
        });
        self.session().feed = Some(handle);
    }

    pub fn stop_live_feed(&self) {
        self.session().feed.take();
    }

    // -- Block height ticker -----------------------------------------------

    /// Arm the 2 s block ticker, cancelling any prior instance and
    /// resetting the height to the baseline. Runs regardless of which
    /// page is active.
    pub fn start_block_ticker(&self) {
        self.session().block_height = Some(BLOCK_BASELINE);
        let engine = self.clone();
        let handle = TimerHandle::spawn(async move {
            let mut ticker = interval(BLOCK_PERIOD);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let step = rand::thread_rng().gen_range(1..=3u64);
                let mut session = engine.session();
                if let Some(height) = session.block_height.as_mut() {
                    *height += step;
                }
            }
        });
        self.session().blocks = Some(handle);
    }

    pub fn stop_block_ticker(&self) {
        self.session().blocks.take();
    }

    // -- Deployment flow ---------------------------------------------------

    /// Walk the deployment checklist: one step completes every 800 ms,
    /// then the completion caption shows for 2 s (after a 1 s settle)
    /// before the tour lands on the dashboard and the checklist resets.
    /// Strictly sequential; re-entrant invocation is not guarded.
    pub async fn run_deployment(&self) {
        self.session().deploy_button = ButtonState::busy("Initializing Orchestrator...");

        let step_count = self.session().steps.len();
        for index in 0..step_count {
            sleep(deploy::STEP_CADENCE).await;
            let mut session = self.session();
            if let Some(step) = session.steps.get_mut(index) {
                step.completed = true;
            }
        }

        sleep(deploy::COMPLETION_DELAY).await;
        self.session().deploy_button = ButtonState::success("System Online 🦞");

        sleep(deploy::HANDOFF_DELAY).await;
        self.navigate_to(Page::Dashboard.id());
        let mut session = self.session();
        for step in &mut session.steps {
            step.completed = false;
        }
        session.deploy_button = ButtonState::new("Deploy & Activate 🦞");
    }

    // -- Node link simulation ----------------------------------------------

    /// Simulate linking to a local node from the connect page: busy for
    /// 2 s, then the link reads established, the agent status card shows,
    /// and the continue control unlocks.
    pub async fn simulate_connect(&self) {
        self.session().link_button = ButtonState::busy("Connecting to Local Node...");
        sleep(LINK_DELAY).await;
        let mut session = self.session();
        session.link_button = ButtonState::success("Link Established");
        session.status_card_visible = true;
        session.continue_enabled = true;
    }

    // -- Wallet ------------------------------------------------------------

    pub fn open_wallet_modal(&self) {
        self.session().wallet_modal_open = true;
    }

    pub fn close_wallet_modal(&self) {
        self.session().wallet_modal_open = false;
    }

    /// Run the wallet handshake through the adapter. On approval the
    /// address is kept for the session and the tour moves to the connect
    /// page; on rejection the modal button is restored and a diagnostic
    /// recorded. The error never propagates further.
    pub async fn connect_wallet(&self, adapter: &dyn WalletAdapter) {
        let original = self.session().wallet_button.clone();
        self.session().wallet_button = ButtonState::busy("Initializing Real Adapter");

        match adapter.connect().await {
            Ok(public_key) => {
                {
                    let mut session = self.session();
                    session.wallet = Some(public_key);
                    session.wallet_button = ButtonState::success("✓ Handshake Complete");
                }
                sleep(HANDSHAKE_LINGER).await;
                {
                    let mut session = self.session();
                    session.wallet_modal_open = false;
                    session.wallet_button = original;
                }
                self.navigate_to(Page::Connect.id());
            }
            Err(err) => {
                self.diag(format!("wallet adapter connection failed: {err}"));
                self.session().wallet_button = original;
            }
        }
    }

    // -- Setup page --------------------------------------------------------

    pub fn set_network(&self, network: Network) {
        let mut session = self.session();
        session.network = network;
        session.test_sol_visible = network == Network::Devnet;
    }

    pub fn select_mode(&self, mode: AgentMode) {
        self.session().selected_mode = Some(mode);
    }

    // -- Contract address --------------------------------------------------

    /// Copy the contract address through the clipboard collaborator. On
    /// success the affordance reads "COPIED!" for 2 s before reverting;
    /// on failure only a diagnostic is recorded.
    pub async fn copy_contract_address(&self, clipboard: &dyn Clipboard) {
        match clipboard.write_text(CONTRACT_ADDRESS).await {
            Ok(()) => {
                {
                    let mut session = self.session();
                    session.ca_copied = true;
                    session.ca_label = "COPIED!".to_string();
                }
                let engine = self.clone();
                tokio::spawn(async move {
                    sleep(COPY_AFFORDANCE_DURATION).await;
                    let mut session = engine.session();
                    session.ca_copied = false;
                    session.ca_label = "CA:".to_string();
                });
            }
            Err(err) => {
                self.diag(format!("failed to copy contract address: {err}"));
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_navigate_to_unknown_page_is_noop_with_diagnostic() {
        let engine = Engine::new();
        engine.navigate_to("settings");
        let session = engine.session();
        assert_eq!(session.active_page, Page::Landing);
        assert_eq!(session.last_diagnostic(), Some("page not found: settings"));
    }

    #[tokio::test]
    async fn test_navigate_to_each_registered_page() {
        let engine = Engine::new();
        for page in [Page::Connect, Page::Setup, Page::Deploy, Page::Landing] {
            engine.navigate_to(page.id());
            assert_eq!(engine.session().active_page, page);
        }
    }

    #[tokio::test]
    async fn test_append_log_unknown_panel_is_noop() {
        let engine = Engine::new();
        engine
            .append_log("side-terminal", "TEST", LogCategory::Scan, "🔍")
            .await;
        let session = engine.session();
        for panel in [
            PanelId::MainTerminal,
            PanelId::SnipeLogs,
            PanelId::FarmLogs,
            PanelId::SwarmLogs,
        ] {
            assert!(session.panel(panel).is_empty());
        }
        assert_eq!(
            session.last_diagnostic(),
            Some("log panel not found: side-terminal")
        );
    }

    #[tokio::test]
    async fn test_set_network_toggles_test_sol() {
        let engine = Engine::new();
        engine.set_network(Network::Mainnet);
        assert!(!engine.session().test_sol_visible);
        engine.set_network(Network::Devnet);
        assert!(engine.session().test_sol_visible);
    }

    #[tokio::test]
    async fn test_wallet_modal_toggle() {
        let engine = Engine::new();
        engine.open_wallet_modal();
        assert!(engine.session().wallet_modal_open);
        engine.close_wallet_modal();
        assert!(!engine.session().wallet_modal_open);
    }

    #[tokio::test]
    async fn test_select_mode_is_exclusive() {
        let engine = Engine::new();
        engine.select_mode(AgentMode::Sniper);
        engine.select_mode(AgentMode::Swarm);
        assert_eq!(engine.session().selected_mode, Some(AgentMode::Swarm));
    }
}
