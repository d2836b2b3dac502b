//! # Simulation Module
//!
//! This module provides the view-state and timed-animation engine behind
//! the dashboard: which page is shown, what every log panel contains, and
//! every timer that animates the tour.
//!
//! ## Components
//!
//! | Component | Where | Cadence |
//! |-----------|-------|---------|
//! | Page navigation | [`engine::Engine::navigate_to`] | on demand |
//! | Typewriter log renderer | [`engine::Engine::append_log`] | 15 ms/char |
//! | Scripted demo sequencer | [`engine::Engine::run_demo`] | per-step delays |
//! | Live feed scheduler | [`engine::Engine::start_live_feed`] | 4.5 s |
//! | Block height ticker | [`engine::Engine::start_block_ticker`] | 2 s |
//! | Deployment step sequencer | [`engine::Engine::run_deployment`] | 800 ms/step |
//!
//! All state lives in a single [`session::Session`] behind a mutex owned
//! by the cloneable [`engine::Engine`]; the TUI render pass reads the same
//! session each frame.

pub mod demo;
pub mod deploy;
pub mod engine;
pub mod feed;
pub mod log;
pub mod page;
pub mod session;
pub mod timer;
pub mod wallet;

pub use demo::{DemoScenario, DemoStep};
pub use deploy::DeployStep;
pub use engine::Engine;
pub use log::{LogCategory, LogEntry, LogPanel, PanelId};
pub use page::Page;
pub use session::{AgentMode, ButtonState, ButtonTone, Network, Session};
pub use timer::TimerHandle;
pub use wallet::{Clipboard, MemoryClipboard, SimulatedWallet, WalletAdapter};
