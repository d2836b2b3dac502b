//! # UI Module
//!
//! The terminal rendering layer. Each frame is a pure function of the
//! shared [`crate::sim::Session`] and the active [`theme::Theme`]; all
//! animation state lives in the simulation engine, never here.
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          Header (brand / block height)           │
//! ├─────────────────────────────────────────────────┤
//! │                                                  │
//! │      Active page body (landing, connect,         │
//! │      setup, orchestrator, dashboard)             │
//! │                                                  │
//! ├─────────────────────────────────────────────────┤
//! │        Footer (key help / last diagnostic)       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! The wallet modal overlays the active page when open.

pub mod config;
pub mod render;
pub mod theme;

pub use config::Config;
pub use render::render;
pub use theme::Theme;
