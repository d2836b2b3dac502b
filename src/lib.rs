//! Clawdeck - a neon terminal dashboard simulating a trading-agent tour
//!
//! This library provides the core functionality for the simulated product
//! tour: page navigation, the typewriter log renderer, scripted demo
//! playback, the randomized live feed, and the deployment step sequencer.

pub mod sim;
pub mod ui;
