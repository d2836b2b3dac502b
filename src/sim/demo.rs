//! # Scripted Demo Scenarios
//!
//! Hand-authored playback scripts for the three landing-page demos. Each
//! step carries the delay to wait before it runs; the swarm script also
//! lights the agent indicators at fixed points in the sequence.

use crate::sim::log::{LogCategory, PanelId};

/// One of the three authored demo scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoScenario {
    Snipe,
    Farm,
    Swarm,
}

/// One step of a demo script.
#[derive(Debug, Clone, Copy)]
pub struct DemoStep {
    /// Wait this long before the step runs.
    pub delay_before_ms: u64,
    pub text: &'static str,
    pub category: LogCategory,
    pub icon: &'static str,
    /// Swarm only: light this agent indicator (0-based) before typing.
    pub activates_agent: Option<usize>,
}

const fn step(
    delay_before_ms: u64,
    text: &'static str,
    category: LogCategory,
    icon: &'static str,
) -> DemoStep {
    DemoStep {
        delay_before_ms,
        text,
        category,
        icon,
        activates_agent: None,
    }
}

const SNIPE_SCRIPT: [DemoStep; 5] = [
    step(0, "Booting sniping engine...", LogCategory::Scan, "⚙️"),
    step(
        800,
        "Watching pump.fun bonding curve migrations...",
        LogCategory::Scan,
        "📡",
    ),
    step(1500, "MIGRATION DETECTED: $LOBSTER", LogCategory::Trade, "🎯"),
    step(
        600,
        "Bought $LOBSTER for 0.5 SOL (slippage < 0.5%)",
        LogCategory::Trade,
        "🚀",
    ),
    step(
        1000,
        "Transaction Broadcast: Signature: 5WjM...v2e",
        LogCategory::Learn,
        "📑",
    ),
];

const FARM_SCRIPT: [DemoStep; 5] = [
    step(0, "Yield monitoring active...", LogCategory::Scan, "🌱"),
    step(
        1000,
        "Scanning SOL/USDC pools for volatility spikes...",
        LogCategory::Scan,
        "📊",
    ),
    step(
        1500,
        "PRICE DROP: SOL/USDC current price $98.40 (-4.2%)",
        LogCategory::Block,
        "⚠️",
    ),
    step(
        1000,
        "Rebalancing: Swapping 10 SOL for USDC...",
        LogCategory::Trade,
        "🔄",
    ),
    step(
        0,
        "Liquidity Provision Active: Projected 42% APY",
        LogCategory::Trade,
        "🌾",
    ),
];

const SWARM_SCRIPT: [DemoStep; 5] = [
    DemoStep {
        delay_before_ms: 0,
        text: "Initializing multi-dex monitor...",
        category: LogCategory::Scan,
        icon: "🐝",
        activates_agent: Some(0),
    },
    step(
        0,
        "Monitor 1: Arbitrage gap detected on Raydium (1.2%)",
        LogCategory::Scan,
        "📡",
    ),
    DemoStep {
        delay_before_ms: 1000,
        text: "Monitor 2: Verifying pool depth & impact...",
        category: LogCategory::Learn,
        icon: "🧠",
        activates_agent: Some(1),
    },
    DemoStep {
        delay_before_ms: 1000,
        text: "Monitor 3: Route optimization via Jupiter complete.",
        category: LogCategory::Learn,
        icon: "🛡️",
        activates_agent: Some(2),
    },
    step(
        1500,
        "EXECUTION: Triangular arbitrage complete. Gain: +0.12 SOL.",
        LogCategory::Trade,
        "💰",
    ),
];

impl DemoScenario {
    pub const ALL: [DemoScenario; 3] = [DemoScenario::Snipe, DemoScenario::Farm, DemoScenario::Swarm];

    /// The panel this scenario plays into.
    pub fn panel(self) -> PanelId {
        match self {
            DemoScenario::Snipe => PanelId::SnipeLogs,
            DemoScenario::Farm => PanelId::FarmLogs,
            DemoScenario::Swarm => PanelId::SwarmLogs,
        }
    }

    /// The authored step list for this scenario.
    pub fn script(self) -> &'static [DemoStep] {
        match self {
            DemoScenario::Snipe => &SNIPE_SCRIPT,
            DemoScenario::Farm => &FARM_SCRIPT,
            DemoScenario::Swarm => &SWARM_SCRIPT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DemoScenario::Snipe => "Sniper",
            DemoScenario::Farm => "Yield Farmer",
            DemoScenario::Swarm => "Swarm",
        }
    }
}
