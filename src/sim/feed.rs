//! # Live Feed Data
//!
//! The authored message catalog for the dashboard's randomized activity
//! feed, the fixed boot sequence played on every dashboard entry, and the
//! cadence constants shared by the schedulers.

use crate::sim::log::LogCategory;
use std::time::Duration;

/// Period of the live feed scheduler.
pub const FEED_PERIOD: Duration = Duration::from_millis(4500);

/// Period of the block height ticker.
pub const BLOCK_PERIOD: Duration = Duration::from_millis(2000);

/// Synthetic chain height every ticker start counts up from.
pub const BLOCK_BASELINE: u64 = 319_284_102;

/// Delay after dashboard entry before the block ticker is armed.
pub const BLOCK_TICKER_START_DELAY: Duration = Duration::from_millis(500);

/// Delay after dashboard entry before the live feed is armed.
pub const FEED_START_DELAY: Duration = Duration::from_millis(3000);

/// One template in the random-feed catalog.
#[derive(Debug, Clone, Copy)]
pub struct LogTemplate {
    pub text: &'static str,
    pub category: LogCategory,
    pub icon: &'static str,
}

/// One scripted boot entry, with its delay from dashboard entry.
#[derive(Debug, Clone, Copy)]
pub struct BootEntry {
    pub delay: Duration,
    pub text: &'static str,
    pub category: LogCategory,
    pub icon: &'static str,
}

/// Fixed three-entry sequence typed into the main terminal whenever the
/// dashboard page is entered.
pub const BOOT_SEQUENCE: [BootEntry; 3] = [
    BootEntry {
        delay: Duration::from_millis(0),
        text: "RPC_GATEWAY_UP: Latency 14ms [127.0.0.1:4242]",
        category: LogCategory::Scan,
        icon: "📡",
    },
    BootEntry {
        delay: Duration::from_millis(800),
        text: "SIG_VERIFY: Ed25519 Handshake complete. Engine v2.0.4 [OPTIMIZED]",
        category: LogCategory::Learn,
        icon: "⚙️",
    },
    BootEntry {
        delay: Duration::from_millis(1600),
        text: "MEMPOOL_LISTENER: Hooked pump.fun migration gateway.",
        category: LogCategory::Scan,
        icon: "🔍",
    },
];

/// Catalog the live feed samples from, uniformly with replacement.
pub const FEED_CATALOG: [LogTemplate; 12] = [
    LogTemplate {
        text: "Sold 0.0809 $STRUMP for 0.1420 SOL (+0.0310 SOL, 2.94x)",
        category: LogCategory::Trade,
        icon: "💰",
    },
    LogTemplate {
        text: "Bought 0.0412 $STRUMP for 0.0500 SOL (+0.0000 SOL, 1.00x)",
        category: LogCategory::Trade,
        icon: "💎",
    },
    LogTemplate {
        text: "Sold 0.0550 $STRUMP for 0.1210 SOL (+0.0660 SOL, 2.20x)",
        category: LogCategory::Trade,
        icon: "💰",
    },
    LogTemplate {
        text: "Sold 0.0733 $STRUMP for 0.1832 SOL (+0.1099 SOL, 2.50x)",
        category: LogCategory::Trade,
        icon: "💰",
    },
    LogTemplate {
        text: "Bought 0.0977 $CLAW for 0.1200 SOL (+0.0000 SOL, 3.21x)",
        category: LogCategory::Trade,
        icon: "🦞",
    },
    LogTemplate {
        text: "JITO_TIP_OPTIMIZED: 0.001 SOL (Block: 319284)",
        category: LogCategory::Learn,
        icon: "⚡",
    },
    LogTemplate {
        text: "MEMPOOL_EVENT: New bond curve created [$PEPE2.0]",
        category: LogCategory::Scan,
        icon: "📡",
    },
    LogTemplate {
        text: "SLIPPAGE_ENFORCED: Boundary 0.8% [VOLATILITY_PROTECT]",
        category: LogCategory::Learn,
        icon: "🛡️",
    },
    LogTemplate {
        text: "RPC_LATENCY_SPIKE: Switching to fallback provider [QuikNode]",
        category: LogCategory::Block,
        icon: "⚠️",
    },
    LogTemplate {
        text: "BONDING_CURVE_UPDATE: $MEOW at 84% [PRE-MIGRATION]",
        category: LogCategory::Scan,
        icon: "📈",
    },
    LogTemplate {
        text: "PRIORITY_FEE_ADJUSTED: 4200 lamports/CU [CONGESTION_MODE]",
        category: LogCategory::Learn,
        icon: "⛽",
    },
    LogTemplate {
        text: "SECURITY_SWEEP: No rug signatures detected in $CHILL",
        category: LogCategory::Learn,
        icon: "🧼",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_texts_are_distinct() {
        let mut texts: Vec<&str> = FEED_CATALOG.iter().map(|t| t.text).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), FEED_CATALOG.len());
    }

    #[test]
    fn test_boot_sequence_delays_are_staggered() {
        assert!(BOOT_SEQUENCE.windows(2).all(|w| w[0].delay < w[1].delay));
    }
}
