//! # Deployment Step List
//!
//! The fixed checklist the orchestrator flow walks through, plus its
//! cadence constants.

use std::time::Duration;

/// Time between consecutive step completions.
pub const STEP_CADENCE: Duration = Duration::from_millis(800);

/// Pause after the last step before the completion caption shows.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(1000);

/// Pause in the completion state before navigating to the dashboard.
pub const HANDOFF_DELAY: Duration = Duration::from_millis(2000);

/// One entry in the deployment checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployStep {
    pub label: &'static str,
    pub completed: bool,
}

const STEP_LABELS: [&str; 4] = [
    "Compile strategy graph",
    "Provision RPC relays",
    "Sign agent keypair",
    "Arm mempool listeners",
];

/// The fresh (all-incomplete) step list.
pub fn step_list() -> Vec<DeployStep> {
    STEP_LABELS
        .iter()
        .copied()
        .map(|label| DeployStep {
            label,
            completed: false,
        })
        .collect()
}
