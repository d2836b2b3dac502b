//! # Session State
//!
//! All mutable state of the tour lives in one [`Session`] value: the
//! active page, the log panels, every button/affordance the timed flows
//! touch, the synthetic block height, and the recurring-timer handles.
//! The engine mutates it behind a mutex; the render pass reads it each
//! frame. Created at startup, torn down never.

use crate::sim::deploy::{self, DeployStep};
use crate::sim::log::{LogPanel, PanelId};
use crate::sim::page::Page;
use crate::sim::timer::TimerHandle;

/// Diagnostics kept for the footer status line.
const MAX_DIAGNOSTICS: usize = 32;

/// Target cluster selected on the setup page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Devnet,
    Mainnet,
}

impl Network {
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Devnet => "devnet",
            Network::Mainnet => "mainnet",
        }
    }

    pub fn from_id(id: &str) -> Option<Network> {
        match id {
            "devnet" => Some(Network::Devnet),
            "mainnet" => Some(Network::Mainnet),
            _ => None,
        }
    }
}

/// Operating mode card selected on the setup page. Cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentMode {
    Sniper,
    YieldFarmer,
    Swarm,
}

impl AgentMode {
    pub const ALL: [AgentMode; 3] = [AgentMode::Sniper, AgentMode::YieldFarmer, AgentMode::Swarm];

    pub fn label(self) -> &'static str {
        match self {
            AgentMode::Sniper => "Sniper",
            AgentMode::YieldFarmer => "Yield Farmer",
            AgentMode::Swarm => "Swarm",
        }
    }
}

/// Visual tone of a trigger control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Neutral,
    Busy,
    Success,
}

/// Caption + enabled flag + tone of a trigger control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub caption: String,
    pub enabled: bool,
    pub tone: ButtonTone,
}

impl ButtonState {
    pub fn new(caption: &str) -> Self {
        Self {
            caption: caption.to_string(),
            enabled: true,
            tone: ButtonTone::Neutral,
        }
    }

    /// Disabled, with a working caption.
    pub fn busy(caption: &str) -> Self {
        Self {
            caption: caption.to_string(),
            enabled: false,
            tone: ButtonTone::Busy,
        }
    }

    /// Disabled, with a completed caption.
    pub fn success(caption: &str) -> Self {
        Self {
            caption: caption.to_string(),
            enabled: false,
            tone: ButtonTone::Success,
        }
    }
}

#[derive(Debug, Default)]
struct Panels {
    main_terminal: LogPanel,
    snipe_logs: LogPanel,
    farm_logs: LogPanel,
    swarm_logs: LogPanel,
}

/// The whole mutable state of one tour session.
#[derive(Debug)]
pub struct Session {
    pub active_page: Page,
    pub should_quit: bool,

    /// Wallet address held in memory for the session, never persisted.
    pub wallet: Option<String>,
    pub wallet_modal_open: bool,
    pub wallet_button: ButtonState,

    pub network: Network,
    pub test_sol_visible: bool,
    pub selected_mode: Option<AgentMode>,

    pub link_button: ButtonState,
    pub status_card_visible: bool,
    pub continue_enabled: bool,

    pub steps: Vec<DeployStep>,
    pub deploy_button: ButtonState,

    /// Swarm demo agent indicators.
    pub agents: [bool; 3],

    pub ca_label: String,
    pub ca_copied: bool,

    /// None until the block ticker has started at least once.
    pub block_height: Option<u64>,

    pub diagnostics: Vec<String>,

    pub feed: Option<TimerHandle>,
    pub blocks: Option<TimerHandle>,

    panels: Panels,
}

impl Session {
    pub fn new() -> Self {
        Self {
            active_page: Page::Landing,
            should_quit: false,
            wallet: None,
            wallet_modal_open: false,
            wallet_button: ButtonState::new("Phantom Wallet"),
            network: Network::Devnet,
            test_sol_visible: true,
            selected_mode: None,
            link_button: ButtonState::new("Establish Uplink"),
            status_card_visible: false,
            continue_enabled: false,
            steps: deploy::step_list(),
            deploy_button: ButtonState::new("Deploy & Activate 🦞"),
            agents: [false; 3],
            ca_label: "CA:".to_string(),
            ca_copied: false,
            block_height: None,
            diagnostics: Vec::new(),
            feed: None,
            blocks: None,
            panels: Panels::default(),
        }
    }

    pub fn panel(&self, id: PanelId) -> &LogPanel {
        match id {
            PanelId::MainTerminal => &self.panels.main_terminal,
            PanelId::SnipeLogs => &self.panels.snipe_logs,
            PanelId::FarmLogs => &self.panels.farm_logs,
            PanelId::SwarmLogs => &self.panels.swarm_logs,
        }
    }

    pub fn panel_mut(&mut self, id: PanelId) -> &mut LogPanel {
        match id {
            PanelId::MainTerminal => &mut self.panels.main_terminal,
            PanelId::SnipeLogs => &mut self.panels.snipe_logs,
            PanelId::FarmLogs => &mut self.panels.farm_logs,
            PanelId::SwarmLogs => &mut self.panels.swarm_logs,
        }
    }

    /// Record a diagnostic for the footer, keeping the ring bounded.
    pub fn push_diagnostic(&mut self, message: String) {
        if self.diagnostics.len() == MAX_DIAGNOSTICS {
            self.diagnostics.remove(0);
        }
        self.diagnostics.push(message);
    }

    pub fn last_diagnostic(&self) -> Option<&str> {
        self.diagnostics.last().map(String::as_str)
    }

    /// Wallet address shortened for display: first and last four chars.
    pub fn wallet_short(&self) -> Option<String> {
        let wallet = self.wallet.as_deref()?;
        let chars: Vec<char> = wallet.chars().collect();
        if chars.len() <= 8 {
            return Some(wallet.to_string());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        Some(format!("{head}...{tail}"))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
