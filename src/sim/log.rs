//! # Log Panels
//!
//! Append-only, timestamped log panels and the data the typewriter
//! renderer mutates. A panel entry is created empty and revealed one
//! character at a time by [`crate::sim::Engine::append_log`]; entries are
//! keyed by a panel-unique id so a writer that is still revealing text
//! touches only its own entry, even if the panel was cleared underneath it
//! (the orphaned writes simply vanish).

use chrono::Local;
use std::time::Duration;

/// Delay between revealed characters in the typewriter effect.
pub const REVEAL_DELAY: Duration = Duration::from_millis(15);

/// Semantic category of a log entry, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Scan,
    Learn,
    Trade,
    Block,
}

impl LogCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            LogCategory::Scan => "scan",
            LogCategory::Learn => "learn",
            LogCategory::Trade => "trade",
            LogCategory::Block => "block",
        }
    }
}

/// One timestamped, categorized, iconized line of text.
#[derive(Debug, Clone)]
pub struct LogEntry {
    id: u64,
    /// Wall-clock time of day at append, `HH:MM:SS` (hour-24, no date).
    pub time: String,
    pub category: LogCategory,
    pub icon: String,
    /// The revealed portion of the entry text. Grows while a typewriter
    /// writer is active; equals the full text once the reveal finishes.
    pub text: String,
}

/// A named, ordered, append-only sequence of [`LogEntry`].
#[derive(Debug, Default)]
pub struct LogPanel {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl LogPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty entry stamped with the current local time and
    /// return its id for subsequent [`LogPanel::push_char`] calls.
    pub fn begin_entry(&mut self, category: LogCategory, icon: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(LogEntry {
            id,
            time: Local::now().format("%H:%M:%S").to_string(),
            category,
            icon: icon.to_string(),
            text: String::new(),
        });
        id
    }

    /// Reveal one more character of the entry with the given id. A no-op
    /// if the entry is gone (the panel was cleared mid-reveal).
    pub fn push_char(&mut self, id: u64, ch: char) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.text.push(ch);
        }
    }

    /// Empty the panel. Entry ids are not reused, so in-flight writers
    /// cannot land in a later entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Identifier of a registered log panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    MainTerminal,
    SnipeLogs,
    FarmLogs,
    SwarmLogs,
}

impl PanelId {
    /// Resolve a panel id string to a registered panel.
    pub fn from_id(id: &str) -> Option<PanelId> {
        match id {
            "main-terminal" => Some(PanelId::MainTerminal),
            "snipe-logs" => Some(PanelId::SnipeLogs),
            "farm-logs" => Some(PanelId::FarmLogs),
            "swarm-logs" => Some(PanelId::SwarmLogs),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            PanelId::MainTerminal => "main-terminal",
            PanelId::SnipeLogs => "snipe-logs",
            PanelId::FarmLogs => "farm-logs",
            PanelId::SwarmLogs => "swarm-logs",
        }
    }
}
