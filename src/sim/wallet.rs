//! # External Collaborators
//!
//! The wallet adapter and the clipboard are the only collaborators the
//! engine talks to, each behind a minimal async trait so the core flows
//! are testable without either. The shipped implementations simulate
//! both: the wallet approves after a short delay with a fixed public key,
//! and the clipboard is an in-memory cell.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// The public key the simulated wallet hands out.
pub const DEMO_PUBLIC_KEY: &str = "CLawDeCkDemoWa11etPubKey111111111111111111";

/// External wallet: initiate a connection, obtain an address on approval.
#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Suspends until the user approves or rejects the connection.
    async fn connect(&self) -> Result<String>;
}

/// A wallet that always approves after a fixed delay.
pub struct SimulatedWallet {
    public_key: String,
    approval_delay: Duration,
}

impl SimulatedWallet {
    pub fn new(public_key: &str, approval_delay: Duration) -> Self {
        Self {
            public_key: public_key.to_string(),
            approval_delay,
        }
    }
}

impl Default for SimulatedWallet {
    fn default() -> Self {
        Self::new(DEMO_PUBLIC_KEY, Duration::from_millis(400))
    }
}

#[async_trait]
impl WalletAdapter for SimulatedWallet {
    async fn connect(&self) -> Result<String> {
        tokio::time::sleep(self.approval_delay).await;
        Ok(self.public_key.clone())
    }
}

/// External clipboard: write text, suspend until copied or failed.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// In-memory clipboard cell.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if let Ok(mut guard) = self.contents.lock() {
            *guard = Some(text.to_string());
        }
        Ok(())
    }
}
