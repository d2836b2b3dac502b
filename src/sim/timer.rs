//! # Cancellable Timer Handle
//!
//! Recurring timers (the live feed and the block ticker) are spawned
//! tokio tasks owned by a [`TimerHandle`]. Dropping the handle aborts the
//! task, so "start cancels the previous instance" is expressed by
//! replacing the `Option<TimerHandle>` slot in the session, and "stop" by
//! taking it.

use std::future::Future;
use tokio::task::JoinHandle;

/// Owns a spawned recurring task and aborts it on drop.
pub struct TimerHandle {
    handle: JoinHandle<()>,
}

impl TimerHandle {
    /// Spawn `fut` on the current runtime and wrap its handle.
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(fut),
        }
    }

    /// Abort the underlying task without waiting for it.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let ticks = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&ticks);
        let handle = TimerHandle::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(100));
            interval.tick().await;
            loop {
                interval.tick().await;
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);

        drop(handle);
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_marks_finished() {
        let handle = TimerHandle::spawn(async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        });
        assert!(!handle.is_finished());
        handle.cancel();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(handle.is_finished());
    }
}
