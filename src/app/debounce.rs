use crate::app::action::Action;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Quiet-period timer for the search field. Each `schedule` replaces the
/// previous timer, so a burst of keystrokes produces one
/// [`Action::DebounceElapsed`] carrying the last text.
pub struct Debouncer {
    delay: Duration,
    tx: mpsc::Sender<Action>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration, tx: mpsc::Sender<Action>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    pub fn schedule(&mut self, query: String) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Action::DebounceElapsed(query)).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    #[tokio::test(start_paused = true)]
    async fn test_burst_fires_once_with_last_text() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new(DEFAULT_DEBOUNCE, tx);

        for text in ["R", "RE", "REL", "RELI"] {
            debouncer.schedule(text.to_string());
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        let action = rx.recv().await.unwrap();
        assert_eq!(action, Action::DebounceElapsed("RELI".to_string()));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_dispatch() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new(DEFAULT_DEBOUNCE, tx);

        debouncer.schedule("TCS".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_timer() {
        let (tx, mut rx) = mpsc::channel(8);
        {
            let mut debouncer = Debouncer::new(DEFAULT_DEBOUNCE, tx);
            debouncer.schedule("INFY".to_string());
        }
        // Sender was moved into the debouncer and its task; both are gone.
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
    }
}
