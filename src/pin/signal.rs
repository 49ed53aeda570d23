//! Completion signal
//!
//! A single-value broadcast: the latest value is cached and handed to
//! subscribers that join late. Built on `tokio::sync::watch`, which has
//! exactly those semantics and never queues.

use tokio::sync::watch;

/// Observable "input complete" flag
#[derive(Debug)]
pub struct CompletionSignal {
    tx: watch::Sender<bool>,
}

impl CompletionSignal {
    /// Create a signal holding `false`
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Store a new value and notify every receiver
    ///
    /// Receivers are notified even when the value is unchanged, so a host
    /// observing `changed()` sees every explicit set.
    pub fn set(&self, value: bool) {
        // send_replace stores the value even with zero receivers
        self.tx.send_replace(value);
    }

    /// Current value
    pub fn get(&self) -> bool {
        *self.tx.borrow()
    }

    /// Subscribe to future changes; the receiver starts at the current value
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for CompletionSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_value_is_false() {
        let signal = CompletionSignal::new();
        assert!(!signal.get());
    }

    #[test]
    fn test_set_without_subscribers_is_kept() {
        let signal = CompletionSignal::new();
        signal.set(true);
        assert!(signal.get());
    }

    #[test]
    fn test_late_subscriber_sees_latest_value() {
        let signal = CompletionSignal::new();
        signal.set(true);
        let rx = signal.subscribe();
        assert!(*rx.borrow());
    }

    #[tokio::test]
    async fn test_subscriber_is_notified() {
        let signal = CompletionSignal::new();
        let mut rx = signal.subscribe();

        signal.set(true);
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());

        // Same value still counts as a notification
        signal.set(true);
        assert!(rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_last_value_wins() {
        let signal = CompletionSignal::new();
        let mut rx = signal.subscribe();

        signal.set(true);
        signal.set(false);
        rx.changed().await.unwrap();
        assert!(!*rx.borrow_and_update());
        assert!(!rx.has_changed().unwrap());
    }
}
