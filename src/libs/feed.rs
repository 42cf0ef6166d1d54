//! Publish/subscribe feed with replay-latest semantics.
//!
//! A thin wrapper over `tokio::sync::watch`: every write is published to
//! all current subscribers, and a new subscriber immediately observes the
//! most recent value. Subscribers detach by dropping their subscription;
//! this never affects the publisher or other subscribers. Used for timer
//! state updates (the UI binding) and committed-session notifications
//! inside the watch service.

use tokio::sync::watch;

pub struct Feed<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Feed<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Feed { tx }
    }

    /// Publishes a new value to all subscribers, whether or not any exist.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Returns the most recently published value.
    pub fn latest(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Attaches a new subscriber that starts from the latest value.
    pub fn subscribe(&self) -> FeedSubscription<T> {
        FeedSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

/// One consumer's view of a [`Feed`]. Dropping it detaches the consumer.
pub struct FeedSubscription<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> FeedSubscription<T> {
    /// Current value without waiting.
    pub fn latest(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Waits for the next published value and returns it. Values are
    /// delivered in publish order; a slow consumer skips intermediate
    /// values but never observes an older one.
    pub async fn next(&mut self) -> Option<T> {
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_) => None,
        }
    }
}
