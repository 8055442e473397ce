//! Cart events delivered to the UI layer

use crate::core::types::NotificationKind;
use crate::utils::current_timestamp;

use std::time::Duration;
use tokio::sync::mpsc;

/// A transient toast the UI shows and then dismisses
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Text shown to the user
    pub message: String,
    /// Kind of the toast (success, error, info, warning)
    pub kind: NotificationKind,
    /// How long the UI keeps the toast on screen
    pub dismiss_after: Duration,
    /// Unix timestamp when the notification was raised
    pub created_at: u64,
}

impl Notification {
    /// Creates a new Notification stamped with the current time
    pub fn new(message: &str, kind: NotificationKind, dismiss_after: Duration) -> Self {
        Self {
            message: message.to_string(),
            kind,
            dismiss_after,
            created_at: current_timestamp(),
        }
    }
}

/// Event emitted by the order manager
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// Show a toast
    Notification(Notification),
    /// Total unit count changed; the badge is hidden when it is zero
    BadgeUpdated { item_count: u64, visible: bool },
}

impl CartEvent {
    pub fn badge(item_count: u64) -> Self {
        CartEvent::BadgeUpdated {
            item_count,
            visible: item_count > 0,
        }
    }
}

/// Fan-out of cart events to any number of subscribers
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<mpsc::UnboundedSender<CartEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber. Events emitted before this call are not replayed.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<CartEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Sends the event to every live subscriber and forgets the dropped ones
    pub fn emit(&mut self, event: CartEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
