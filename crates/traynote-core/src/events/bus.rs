//! Channel-backed bus carrying host events to the control thread.
//!
//! Host adapters publish from whatever thread their native callbacks run on;
//! the control thread drains the bus and dispatches each event. Callbacks
//! therefore never re-enter a window controller or the settings store.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::warn;

use super::AppEvent;

pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A cloneable handle for host callbacks.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Next pending event, without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds a sender itself, so the channel never disconnects.
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Every event published so far, in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue an event for the next drain.
    ///
    /// Publishing after the bus is dropped is logged and otherwise ignored.
    pub fn publish(&self, event: AppEvent) {
        if let Err(err) = self.sender.send(event) {
            warn!(event = ?err.0, "Event bus is gone, dropping event");
        }
    }
}
