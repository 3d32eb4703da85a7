//! Input Sink
//!
//! The render bridge side of input forwarding. A sink accepts bridge records
//! and returns nothing: delivery is fire-and-forget with no acknowledgment.

use crate::input::event::InputEvent;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Receiver of bridge input records
#[cfg_attr(test, mockall::automock)]
pub trait InputSink: Send + Sync {
    /// Deliver one record
    fn deliver(&self, event: InputEvent);
}

impl<S: InputSink + ?Sized> InputSink for Arc<S> {
    fn deliver(&self, event: InputEvent) {
        (**self).deliver(event)
    }
}

impl<S: InputSink + ?Sized> InputSink for Box<S> {
    fn deliver(&self, event: InputEvent) {
        (**self).deliver(event)
    }
}

/// Sink that only logs records
///
/// Stands in for the native bridge until the render library is linked.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl InputSink for LoggingSink {
    fn deliver(&self, event: InputEvent) {
        debug!("sendInputData: {}", event.to_raw());
    }
}

/// Sink forwarding records to another thread
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<InputEvent>,
}

impl ChannelSink {
    /// Unbounded channel
    pub fn new() -> (Self, Receiver<InputEvent>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }

    /// Bounded channel; records are dropped while the queue is full
    pub fn bounded(capacity: usize) -> (Self, Receiver<InputEvent>) {
        let (tx, rx) = bounded(capacity);
        (Self { tx }, rx)
    }
}

impl InputSink for ChannelSink {
    fn deliver(&self, event: InputEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!("Input queue full, dropping {:?}", event);
            }
            Err(TrySendError::Disconnected(event)) => {
                debug!("Input receiver gone, dropping {:?}", event);
            }
        }
    }
}
