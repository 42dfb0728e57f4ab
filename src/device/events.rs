//! Device lifecycle events
//!
//! Typed replacement for string-keyed `on(event, callback)` registration.
//! SDK adapters embed an [`ObserverRegistry`] and call `emit` from whatever
//! thread their SDK reports events on.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::ConnectionError;

/// The four lifecycle events a session handle reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    Error,
    Connect,
    Disconnect,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Ready,
        EventKind::Error,
        EventKind::Connect,
        EventKind::Disconnect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Ready => "ready",
            EventKind::Error => "error",
            EventKind::Connect => "connect",
            EventKind::Disconnect => "disconnect",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event emitted by a session handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Ready,
    Error(ConnectionError),
    Connect,
    Disconnect,
}

impl DeviceEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DeviceEvent::Ready => EventKind::Ready,
            DeviceEvent::Error(_) => EventKind::Error,
            DeviceEvent::Connect => EventKind::Connect,
            DeviceEvent::Disconnect => EventKind::Disconnect,
        }
    }
}

/// Callback invoked synchronously when a matching event fires.
pub type Observer = Box<dyn Fn(&DeviceEvent) + Send + Sync>;

/// Per-kind observer lists.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Mutex<HashMap<EventKind, Vec<Arc<Observer>>>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, kind: EventKind, observer: Observer) {
        let mut observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        observers.entry(kind).or_default().push(Arc::new(observer));
    }

    /// Invokes every observer registered for the event's kind, in
    /// registration order. Returns how many observers ran.
    pub fn emit(&self, event: &DeviceEvent) -> usize {
        // Snapshot so observers may register more observers without deadlocking.
        let targets: Vec<Arc<Observer>> = {
            let observers = self
                .observers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            observers.get(&event.kind()).cloned().unwrap_or_default()
        };

        for observer in &targets {
            observer(event);
        }
        targets.len()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .map_or(0, Vec::len)
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<(EventKind, usize)> =
            EventKind::ALL.iter().map(|k| (*k, self.count(*k))).collect();
        f.debug_struct("ObserverRegistry")
            .field("observers", &counts)
            .finish()
    }
}
