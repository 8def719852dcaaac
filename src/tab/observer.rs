//! Change notification for tab consumers.
//!
//! Consumers register a callback and receive a [`TabEvent`] after every
//! structural change. Callbacks run after the tab lock is released, so they
//! may read from the manager freely.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Structural change to the tab collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// A new tab was appended
    Added(String),
    /// An existing tab was merged with a fresh navigation
    Updated(String),
    /// Tabs were removed (close, bulk close or eviction)
    Removed(Vec<String>),
    /// A tab changed position; carries the new drag revision
    Reordered { key: String, drag_revision: u64 },
    /// A tab was pinned or unpinned
    PinChanged { key: String, pinned: bool },
    /// A custom title was set or cleared
    Renamed(String),
    /// The whole list was replaced from a snapshot
    Restored(usize),
    /// A refresh cycle excluded or re-included a view name
    Refresh { name: String, excluded: bool },
}

type Callback = Arc<dyn Fn(&TabEvent) + Send + Sync>;

/// Registered observers
#[derive(Default)]
pub(crate) struct TabObservers {
    next_id: AtomicU64,
    callbacks: Mutex<Vec<(SubscriptionId, Callback)>>,
}

impl TabObservers {
    pub(crate) fn subscribe(&self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.callbacks.lock().push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut callbacks = self.callbacks.lock();
        let before = callbacks.len();
        callbacks.retain(|(sub, _)| *sub != id);
        callbacks.len() != before
    }

    pub(crate) fn emit(&self, event: &TabEvent) {
        // Snapshot so callbacks can subscribe/unsubscribe re-entrantly
        let callbacks: Vec<Callback> = self
            .callbacks
            .lock()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }

    pub(crate) fn emit_all(&self, events: impl IntoIterator<Item = TabEvent>) {
        for event in events {
            self.emit(&event);
        }
    }
}
