//! Snapshot subscribers

use crate::types::Snapshot;
use std::collections::BTreeMap;
use std::fmt;

/// Handle returned by `subscribe`, used to unsubscribe
///
/// Ids are never reused within a store, so a stale handle can never remove
/// somebody else's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Subscriber callback
pub type Listener = Box<dyn FnMut(&Snapshot) + Send>;

/// Registered listeners, notified in subscription order
#[derive(Default)]
pub struct Subscribers {
    listeners: BTreeMap<SubscriptionId, Listener>,
    next_id: u64,
}

impl Subscribers {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    /// Remove a listener, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Call every listener once with `snapshot`
    pub fn notify(&mut self, snapshot: &Snapshot) {
        for listener in self.listeners.values_mut() {
            listener(snapshot);
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
