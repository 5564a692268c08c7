use std::collections::BTreeMap;

/// Page-wide events a component may subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalEvent {
    Scroll,
    Resize,
    PointerDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Subscriptions to [`GlobalEvent`]s, owned by the page.
///
/// Components register on the page's registry and must hand their ids back;
/// the page only forwards an event to ids that are currently registered for
/// its kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: BTreeMap<ListenerId, GlobalEvent>,
}

impl ListenerRegistry {
    pub fn register(&mut self, event: GlobalEvent) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.insert(id, event);
        tracing::trace!(target: "listeners", ?id, ?event, "registered");
        id
    }

    /// Returns `false` if the id was not registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(&id);
        tracing::trace!(target: "listeners", ?id, ?removed, "unregistered");
        removed.is_some()
    }

    #[must_use]
    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    #[must_use]
    pub fn targets(&self, event: GlobalEvent) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|(_, kind)| **kind == event)
            .map(|(id, _)| *id)
            .collect()
    }

    #[must_use]
    pub fn count(&self, event: GlobalEvent) -> usize {
        self.listeners.values().filter(|kind| **kind == event).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
