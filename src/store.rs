//! Read-mirror of the simulation for external UI binding
//!
//! The simulation is the single source of truth. The facade pushes one
//! snapshot here after each tick; subscribers hear about it only when the
//! snapshot actually changed, so external observers never see partial
//! writes within a frame.

use serde::Serialize;

use crate::sim::GamePhase;

/// One published view of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
    pub high_score: u64,
}

type Listener = Box<dyn FnMut(&Snapshot)>;

/// Subscribable state mirror
pub struct StateStore {
    snapshot: Snapshot,
    listeners: Vec<Listener>,
}

impl StateStore {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshot: initial,
            listeners: Vec::new(),
        }
    }

    /// Register a callback invoked whenever the snapshot changes. It also
    /// fires once immediately with the current value so new subscribers
    /// start in sync.
    pub fn subscribe(&mut self, mut listener: impl FnMut(&Snapshot) + 'static) {
        listener(&self.snapshot);
        self.listeners.push(Box::new(listener));
    }

    /// Publish a new snapshot; a no-op when nothing changed
    pub fn publish(&mut self, snapshot: Snapshot) {
        if snapshot == self.snapshot {
            return;
        }
        self.snapshot = snapshot;
        for listener in self.listeners.iter_mut() {
            listener(&self.snapshot);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    pub fn score(&self) -> u64 {
        self.snapshot.score
    }

    pub fn lives(&self) -> u8 {
        self.snapshot.lives
    }

    pub fn level(&self) -> u32 {
        self.snapshot.level
    }

    pub fn phase(&self) -> GamePhase {
        self.snapshot.phase
    }

    pub fn high_score(&self) -> u64 {
        self.snapshot.high_score
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("snapshot", &self.snapshot)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn snapshot(score: u64) -> Snapshot {
        Snapshot {
            score,
            lives: 3,
            level: 1,
            phase: GamePhase::Playing,
            high_score: 0,
        }
    }

    #[test]
    fn test_subscribe_fires_immediately() {
        let mut store = StateStore::new(snapshot(42));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |s| sink.borrow_mut().push(s.score));
        assert_eq!(*seen.borrow(), vec![42]);
    }

    #[test]
    fn test_publish_notifies_only_on_change() {
        let mut store = StateStore::new(snapshot(0));
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        store.subscribe(move |_| *sink.borrow_mut() += 1);
        assert_eq!(*count.borrow(), 1);

        store.publish(snapshot(0)); // unchanged
        assert_eq!(*count.borrow(), 1);

        store.publish(snapshot(100));
        assert_eq!(*count.borrow(), 2);
        assert_eq!(store.score(), 100);
    }

    #[test]
    fn test_snapshot_serializes_for_host_uis() {
        let json = serde_json::to_string(&snapshot(7)).unwrap();
        assert!(json.contains("\"score\":7"));
        assert!(json.contains("\"phase\":\"playing\""));
    }
}
