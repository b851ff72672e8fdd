//! Persisted best score
//!
//! One scalar under one key with update-if-greater semantics. The storage
//! itself belongs to the host (browser LocalStorage, a file, a test map)
//! behind the `KeyValueStore` trait.

use std::collections::HashMap;

/// Storage key for the best score
pub const STORAGE_KEY: &str = "voidstorm_highscore";

/// Minimal key-value persistence surface provided by the host
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and the headless demo
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// The single best-score record
pub struct HighScore {
    value: u64,
    store: Box<dyn KeyValueStore>,
}

impl HighScore {
    /// Load from storage; a missing or corrupt value starts at zero
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let value = store
            .get(STORAGE_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or(0);
        if value > 0 {
            log::info!("loaded high score {}", value);
        }
        Self { value, store }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Persist `score` only if it beats the current best. Returns true when
    /// the record improved.
    pub fn update_if_greater(&mut self, score: u64) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        match serde_json::to_string(&score) {
            Ok(json) => self.store.set(STORAGE_KEY, &json),
            Err(err) => log::warn!("failed to encode high score: {}", err),
        }
        log::info!("new high score {}", score);
        true
    }
}

impl std::fmt::Debug for HighScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighScore").field("value", &self.value).finish()
    }
}
