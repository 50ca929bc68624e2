//! Short-lived flags kept in LocalStorage
//!
//! The only persisted state is the "keep the mobile menu open" flag, written
//! just before a navigation from inside the menu and consumed on the next page
//! load. Storage failures are never fatal: a flag that can't be written or read
//! simply means the menu starts closed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Storage key for the menu flag
pub const MENU_FLAG_KEY: &str = "veldivia_mobile_menu_open";
/// How long a menu flag stays valid
pub const MENU_FLAG_TTL_MS: f64 = 5000.0;

/// String key/value storage (LocalStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Returns false if the write was rejected
    fn set(&mut self, key: &str, value: &str) -> bool;
    fn remove(&mut self, key: &str);
}

/// In-memory store for native runs and tests
#[derive(Debug, Clone, Default)]
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

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.entries.insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Stored payload: write time and lifetime, both in ms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuFlag {
    #[serde(default)]
    pub t: f64,
    #[serde(default)]
    pub ttl: Option<f64>,
}

impl MenuFlag {
    pub fn new(now_ms: f64) -> Self {
        Self {
            t: now_ms,
            ttl: Some(MENU_FLAG_TTL_MS),
        }
    }

    /// Written within its lifetime; a zero timestamp never counts
    pub fn is_fresh(&self, now_ms: f64) -> bool {
        if self.t <= 0.0 {
            return false;
        }
        let ttl = self.ttl.filter(|ttl| *ttl > 0.0).unwrap_or(MENU_FLAG_TTL_MS);
        now_ms - self.t <= ttl
    }
}

/// Remember that the menu should reopen after the coming navigation
pub fn mark_menu_open<K: KeyValueStore + ?Sized>(store: &mut K, now_ms: f64) {
    match serde_json::to_string(&MenuFlag::new(now_ms)) {
        Ok(json) => {
            if !store.set(MENU_FLAG_KEY, &json) {
                log::warn!("Could not persist mobile menu state");
            }
        }
        Err(e) => log::warn!("Could not encode mobile menu flag: {}", e),
    }
}

/// Forget the flag (menu closed explicitly)
pub fn clear_menu_flag<K: KeyValueStore + ?Sized>(store: &mut K) {
    store.remove(MENU_FLAG_KEY);
}

/// Consume the flag: true if it was present and fresh. The flag is removed
/// whatever its state.
pub fn take_menu_flag<K: KeyValueStore + ?Sized>(store: &mut K, now_ms: f64) -> bool {
    let Some(raw) = store.get(MENU_FLAG_KEY) else {
        return false;
    };
    store.remove(MENU_FLAG_KEY);

    match serde_json::from_str::<MenuFlag>(&raw) {
        Ok(flag) => flag.is_fresh(now_ms),
        Err(e) => {
            log::debug!("Discarding malformed menu flag: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_flag_reopens_once() {
        let mut store = MemoryStore::new();
        mark_menu_open(&mut store, 10_000.0);
        assert!(take_menu_flag(&mut store, 12_000.0));
        assert!(!take_menu_flag(&mut store, 12_001.0));
        assert!(store.get(MENU_FLAG_KEY).is_none());
    }

    #[test]
    fn test_expired_flag_is_removed() {
        let mut store = MemoryStore::new();
        mark_menu_open(&mut store, 10_000.0);
        assert!(!take_menu_flag(&mut store, 15_001.0));
        assert!(store.get(MENU_FLAG_KEY).is_none());
    }

    #[test]
    fn test_ttl_boundary_inclusive() {
        let flag = MenuFlag::new(1_000.0);
        assert!(flag.is_fresh(6_000.0));
        assert!(!flag.is_fresh(6_000.5));
    }

    #[test]
    fn test_missing_or_zero_ttl_uses_default() {
        let flag = MenuFlag { t: 1_000.0, ttl: None };
        assert!(flag.is_fresh(5_500.0));
        let flag = MenuFlag { t: 1_000.0, ttl: Some(0.0) };
        assert!(flag.is_fresh(5_500.0));
        let flag = MenuFlag { t: 1_000.0, ttl: Some(100.0) };
        assert!(!flag.is_fresh(1_200.0));
    }

    #[test]
    fn test_malformed_flag_discarded() {
        let mut store = MemoryStore::new();
        store.set(MENU_FLAG_KEY, "not json");
        assert!(!take_menu_flag(&mut store, 1.0));
        assert!(store.get(MENU_FLAG_KEY).is_none());

        store.set(MENU_FLAG_KEY, "{}");
        assert!(!take_menu_flag(&mut store, 1.0));
    }

    #[test]
    fn test_clear_flag() {
        let mut store = MemoryStore::new();
        mark_menu_open(&mut store, 1.0);
        clear_menu_flag(&mut store);
        assert!(!take_menu_flag(&mut store, 2.0));
    }
}
