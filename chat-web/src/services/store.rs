//! # Snapshot Store
//!
//! Persistence port for the two client-side values that survive a page
//! reload: the chat history snapshot and the theme preference. The
//! browser implementation sits on localStorage; the in-memory store
//! backs tests.

use shared::StoredEntry;
use std::cell::RefCell;
use std::collections::HashMap;

pub const HISTORY_KEY: &str = "chatHistory";
pub const THEME_KEY: &str = "theme";

pub trait SnapshotStore {
    /// Load the persisted history. Absent or malformed snapshots yield
    /// an empty history; no error is surfaced.
    fn load_history(&self) -> Vec<StoredEntry>;
    fn save_history(&self, entries: &[StoredEntry]);
    fn load_theme(&self) -> Option<String>;
    fn save_theme(&self, theme: &str);
}

/// localStorage-backed store. Stateless: the storage handle is fetched
/// per call, and a browser with storage disabled degrades to the
/// empty-history behavior.
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to persist {} to localStorage", key);
            }
        }
    }
}

impl SnapshotStore for BrowserStore {
    fn load_history(&self) -> Vec<StoredEntry> {
        Self::get(HISTORY_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save_history(&self, entries: &[StoredEntry]) {
        match serde_json::to_string(entries) {
            Ok(json) => Self::set(HISTORY_KEY, &json),
            Err(e) => log::warn!("Failed to serialize history: {}", e),
        }
    }

    fn load_theme(&self) -> Option<String> {
        Self::get(THEME_KEY)
    }

    fn save_theme(&self, theme: &str) {
        Self::set(THEME_KEY, theme);
    }
}

/// In-memory store with the same malformed-snapshot tolerance as the
/// browser one.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. a corrupt snapshot.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl SnapshotStore for MemoryStore {
    fn load_history(&self) -> Vec<StoredEntry> {
        self.raw(HISTORY_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save_history(&self, entries: &[StoredEntry]) {
        if let Ok(json) = serde_json::to_string(entries) {
            self.insert_raw(HISTORY_KEY, &json);
        }
    }

    fn load_theme(&self) -> Option<String> {
        self.raw(THEME_KEY)
    }

    fn save_theme(&self, theme: &str) {
        self.insert_raw(THEME_KEY, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_round_trip() {
        let store = MemoryStore::new();
        let entries = vec![
            StoredEntry {
                question: "What is 2+2?".to_string(),
                answer: "4".to_string(),
            },
            StoredEntry {
                question: "And 3+3?".to_string(),
                answer: "6".to_string(),
            },
        ];

        store.save_history(&entries);

        assert_eq!(store.load_history(), entries);
    }

    #[test]
    fn absent_snapshot_yields_empty_history() {
        let store = MemoryStore::new();

        assert!(store.load_history().is_empty());
    }

    #[test]
    fn malformed_snapshot_yields_empty_history() {
        let store = MemoryStore::new();
        store.insert_raw(HISTORY_KEY, "{not valid json");

        assert!(store.load_history().is_empty());
    }

    #[test]
    fn theme_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load_theme(), None);

        store.save_theme("dark");

        assert_eq!(store.load_theme(), Some("dark".to_string()));
    }
}
