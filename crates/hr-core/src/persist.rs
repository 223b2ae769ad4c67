//! Persisted Client State
//!
//! Bookmarks, last filters, page size and theme, stored as JSON under a versioned
//! key. Decoding is lenient: every field falls back to its default on its
//! own, so one bad value never costs the user their bookmarks.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Department, PerformanceRating};
use crate::pagination::DEFAULT_PAGE_SIZE;

pub const STORAGE_KEY: &str = "hr-dashboard:v1";
pub const STORAGE_VERSION: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

/// The slice of the store that survives a reload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub bookmarked_ids: BTreeSet<String>,
    pub search_term: String,
    pub department: Option<Department>,
    pub performance_rating: Option<PerformanceRating>,
    pub items_per_page: usize,
    pub theme: Theme,
    /// Follow the OS light/dark preference instead of `theme`
    pub follow_system_theme: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            bookmarked_ids: BTreeSet::new(),
            search_term: String::new(),
            department: None,
            performance_rating: None,
            items_per_page: DEFAULT_PAGE_SIZE,
            theme: Theme::Light,
            follow_system_theme: false,
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    version: u64,
    state: &'a PersistedState,
}

impl PersistedState {
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(&Envelope { version: STORAGE_VERSION, state: self })
    }

    /// Never fails; unreadable parts come back as defaults
    pub fn decode(raw: &str) -> Self {
        let root: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                warn!("discarding unreadable stored state: {}", e);
                return Self::default();
            }
        };
        if root.get("version").and_then(Value::as_u64) != Some(STORAGE_VERSION) {
            warn!("discarding stored state with unknown version");
            return Self::default();
        }
        let Some(state) = root.get("state").and_then(Value::as_object) else {
            return Self::default();
        };

        let defaults = Self::default();
        Self {
            bookmarked_ids: state
                .get("bookmarkedIds")
                .and_then(Value::as_array)
                .map(|ids| {
                    ids.iter()
                        .filter_map(|id| match id {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            search_term: state
                .get("searchTerm")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            department: state
                .get("department")
                .and_then(|v| serde_json::from_value(v.clone()).ok()),
            performance_rating: state
                .get("performanceRating")
                .and_then(|v| serde_json::from_value(v.clone()).ok()),
            items_per_page: state
                .get("itemsPerPage")
                .and_then(Value::as_u64)
                .filter(|n| *n > 0)
                .map(|n| n as usize)
                .unwrap_or(defaults.items_per_page),
            theme: state
                .get("theme")
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or(defaults.theme),
            follow_system_theme: state
                .get("followSystemTheme")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.follow_system_theme),
        }
    }
}

/// Minimal string key-value storage (browser local storage, or memory)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// In-memory store, used when the browser refuses local storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn load(store: &impl KeyValueStore) -> PersistedState {
    store
        .get(STORAGE_KEY)
        .map(|raw| PersistedState::decode(&raw))
        .unwrap_or_default()
}

pub fn save(store: &impl KeyValueStore, state: &PersistedState) -> Result<(), String> {
    let raw = state.encode().map_err(|e| e.to_string())?;
    store.set(STORAGE_KEY, &raw)
}
