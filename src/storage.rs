//! Browser Local Storage
//!
//! `window.localStorage` as a [`KeyValueStore`]. Private browsing modes can
//! refuse storage; the session then keeps its state in memory.

use hr_core::persist::{self, KeyValueStore, MemoryStore, PersistedState};
use log::warn;

pub struct BrowserStore {
    local: Option<web_sys::Storage>,
    memory: MemoryStore,
}

impl BrowserStore {
    fn open() -> Self {
        let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if local.is_none() {
            warn!("local storage unavailable, state will not survive a reload");
        }
        Self {
            local,
            memory: MemoryStore::default(),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match &self.local {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => self.memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        match &self.local {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| format!("{:?}", e)),
            None => self.memory.set(key, value),
        }
    }
}

thread_local! {
    static STORE: BrowserStore = BrowserStore::open();
}

pub fn load_state() -> PersistedState {
    STORE.with(|store| persist::load(store))
}

pub fn save_state(state: &PersistedState) -> Result<(), String> {
    STORE.with(|store| persist::save(store, state))
}
