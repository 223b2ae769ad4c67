//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the directory state lives in one field so
//! every page reads from the same source of truth.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use reactive_stores::Store;

use hr_core::query::SortOrder;
use hr_core::{Department, Employee, EmployeeState, PerformanceRating, Theme};

use crate::{api, storage};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Employees, bookmarks, filters, pagination and fetch status
    pub directory: EmployeeState,
}

impl AppState {
    /// State as the last session left it (bookmarks, filters, page size)
    pub fn restored() -> Self {
        Self {
            directory: EmployeeState::from_persisted(storage::load_state()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Write the persisted slice back to local storage
fn persist(store: &AppStore) {
    let snapshot = store.directory().read_untracked().snapshot();
    if let Err(e) = storage::save_state(&snapshot) {
        warn!("could not save dashboard state: {}", e);
    }
}

/// Flip a bookmark; returns whether the employee is now bookmarked
pub fn store_toggle_bookmark(store: &AppStore, id: &str) -> bool {
    let bookmarked = store.directory().write().toggle_bookmark(id);
    persist(store);
    bookmarked
}

pub fn store_clear_bookmarks(store: &AppStore) {
    store.directory().write().clear_bookmarks();
    persist(store);
}

pub fn store_set_search_term(store: &AppStore, term: String) {
    store.directory().write().set_search_term(term);
    persist(store);
}

pub fn store_set_department(store: &AppStore, department: Option<Department>) {
    store.directory().write().set_selected_department(department);
    persist(store);
}

pub fn store_set_rating(store: &AppStore, rating: Option<PerformanceRating>) {
    store.directory().write().set_selected_performance_rating(rating);
    persist(store);
}

/// Sorting is not persisted, but it still resets the page
pub fn store_set_sort(store: &AppStore, sort: Option<SortOrder>) {
    store.directory().write().set_sort(sort);
}

pub fn store_clear_filters(store: &AppStore) {
    store.directory().write().clear_filters();
    persist(store);
}

pub fn store_set_items_per_page(store: &AppStore, items_per_page: usize) {
    store.directory().write().set_items_per_page(items_per_page);
    persist(store);
}

pub fn store_go_to_page(store: &AppStore, page: usize) {
    store.directory().write().go_to_page(page);
}

/// Insert or replace a record (e.g. one loaded on the detail page)
pub fn store_add_employee(store: &AppStore, employee: Employee) {
    store.directory().write().add_employee(employee);
}

/// Flip light/dark; returns the new theme
pub fn store_toggle_theme(store: &AppStore) -> Theme {
    let theme = store.directory().write().toggle_theme();
    persist(store);
    theme
}

pub fn store_set_follow_system_theme(store: &AppStore, follow: bool) {
    store.directory().write().set_follow_system_theme(follow);
    persist(store);
}

/// Page size back to the default, no sort, page 1
pub fn store_reset_preferences(store: &AppStore) {
    store.directory().write().reset_preferences();
    persist(store);
}

/// Forget bookmarks, filters and preferences
pub fn store_clear_stored_data(store: &AppStore) {
    store.directory().write().clear_stored_data();
    persist(store);
}

// ========================
// Fetching
// ========================

/// Load the directory. A newer call supersedes any load still in flight.
pub fn fetch_employees(store: AppStore) {
    let token = store.directory().write().begin_fetch();
    spawn_local(async move {
        let result = api::load_directory().await;
        if let Ok(page) = &result {
            info!("directory loaded: {} employees ({:?})", page.employees.len(), page.source);
        }
        store.directory().write().complete_fetch(token, result);
    });
}

/// Pages call this on mount
pub fn ensure_loaded(store: AppStore) {
    if store.directory().read_untracked().needs_fetch() {
        fetch_employees(store);
    }
}

pub fn store_clear_error(store: &AppStore) {
    store.directory().write().clear_error();
}
