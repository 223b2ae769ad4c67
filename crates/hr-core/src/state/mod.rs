//! Directory State
//!
//! The single source of truth behind every page: the employee collection,
//! the bookmark set, filter criteria, the pagination cursor and the fetch
//! lifecycle. Derived views are recomputed on each call.
//!
//! Invariants kept by the mutators:
//! - every filter change (and every page-size change) resets to page 1
//! - removing an employee also removes its bookmark
//! - only the latest issued fetch may write its result

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::api::{ApiError, DataSource, EmployeePage};
use crate::domain::{Department, Employee, PerformanceRating};
use crate::pagination::{PageInfo, Pagination};
use crate::persist::{PersistedState, Theme};
use crate::query::{FilterCriteria, SortOrder};
use crate::stats::WorkforceStats;


/// Issued by [`EmployeeState::begin_fetch`]; only the newest one counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Failed(String),
}

/// Counts for the "showing X of Y" line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub total_employees: usize,
    pub filtered_count: usize,
    pub has_active_filters: bool,
}

impl SearchStats {
    pub fn has_results(&self) -> bool {
        self.filtered_count > 0
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered_count != self.total_employees
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeState {
    employees: Vec<Employee>,
    bookmarked_ids: BTreeSet<String>,
    filters: FilterCriteria,
    pagination: Pagination,
    loading: bool,
    error: Option<String>,
    latest_token: u64,
    last_source: Option<DataSource>,
    /// Set once a whole directory batch has been applied
    batch_loaded: bool,
    theme: Theme,
    follow_system_theme: bool,
}

impl EmployeeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state seeded with what was persisted last session
    pub fn from_persisted(persisted: PersistedState) -> Self {
        let mut state = Self::default();
        state.hydrate(persisted);
        state
    }

    // ========================
    // Accessors
    // ========================

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn bookmarked_ids(&self) -> &BTreeSet<String> {
        &self.bookmarked_ids
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_source(&self) -> Option<DataSource> {
        self.last_source
    }

    pub fn fetch_status(&self) -> FetchStatus {
        match (&self.error, self.loading) {
            (_, true) => FetchStatus::Loading,
            (Some(message), false) => FetchStatus::Failed(message.clone()),
            (None, false) => FetchStatus::Idle,
        }
    }

    /// Pages call this on mount: fetch until a directory batch has been
    /// applied. Single records added on the detail page do not count.
    pub fn needs_fetch(&self) -> bool {
        !self.batch_loaded && !self.loading
    }

    // ========================
    // Collection
    // ========================

    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.batch_loaded = true;
    }

    /// Append, or replace in place when the id is already present
    pub fn add_employee(&mut self, employee: Employee) {
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => *existing = employee,
            None => self.employees.push(employee),
        }
    }

    /// Patch one employee in place; `false` if the id is unknown
    pub fn update_employee<F>(&mut self, id: &str, patch: F) -> bool
    where
        F: FnOnce(&mut Employee),
    {
        match self.employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                patch(employee);
                true
            }
            None => false,
        }
    }

    pub fn remove_employee(&mut self, id: &str) -> Option<Employee> {
        self.bookmarked_ids.remove(id);
        let index = self.employees.iter().position(|e| e.id == id)?;
        Some(self.employees.remove(index))
    }

    pub fn employee_by_id(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    // ========================
    // Bookmarks
    // ========================

    /// Flip membership and return the new state. Unknown ids are accepted.
    pub fn toggle_bookmark(&mut self, id: &str) -> bool {
        if self.bookmarked_ids.remove(id) {
            false
        } else {
            self.bookmarked_ids.insert(id.to_string());
            true
        }
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarked_ids.contains(id)
    }

    pub fn set_bookmarked_ids<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bookmarked_ids = ids.into_iter().map(Into::into).collect();
    }

    pub fn clear_bookmarks(&mut self) {
        self.bookmarked_ids.clear();
    }

    // ========================
    // Filters
    // ========================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filters.search_term = term.into();
        self.pagination.reset();
    }

    pub fn set_selected_department(&mut self, department: Option<Department>) {
        self.filters.department = department;
        self.pagination.reset();
    }

    pub fn set_selected_performance_rating(&mut self, rating: Option<PerformanceRating>) {
        self.filters.performance_rating = rating;
        self.pagination.reset();
    }

    pub fn set_sort(&mut self, sort: Option<SortOrder>) {
        self.filters.sort = sort;
        self.pagination.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterCriteria::default();
        self.pagination.reset();
    }

    // ========================
    // Pagination
    // ========================

    pub fn set_current_page(&mut self, page: usize) {
        self.pagination.current_page = page.max(1);
    }

    /// Move to `page` if it exists for the current filter; `false` otherwise
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total_pages = self.page_info().total_pages;
        if page >= 1 && page <= total_pages {
            self.pagination.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.pagination.items_per_page = items_per_page.max(1);
        self.pagination.reset();
    }

    // ========================
    // Derived Views
    // ========================

    pub fn filtered_employees(&self) -> Vec<Employee> {
        self.filters.apply(&self.employees)
    }

    pub fn paginated_employees(&self) -> Vec<Employee> {
        let filtered = self.filtered_employees();
        self.pagination.slice(&filtered).to_vec()
    }

    pub fn page_info(&self) -> PageInfo {
        let total = self
            .employees
            .iter()
            .filter(|e| self.filters.matches(e))
            .count();
        self.pagination.info(total)
    }

    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        self.pagination
            .page_numbers(self.page_info().total_items, max_visible)
    }

    /// Bookmarked employees in collection order; stale ids are skipped
    pub fn bookmarked_employees(&self) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| self.bookmarked_ids.contains(&e.id))
            .cloned()
            .collect()
    }

    pub fn search_stats(&self) -> SearchStats {
        SearchStats {
            total_employees: self.employees.len(),
            filtered_count: self.page_info().total_items,
            has_active_filters: self.filters.is_active(),
        }
    }

    /// Departments present in the collection plus the active selection,
    /// alphabetically. A restored filter stays visible even when the new
    /// batch has nobody in it.
    pub fn available_departments(&self) -> Vec<Department> {
        let present: BTreeSet<Department> = self
            .employees
            .iter()
            .map(|e| e.department)
            .chain(self.filters.department)
            .collect();
        let mut departments: Vec<Department> = present.into_iter().collect();
        departments.sort_by_key(|d| d.as_str());
        departments
    }

    /// Ratings present in the collection plus the active selection, highest first
    pub fn available_ratings(&self) -> Vec<PerformanceRating> {
        let present: BTreeSet<PerformanceRating> = self
            .employees
            .iter()
            .map(|e| e.performance_rating)
            .chain(self.filters.performance_rating)
            .collect();
        present.into_iter().rev().collect()
    }

    pub fn stats(&self) -> WorkforceStats {
        WorkforceStats::compute(&self.employees, &self.bookmarked_ids)
    }

    // ========================
    // Fetch Lifecycle
    // ========================

    /// Enter loading and issue a token newer than every earlier one
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.latest_token += 1;
        self.loading = true;
        FetchToken(self.latest_token)
    }

    /// Apply a fetch result if `token` is still the latest; returns whether
    /// it was applied. A failure keeps the current collection.
    pub fn complete_fetch(
        &mut self,
        token: FetchToken,
        result: Result<EmployeePage, ApiError>,
    ) -> bool {
        if token.0 != self.latest_token {
            debug!("discarding stale fetch {:?} (latest {})", token, self.latest_token);
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.employees = page.employees;
                self.batch_loaded = true;
                self.last_source = Some(page.source);
                self.error = None;
            }
            Err(e) => {
                warn!("employee fetch failed: {}", e);
                self.error = Some(e.user_message());
            }
        }
        true
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // ========================
    // Preferences
    // ========================

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Flip light/dark and return the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn follow_system_theme(&self) -> bool {
        self.follow_system_theme
    }

    pub fn set_follow_system_theme(&mut self, follow: bool) {
        self.follow_system_theme = follow;
    }

    /// Theme to render, given whether the OS currently prefers dark
    pub fn effective_theme(&self, system_prefers_dark: bool) -> Theme {
        match (self.follow_system_theme, system_prefers_dark) {
            (true, true) => Theme::Dark,
            (true, false) => Theme::Light,
            (false, _) => self.theme,
        }
    }

    /// Default page size, no sort, page 1. Filters and bookmarks stay.
    pub fn reset_preferences(&mut self) {
        self.filters.sort = None;
        self.pagination = Pagination::default();
    }

    /// Drop bookmarks, filters and preferences. The loaded employees and
    /// the theme stay.
    pub fn clear_stored_data(&mut self) {
        self.clear_bookmarks();
        self.clear_filters();
        self.reset_preferences();
    }

    // ========================
    // Persistence
    // ========================

    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            bookmarked_ids: self.bookmarked_ids.clone(),
            search_term: self.filters.search_term.clone(),
            department: self.filters.department,
            performance_rating: self.filters.performance_rating,
            items_per_page: self.pagination.items_per_page,
            theme: self.theme,
            follow_system_theme: self.follow_system_theme,
        }
    }

    pub fn hydrate(&mut self, persisted: PersistedState) {
        self.bookmarked_ids = persisted.bookmarked_ids;
        self.filters.search_term = persisted.search_term;
        self.filters.department = persisted.department;
        self.filters.performance_rating = persisted.performance_rating;
        self.pagination = Pagination::new(1, persisted.items_per_page);
        self.theme = persisted.theme;
        self.follow_system_theme = persisted.follow_system_theme;
    }
}
