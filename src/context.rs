//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

/// Top-level views
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Directory,
    Bookmarks,
    Analytics,
    Settings,
    /// Detail view for one employee id
    Employee(String),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Page to return to from the detail view - read
    pub previous_page: ReadSignal<Page>,
    /// Page to return to from the detail view - write
    set_previous_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        previous_page: (ReadSignal<Page>, WriteSignal<Page>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            previous_page: previous_page.0,
            set_previous_page: previous_page.1,
        }
    }

    pub fn navigate(&self, page: Page) {
        let current = self.page.get_untracked();
        if !matches!(current, Page::Employee(_)) {
            self.set_previous_page.set(current);
        }
        self.set_page.set(page);
    }

    pub fn open_employee(&self, id: &str) {
        self.navigate(Page::Employee(id.to_string()));
    }

    /// Leave the detail view for wherever it was opened from
    pub fn back(&self) {
        self.set_page.set(self.previous_page.get_untracked());
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
