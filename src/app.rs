//! HR Dashboard App
//!
//! Shell: navigation bar over the current page.

use leptos::prelude::*;
use log::warn;
use reactive_stores::Store;

use crate::components::NavBar;
use crate::context::{AppContext, Page};
use crate::browser;
use crate::pages::{AnalyticsPage, BookmarksPage, DirectoryPage, EmployeeDetailPage, SettingsPage};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Store seeded from local storage; employees load when a page mounts
    let store = Store::new(AppState::restored());
    provide_context(store);

    Effect::new(move |_| {
        let theme = store.directory().read().effective_theme(browser::system_prefers_dark());
        if let Err(e) = browser::apply_theme(theme) {
            warn!("could not apply theme: {}", e);
        }
    });

    let (page, set_page) = signal(Page::Directory);
    let (previous_page, set_previous_page) = signal(Page::Directory);
    provide_context(AppContext::new((page, set_page), (previous_page, set_previous_page)));

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match page.get() {
                    Page::Directory => view! { <DirectoryPage /> }.into_any(),
                    Page::Bookmarks => view! { <BookmarksPage /> }.into_any(),
                    Page::Analytics => view! { <AnalyticsPage /> }.into_any(),
                    Page::Settings => view! { <SettingsPage /> }.into_any(),
                    Page::Employee(id) => view! { <EmployeeDetailPage id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
