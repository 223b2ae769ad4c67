//! Navigation Bar Component

use leptos::prelude::*;
use log::info;

use crate::context::{use_app_context, Page};
use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};

/// Top navigation with the bookmark count badge
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let bookmark_count = move || store.directory().read().bookmarked_employees().len();

    let tab = move |page: Page, label: &'static str| {
        let target = page.clone();
        let tab_class = move || {
            if ctx.page.get() == page { "nav-tab active" } else { "nav-tab" }
        };
        view! {
            <button class=tab_class on:click=move |_| ctx.navigate(target.clone())>
                {label}
            </button>
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-title">"HR Dashboard"</span>
            <div class="nav-tabs">
                {tab(Page::Directory, "Directory")}
                <div class="nav-tab-with-badge">
                    {tab(Page::Bookmarks, "Bookmarks")}
                    <Show when=move || { bookmark_count() > 0 }>
                        <span class="nav-badge">{bookmark_count}</span>
                    </Show>
                </div>
                {tab(Page::Analytics, "Analytics")}
                {tab(Page::Settings, "Settings")}
            </div>
            <button class="theme-toggle" title="Toggle theme" on:click=move |_| {
                let theme = store_toggle_theme(&store);
                info!("theme switched to {}", theme.as_str());
            }>
                {move || if store.directory().read().theme().is_dark() { "☾" } else { "☀" }}
            </button>
        </nav>
    }
}
