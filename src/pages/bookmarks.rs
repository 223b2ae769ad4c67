//! Bookmarks Page

use leptos::prelude::*;
use log::info;

use crate::components::{EmployeeGrid, EmptyState, StatusBanner};
use crate::context::{use_app_context, Page};
use crate::store::{ensure_loaded, store_clear_bookmarks, use_app_store, AppStateStoreFields};

#[component]
pub fn BookmarksPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    ensure_loaded(store);

    let bookmarked = Signal::derive(move || store.directory().read().bookmarked_employees());
    let count = move || bookmarked.with(|b| b.len());

    let on_browse = Callback::new(move |_: ()| ctx.navigate(Page::Directory));
    let clear_all = move |_| {
        info!("clearing {} bookmarks", count());
        store_clear_bookmarks(&store);
    };

    view! {
        <section class="page bookmarks-page">
            <header class="page-header">
                <h1>"Bookmarked Employees"</h1>
                <p class="page-summary">{move || format!("{} bookmarked", count())}</p>
                <Show when=move || { count() > 0 }>
                    <button class="clear-bookmarks-btn" on:click=clear_all>"Clear all"</button>
                </Show>
            </header>
            <StatusBanner />
            <Show
                when=move || { count() > 0 }
                fallback=move || view! {
                    <EmptyState
                        title="No bookmarks yet"
                        message="Bookmark employees from the directory to keep them here."
                        action_label="Browse directory"
                        on_action=on_browse
                    />
                }
            >
                <EmployeeGrid employees=bookmarked />
            </Show>
        </section>
    }
}
