//! Status Banner Component
//!
//! Loading indicator and the error banner with a retry button.

use leptos::prelude::*;

use crate::store::{fetch_employees, store_clear_error, use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();

    let loading = move || store.directory().read().is_loading();
    let error = move || store.directory().read().error().map(str::to_string);

    view! {
        <Show when=loading>
            <div class="status-banner loading">"Loading employees..."</div>
        </Show>
        {move || error().map(|message| view! {
            <div class="status-banner error" role="alert">
                <span class="status-message">{message}</span>
                <button class="retry-btn" on:click=move |_| fetch_employees(store)>"Retry"</button>
                <button class="dismiss-btn" on:click=move |_| store_clear_error(&store)>"✕"</button>
            </div>
        })}
    }
}
