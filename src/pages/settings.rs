//! Settings Page
//!
//! Appearance, directory export and the reset actions.

use chrono::Utc;
use leptos::prelude::*;
use log::{error, info};

use hr_core::export::{export_file_name, export_json};
use hr_core::PAGE_SIZE_OPTIONS;

use crate::browser;
use crate::store::{
    ensure_loaded, store_clear_stored_data, store_reset_preferences, store_set_follow_system_theme,
    store_set_items_per_page, store_toggle_theme, use_app_store, AppStateStoreFields,
};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_app_store();
    ensure_loaded(store);

    let (status, set_status) = signal(None::<String>);

    let is_dark = move || store.directory().read().theme().is_dark();
    let follow_system = move || store.directory().read().follow_system_theme();
    let employee_count = move || store.directory().read().employees().len();
    let bookmark_count = move || store.directory().read().bookmarked_ids().len();

    let export = move |_| {
        let now = Utc::now();
        let result = {
            let directory = store.directory().read_untracked();
            export_json(directory.employees(), now).map_err(|e| e.to_string())
        }
        .and_then(|json| {
            browser::download_text(&export_file_name(now.date_naive()), &json, "application/json")
        });
        match result {
            Ok(()) => {
                info!("exported {} employees", employee_count());
                set_status.set(Some("Export downloaded.".to_string()));
            }
            Err(e) => {
                error!("export failed: {}", e);
                set_status.set(Some("Export failed.".to_string()));
            }
        }
    };

    let clear_data = move |_| {
        store_clear_stored_data(&store);
        set_status.set(Some("Bookmarks, filters and preferences cleared.".to_string()));
    };
    let reset_preferences = move |_| {
        store_reset_preferences(&store);
        set_status.set(Some("Preferences reset.".to_string()));
    };

    view! {
        <section class="page settings-page">
            <header class="page-header">
                <h1>"Settings"</h1>
                <p class="page-summary">"Manage your dashboard preferences and data"</p>
            </header>

            <div class="settings-card">
                <h3>"Appearance"</h3>
                <label class="settings-row">
                    <span>"Dark mode"</span>
                    <input
                        type="checkbox"
                        prop:checked=is_dark
                        prop:disabled=follow_system
                        on:change=move |_| { store_toggle_theme(&store); }
                    />
                </label>
                <label class="settings-row">
                    <span>"Follow system theme"</span>
                    <input
                        type="checkbox"
                        prop:checked=follow_system
                        on:change=move |ev| store_set_follow_system_theme(&store, event_target_checked(&ev))
                    />
                </label>
            </div>

            <div class="settings-card">
                <h3>"Directory"</h3>
                <label class="settings-row">
                    <span>"Employees per page"</span>
                    <select
                        prop:value=move || store.directory().read().pagination().items_per_page.to_string()
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                store_set_items_per_page(&store, size);
                            }
                        }
                    >
                        {PAGE_SIZE_OPTIONS.iter().map(|size| view! {
                            <option value=size.to_string()>{*size}</option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <div class="settings-card">
                <h3>"Data"</h3>
                <p>{move || format!("{} employees loaded, {} bookmarked", employee_count(), bookmark_count())}</p>
                <div class="settings-actions">
                    <button
                        class="settings-btn"
                        disabled=move || employee_count() == 0
                        on:click=export
                    >
                        "Export JSON"
                    </button>
                    <button class="settings-btn" on:click=reset_preferences>"Reset preferences"</button>
                    <button class="settings-btn danger" on:click=clear_data>"Clear stored data"</button>
                </div>
                {move || status.get().map(|message| view! { <p class="settings-status">{message}</p> })}
            </div>
        </section>
    }
}
