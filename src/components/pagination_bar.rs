//! Pagination Bar Component

use leptos::prelude::*;

use hr_core::PAGE_SIZE_OPTIONS;

use crate::store::{store_go_to_page, store_set_items_per_page, use_app_store, AppStateStoreFields};

/// Page numbers shown around the current page
const VISIBLE_PAGES: usize = 5;

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_app_store();

    let info = move || store.directory().read().page_info();
    let page_numbers = move || store.directory().read().page_numbers(VISIBLE_PAGES);
    let summary = move || {
        let info = info();
        format!("Showing {}-{} of {}", info.start_index, info.end_index, info.total_items)
    };

    view! {
        <div class="pagination-bar">
            <span class="pagination-summary">{summary}</span>

            <Show when=move || info().has_pagination()>
                <div class="pagination-pages">
                    <button
                        class="page-btn"
                        disabled=move || !info().can_go_previous
                        on:click=move |_| store_go_to_page(&store, info().current_page.saturating_sub(1))
                    >
                        "‹"
                    </button>
                    <For
                        each=page_numbers
                        key=|n| *n
                        children=move |n| {
                            let page_class = move || {
                                if info().current_page == n { "page-btn active" } else { "page-btn" }
                            };
                            view! {
                                <button class=page_class on:click=move |_| store_go_to_page(&store, n)>
                                    {n}
                                </button>
                            }
                        }
                    />
                    <button
                        class="page-btn"
                        disabled=move || !info().can_go_next
                        on:click=move |_| store_go_to_page(&store, info().current_page + 1)
                    >
                        "›"
                    </button>
                </div>
            </Show>

            <label class="page-size">
                "Per page "
                <select
                    prop:value=move || info().items_per_page.to_string()
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
    }
}
