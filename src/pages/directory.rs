//! Directory Page
//!
//! Search bar, the current page of cards and the pagination bar.

use leptos::prelude::*;

use crate::components::{EmployeeGrid, EmptyState, PaginationBar, SearchFilters, StatusBanner};
use crate::store::{ensure_loaded, store_clear_filters, use_app_store, AppStateStoreFields};

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let store = use_app_store();
    ensure_loaded(store);

    let employees = Signal::derive(move || store.directory().read().paginated_employees());
    let stats = move || store.directory().read().search_stats();
    let show_empty = move || {
        let directory = store.directory().read();
        !directory.is_loading() && directory.error().is_none() && !directory.search_stats().has_results()
    };
    let summary = move || {
        let stats = stats();
        if stats.is_filtered() {
            format!("{} of {} employees match", stats.filtered_count, stats.total_employees)
        } else {
            format!("{} employees", stats.total_employees)
        }
    };

    let on_clear = Callback::new(move |_: ()| store_clear_filters(&store));

    view! {
        <section class="page directory-page">
            <header class="page-header">
                <h1>"Employee Directory"</h1>
                <p class="page-summary">{summary}</p>
            </header>
            <SearchFilters />
            <StatusBanner />
            <Show
                when=move || !show_empty()
                fallback=move || view! {
                    <EmptyState
                        title="No employees found"
                        message="Nothing matches the current search and filters."
                        action_label="Clear filters"
                        on_action=on_clear
                    />
                }
            >
                <EmployeeGrid employees=employees />
                <PaginationBar />
            </Show>
        </section>
    }
}
