//! Search & Filter Bar Component
//!
//! Free-text search, department and rating filters, and the sort selector.
//! Every change goes through the store, which resets to page 1.

use leptos::prelude::*;

use hr_core::query::{SortDirection, SortField, SortOrder};
use hr_core::{Department, PerformanceRating};

use crate::store::{
    store_clear_filters, store_set_department, store_set_rating, store_set_search_term,
    store_set_sort, use_app_store, AppStateStoreFields,
};

fn sort_key(sort: Option<SortOrder>) -> String {
    match sort {
        None => String::new(),
        Some(order) => {
            let direction = match order.direction {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            };
            format!("{}:{}", order.field.as_str(), direction)
        }
    }
}

fn parse_sort_key(raw: &str) -> Option<SortOrder> {
    let (field, direction) = raw.split_once(':')?;
    let field = SortField::parse(field)?;
    match direction {
        "asc" => Some(SortOrder::asc(field)),
        "desc" => Some(SortOrder::desc(field)),
        _ => None,
    }
}

#[component]
pub fn SearchFilters() -> impl IntoView {
    let store = use_app_store();

    let search_term = move || store.directory().read().filters().search_term.clone();
    let department_value = move || {
        store.directory().read().filters().department
            .map(|d| d.as_str().to_string())
            .unwrap_or_default()
    };
    let rating_value = move || {
        store.directory().read().filters().performance_rating
            .map(|r| r.value().to_string())
            .unwrap_or_default()
    };
    let sort_value = move || sort_key(store.directory().read().filters().sort);
    let has_filters = move || store.directory().read().filters().is_active();

    let departments = move || store.directory().read().available_departments();
    let ratings = move || store.directory().read().available_ratings();

    let sort_options: Vec<(String, String)> = SortField::ALL
        .iter()
        .flat_map(|field| {
            [
                (sort_key(Some(SortOrder::asc(*field))), format!("{} (ascending)", field.label())),
                (sort_key(Some(SortOrder::desc(*field))), format!("{} (descending)", field.label())),
            ]
        })
        .collect();

    view! {
        <div class="search-filters">
            <input
                type="search"
                class="search-input"
                placeholder="Search by name, email, department or skill..."
                prop:value=search_term
                on:input=move |ev| store_set_search_term(&store, event_target_value(&ev))
            />

            <select
                class="filter-select"
                prop:value=department_value
                on:change=move |ev| {
                    let department = event_target_value(&ev).parse::<Department>().ok();
                    store_set_department(&store, department);
                }
            >
                <option value="">"All departments"</option>
                <For
                    each=departments
                    key=|d| *d
                    children=move |d| view! { <option value=d.as_str()>{d.as_str()}</option> }
                />
            </select>

            <select
                class="filter-select"
                prop:value=rating_value
                on:change=move |ev| {
                    let rating = event_target_value(&ev)
                        .parse::<u8>()
                        .ok()
                        .and_then(|v| PerformanceRating::new(v).ok());
                    store_set_rating(&store, rating);
                }
            >
                <option value="">"All ratings"</option>
                <For
                    each=ratings
                    key=|r| *r
                    children=move |r| view! {
                        <option value=r.value().to_string()>
                            {format!("{} - {}", r.value(), r.label())}
                        </option>
                    }
                />
            </select>

            <select
                class="filter-select"
                prop:value=sort_value
                on:change=move |ev| store_set_sort(&store, parse_sort_key(&event_target_value(&ev)))
            >
                <option value="">"Unsorted"</option>
                {sort_options.into_iter().map(|(value, label)| view! {
                    <option value=value>{label}</option>
                }).collect_view()}
            </select>

            <Show when=has_filters>
                <button class="clear-filters-btn" on:click=move |_| store_clear_filters(&store)>
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}
