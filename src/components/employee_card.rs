//! Employee Card Component
//!
//! Summary tile used by the directory and bookmarks grids.

use leptos::prelude::*;

use hr_core::{Employee, PerformanceRating};

use crate::store::{use_app_store, AppStateStoreFields};

/// Five stars, filled up to the rating
#[component]
pub fn RatingStars(rating: PerformanceRating) -> impl IntoView {
    let stars: String = (PerformanceRating::MIN..=PerformanceRating::MAX)
        .map(|i| if i <= rating.value() { '★' } else { '☆' })
        .collect();
    view! {
        <span class="rating-stars" title=rating.label()>{stars}</span>
    }
}

/// Card with view / bookmark / promote actions. Only `on_bookmark` changes
/// state; promote is a placeholder.
#[component]
pub fn EmployeeCard(
    employee: Employee,
    on_view: Callback<String>,
    on_bookmark: Callback<String>,
    on_promote: Callback<String>,
) -> impl IntoView {
    let store = use_app_store();
    let id = employee.id.clone();

    let is_bookmarked = {
        let id = id.clone();
        Memo::new(move |_| store.directory().read().is_bookmarked(&id))
    };
    let bookmark_class = move || {
        if is_bookmarked.get() { "card-btn bookmark active" } else { "card-btn bookmark" }
    };

    let avatar = match &employee.avatar {
        Some(url) => view! { <img class="card-avatar" src=url.clone() alt="" /> }.into_any(),
        None => view! { <div class="card-avatar initials">{employee.initials()}</div> }.into_any(),
    };

    let view_id = id.clone();
    let bookmark_id = id.clone();
    let promote_id = id;

    view! {
        <div class="employee-card">
            <div class="card-header">
                {avatar}
                <div class="card-identity">
                    <h3 class="card-name">{employee.full_name()}</h3>
                    <span class="card-email">{employee.email.clone()}</span>
                </div>
            </div>
            <div class="card-body">
                <span class="card-department">{employee.department.as_str()}</span>
                <span class="card-age">{format!("Age {}", employee.age)}</span>
                <RatingStars rating=employee.performance_rating />
            </div>
            <div class="card-actions">
                <button class="card-btn view" on:click=move |_| on_view.run(view_id.clone())>
                    "View"
                </button>
                <button
                    class=bookmark_class
                    title=move || if is_bookmarked.get() { "Remove bookmark" } else { "Bookmark" }
                    on:click=move |_| on_bookmark.run(bookmark_id.clone())
                >
                    {move || if is_bookmarked.get() { "★" } else { "☆" }}
                </button>
                <button class="card-btn promote" on:click=move |_| on_promote.run(promote_id.clone())>
                    "Promote"
                </button>
            </div>
        </div>
    }
}
