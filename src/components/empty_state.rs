//! Empty State Component

use leptos::prelude::*;

/// Placeholder card with one corrective action
#[component]
pub fn EmptyState(
    title: &'static str,
    message: &'static str,
    action_label: &'static str,
    on_action: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>{title}</h3>
            <p>{message}</p>
            <button class="empty-state-action" on:click=move |_| on_action.run(())>
                {action_label}
            </button>
        </div>
    }
}
