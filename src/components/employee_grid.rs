//! Employee Grid Component
//!
//! Lays out cards and wires their actions to the store and navigation.

use leptos::prelude::*;
use log::info;

use hr_core::Employee;

use crate::components::EmployeeCard;
use crate::context::use_app_context;
use crate::store::{store_toggle_bookmark, use_app_store};

#[component]
pub fn EmployeeGrid(#[prop(into)] employees: Signal<Vec<Employee>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_view = Callback::new(move |id: String| ctx.open_employee(&id));
    let on_bookmark = Callback::new(move |id: String| {
        let bookmarked = store_toggle_bookmark(&store, &id);
        info!("employee {} bookmarked: {}", id, bookmarked);
    });
    let on_promote = Callback::new(move |id: String| {
        info!("promote requested for employee {} (not implemented)", id);
    });

    view! {
        <div class="employee-grid">
            <For
                each=move || employees.get()
                key=|e| e.id.clone()
                children=move |employee| view! {
                    <EmployeeCard
                        employee=employee
                        on_view=on_view
                        on_bookmark=on_bookmark
                        on_promote=on_promote
                    />
                }
            />
        </div>
    }
}
