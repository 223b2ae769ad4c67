//! Employee Detail Page
//!
//! Overview, projects, feedback and certifications tabs for one employee.
//! Uses the loaded record when present, otherwise fetches it by id.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use hr_core::Employee;

use crate::api;
use crate::components::RatingStars;
use crate::context::use_app_context;
use crate::store::{store_add_employee, store_toggle_bookmark, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailTab {
    Overview,
    Projects,
    Feedback,
    Certifications,
}

impl DetailTab {
    const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Projects,
        DetailTab::Feedback,
        DetailTab::Certifications,
    ];

    fn label(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Projects => "Projects",
            DetailTab::Feedback => "Feedback",
            DetailTab::Certifications => "Certifications",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Lookup {
    Loading,
    Missing,
    Failed(String),
}

#[component]
pub fn EmployeeDetailPage(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (tab, set_tab) = signal(DetailTab::Overview);
    let (lookup, set_lookup) = signal(Lookup::Loading);

    let employee = {
        let id = id.clone();
        Memo::new(move |_| store.directory().read().employee_by_id(&id).cloned())
    };

    if employee.get_untracked().is_none() {
        let id = id.clone();
        spawn_local(async move {
            match api::load_employee(&id).await {
                Ok(Some(found)) => store_add_employee(&store, found),
                Ok(None) => set_lookup.set(Lookup::Missing),
                Err(e) => {
                    warn!("loading employee {} failed: {}", id, e);
                    set_lookup.set(Lookup::Failed(e.user_message()));
                }
            }
        });
    }

    let is_bookmarked = {
        let id = id.clone();
        Memo::new(move |_| store.directory().read().is_bookmarked(&id))
    };
    let bookmark_id = id.clone();
    let toggle_bookmark = move |_| {
        store_toggle_bookmark(&store, &bookmark_id);
    };
    let edit_id = id.clone();
    let on_edit = move |_| info!("edit requested for employee {} (not implemented)", edit_id);
    let delete_id = id;
    let on_delete = move |_| info!("delete requested for employee {} (not implemented)", delete_id);

    view! {
        <section class="page detail-page">
            <button class="back-btn" on:click=move |_| ctx.back()>"← Back"</button>
            {move || match employee.get() {
                None => match lookup.get() {
                    Lookup::Loading => view! { <p class="detail-status">"Loading employee..."</p> }.into_any(),
                    Lookup::Missing => view! { <p class="detail-status">"Employee not found."</p> }.into_any(),
                    Lookup::Failed(message) => view! {
                        <div class="status-banner error" role="alert">{message}</div>
                    }.into_any(),
                },
                Some(e) => {
                    let shown = e.clone();
                    view! {
                    <header class="detail-header">
                        <div class="card-avatar initials">{e.initials()}</div>
                        <div class="detail-identity">
                            <h1>{e.full_name()}</h1>
                            <span>{format!("{} · {}", e.department.as_str(), e.status.label())}</span>
                            <RatingStars rating=e.performance_rating />
                        </div>
                    </header>
                    <div class="detail-tabs">
                        {DetailTab::ALL.into_iter().map(|t| view! {
                            <button
                                class=move || if tab.get() == t { "detail-tab active" } else { "detail-tab" }
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }).collect_view()}
                    </div>
                    {move || match tab.get() {
                        DetailTab::Overview => overview(&shown).into_any(),
                        DetailTab::Projects => projects(&shown).into_any(),
                        DetailTab::Feedback => feedback(&shown).into_any(),
                        DetailTab::Certifications => certifications(&shown).into_any(),
                    }}
                    }.into_any()
                }
            }}
            <div class="detail-actions">
                <button
                    class=move || if is_bookmarked.get() { "card-btn bookmark active" } else { "card-btn bookmark" }
                    on:click=toggle_bookmark
                >
                    {move || if is_bookmarked.get() { "★ Bookmarked" } else { "☆ Bookmark" }}
                </button>
                <button class="card-btn edit" on:click=on_edit>"Edit"</button>
                <button class="card-btn delete" on:click=on_delete>"Delete"</button>
            </div>
        </section>
    }
}

fn overview(e: &Employee) -> impl IntoView {
    let address = format!(
        "{}, {}, {} {}, {}",
        e.address.street, e.address.city, e.address.state, e.address.zip_code, e.address.country
    );
    let contact = &e.emergency_contact;
    view! {
        <dl class="detail-overview">
            <dt>"Email"</dt><dd>{e.email.clone()}</dd>
            <dt>"Phone"</dt><dd>{e.phone.clone()}</dd>
            <dt>"Age"</dt><dd>{e.age}</dd>
            <dt>"Address"</dt><dd>{address}</dd>
            <dt>"Hired"</dt><dd>{e.hire_date.format("%b %-d, %Y").to_string()}</dd>
            <dt>"Salary"</dt><dd>{format!("${}", e.salary)}</dd>
            <dt>"Skills"</dt><dd>{e.skills.join(", ")}</dd>
            <dt>"Emergency contact"</dt>
            <dd>{format!("{} ({}), {}", contact.name, contact.relationship, contact.phone)}</dd>
        </dl>
        <p class="detail-bio">{e.bio.clone()}</p>
    }
}

fn projects(e: &Employee) -> impl IntoView {
    let rows = e
        .project_history
        .iter()
        .map(|p| {
            let period = match p.end_date {
                Some(end) => format!("{} to {}", p.start_date, end),
                None => format!("since {}", p.start_date),
            };
            view! {
                <li class="detail-project">
                    <strong>{p.name.clone()}</strong>
                    <span class="project-status">{p.status.label()}</span>
                    <p>{p.description.clone()}</p>
                    <span>{format!("{} · {}", p.role, period)}</span>
                    <span class="project-tech">{p.technologies.join(", ")}</span>
                </li>
            }
        })
        .collect_view();
    view! { <ul class="detail-list">{rows}</ul> }
}

fn feedback(e: &Employee) -> impl IntoView {
    let average = e
        .average_feedback_rating()
        .map(|avg| format!("Average {:.1} / 5", avg))
        .unwrap_or_else(|| "No feedback yet".to_string());
    let rows = e
        .feedback
        .iter()
        .map(|f| view! {
            <li class="detail-feedback">
                <span class="feedback-category">{f.category.label()}</span>
                <RatingStars rating=f.rating />
                <p>{f.message.clone()}</p>
                <span class="feedback-date">{f.date.to_string()}</span>
            </li>
        })
        .collect_view();
    view! {
        <p class="feedback-average">{average}</p>
        <ul class="detail-list">{rows}</ul>
    }
}

fn certifications(e: &Employee) -> impl IntoView {
    let rows = e
        .certifications
        .iter()
        .map(|c| view! {
            <li class="detail-certification">
                <strong>{c.name.clone()}</strong>
                <span>{format!("{} · {}", c.issuer, c.category)}</span>
                <span>{format!("Issued {} · {}", c.issue_date, c.credential_id)}</span>
            </li>
        })
        .collect_view();
    view! { <ul class="detail-list">{rows}</ul> }
}
