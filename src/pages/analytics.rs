//! Analytics Page
//!
//! Headline numbers plus department, rating, age and salary breakdowns.

use leptos::prelude::*;

use hr_core::stats::{RangeCount, WorkforceStats};

use crate::components::{RatingStars, StatusBanner};
use crate::context::use_app_context;
use crate::store::{ensure_loaded, use_app_store, AppStateStoreFields};

fn format_money(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}

#[component]
fn StatTile(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{move || value.get()}</span>
        </div>
    }
}

/// Horizontal bar chart of (label, count, percentage) rows
#[component]
fn BarList(title: &'static str, #[prop(into)] rows: Signal<Vec<(String, usize, f64)>>) -> impl IntoView {
    view! {
        <div class="bar-list">
            <h3>{title}</h3>
            <For
                each=move || rows.get()
                key=|row| row.0.clone()
                children=|(label, count, percentage)| view! {
                    <div class="bar-row">
                        <span class="bar-label">{label}</span>
                        <div class="bar-track">
                            <div class="bar-fill" style=format!("width: {:.1}%", percentage)></div>
                        </div>
                        <span class="bar-count">{count}</span>
                    </div>
                }
            />
        </div>
    }
}

fn range_rows(ranges: &[RangeCount], total: usize) -> Vec<(String, usize, f64)> {
    ranges
        .iter()
        .map(|r| {
            let percentage = if total == 0 { 0.0 } else { r.count as f64 / total as f64 * 100.0 };
            (r.label.to_string(), r.count, percentage)
        })
        .collect()
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    ensure_loaded(store);

    let stats = Memo::new(move |_| store.directory().read().stats());
    let text = move |f: fn(&WorkforceStats) -> String| Signal::derive(move || stats.with(f));

    let departments = Signal::derive(move || {
        stats.with(|s| {
            s.department_breakdown
                .iter()
                .map(|d| (d.department.as_str().to_string(), d.count, d.percentage))
                .collect::<Vec<_>>()
        })
    });
    let ratings = Signal::derive(move || {
        stats.with(|s| {
            s.rating_breakdown
                .iter()
                .map(|r| (format!("{} - {}", r.rating.value(), r.rating.label()), r.count, r.percentage))
                .collect::<Vec<_>>()
        })
    });
    let ages = Signal::derive(move || stats.with(|s| range_rows(&s.age_ranges, s.total_employees)));
    let salaries = Signal::derive(move || stats.with(|s| range_rows(&s.salary_ranges, s.total_employees)));

    view! {
        <section class="page analytics-page">
            <header class="page-header">
                <h1>"Workforce Analytics"</h1>
            </header>
            <StatusBanner />
            <div class="stat-tiles">
                <StatTile label="Employees" value=text(|s| s.total_employees.to_string()) />
                <StatTile label="Bookmarked" value=text(|s| s.total_bookmarked.to_string()) />
                <StatTile label="Average rating" value=text(|s| format!("{:.1}", s.average_rating)) />
                <StatTile label="Average salary" value=text(|s| format_money(s.average_salary)) />
                <StatTile label="Median salary" value=text(|s| format_money(s.salary.median)) />
                <StatTile label="Departments" value=text(|s| s.active_departments.to_string()) />
                <StatTile
                    label="Largest department"
                    value=text(|s| {
                        s.largest_department()
                            .map(|d| format!("{} ({})", d.department.as_str(), d.count))
                            .unwrap_or_else(|| "-".to_string())
                    })
                />
                <StatTile
                    label="High performers"
                    value=text(|s| format!("{} ({}%)", s.insights.high, s.insights.high_percentage))
                />
            </div>
            <div class="analytics-charts">
                <BarList title="By department" rows=departments />
                <BarList title="By rating" rows=ratings />
                <BarList title="By age" rows=ages />
                <BarList title="By salary" rows=salaries />
            </div>
            <div class="top-performers">
                <h3>"Top performers"</h3>
                <For
                    each=move || stats.with(|s| s.top_performers.clone())
                    key=|e| e.id.clone()
                    children=move |employee| {
                        let id = employee.id.clone();
                        view! {
                            <button class="top-performer" on:click=move |_| ctx.open_employee(&id)>
                                <span class="top-performer-name">{employee.full_name()}</span>
                                <span class="top-performer-department">{employee.department.as_str()}</span>
                                <RatingStars rating=employee.performance_rating />
                            </button>
                        }
                    }
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(0), "$0");
        assert_eq!(format_money(950), "$950");
        assert_eq!(format_money(70_000), "$70,000");
        assert_eq!(format_money(1_234_567), "$1,234,567");
    }
}
