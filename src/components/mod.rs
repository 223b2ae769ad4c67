//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod search_filters;
mod employee_card;
mod employee_grid;
mod pagination_bar;
mod status_banner;
mod empty_state;

pub use nav_bar::NavBar;
pub use search_filters::SearchFilters;
pub use employee_card::{EmployeeCard, RatingStars};
pub use employee_grid::EmployeeGrid;
pub use pagination_bar::PaginationBar;
pub use status_banner::StatusBanner;
pub use empty_state::EmptyState;
