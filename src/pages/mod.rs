//! Top-Level Pages

mod directory;
mod bookmarks;
mod analytics;
mod employee_detail;
mod settings;

pub use directory::DirectoryPage;
pub use bookmarks::BookmarksPage;
pub use analytics::AnalyticsPage;
pub use employee_detail::EmployeeDetailPage;
pub use settings::SettingsPage;
