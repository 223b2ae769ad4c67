//! HR Dashboard Core
//!
//! Everything the dashboard knows that does not touch the browser:
//! - domain: employee records and their closed vocabularies
//! - transform: DummyJSON users -> synthesized employee records
//! - query / pagination: filter, sort and page the directory
//! - state: the store behind every page
//! - stats: analytics aggregates
//! - persist: the local-storage slice of the store
//! - export: JSON download of the loaded directory
//! - api: HTTP access with retry and mock fallback

pub mod api;
pub mod domain;
pub mod export;
pub mod pagination;
pub mod persist;
pub mod query;
pub mod state;
pub mod stats;
pub mod transform;

pub use domain::{
    Address, Certification, Department, DomainError, DomainResult, EmergencyContact, Employee,
    EmployeeStatus, Feedback, FeedbackCategory, PerformanceRating, Project, ProjectStatus,
};
pub use pagination::{PageInfo, Pagination, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use query::{FilterCriteria, SortDirection, SortField, SortOrder};
pub use persist::Theme;
pub use state::{EmployeeState, FetchStatus, FetchToken};

#[cfg(test)]
pub(crate) mod fixtures;
