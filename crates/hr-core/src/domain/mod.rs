//! Domain Layer
//!
//! Employee records and the closed vocabularies they are built from.
//! No I/O lives here (serde only, for the wire and storage formats).

mod department;
mod employee;
mod error;
mod rating;

pub use department::Department;
pub use employee::{
    Address, Certification, EmergencyContact, Employee, EmployeeStatus, Feedback,
    FeedbackCategory, Project, ProjectStatus,
};
pub use error::{DomainError, DomainResult};
pub use rating::PerformanceRating;
