//! API Access
//!
//! Fetches employees from the optional backend, falling back to DummyJSON.
//! The browser-specific HTTP work sits behind [`HttpTransport`].

mod client;
mod config;
mod error;
mod transport;

pub use client::{DataSource, EmployeeApi, EmployeePage, PageRequest};
pub use config::ApiConfig;
pub use error::ApiError;
pub use transport::{HttpResponse, HttpTransport};
