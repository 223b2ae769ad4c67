//! HTTP Transport Seam
//!
//! The client only needs GET and a timer. The browser implementation lives
//! in the UI crate; tests script responses.

use std::time::Duration;

use async_trait::async_trait;

use super::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Single-threaded (browser event loop), hence `?Send`
#[async_trait(?Send)]
pub trait HttpTransport {
    /// GET `url`. Any HTTP status is `Ok`; `Err` is reserved for timeouts and
    /// transport failures.
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, ApiError>;

    /// Wait between retry attempts
    async fn sleep(&self, duration: Duration);
}
