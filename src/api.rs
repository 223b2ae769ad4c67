//! Browser HTTP Access
//!
//! reqwest (fetch-backed on wasm32) behind the core `HttpTransport` seam,
//! with gloo timers for request deadlines and retry backoff.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use hr_core::api::{ApiError, EmployeeApi, EmployeePage, HttpResponse, HttpTransport, PageRequest};
use hr_core::transform::Synthesizer;
use hr_core::Employee;

use crate::config;

pub struct FetchTransport {
    client: reqwest::Client,
}

impl FetchTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn send(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(HttpResponse::new(status, body))
    }
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, ApiError> {
        let request = Box::pin(self.send(url));
        let deadline = Box::pin(TimeoutFuture::new(millis(timeout)));
        match select(request, deadline).await {
            Either::Left((result, _)) => result,
            // Dropping the request future aborts the fetch
            Either::Right(((), _)) => Err(ApiError::Timeout(timeout.as_millis() as u64)),
        }
    }

    async fn sleep(&self, duration: Duration) {
        TimeoutFuture::new(millis(duration)).await;
    }
}

/// Client for one load; the synthesizer is seeded from the clock
fn employee_api() -> EmployeeApi<FetchTransport> {
    let seed = js_sys::Date::now() as u64;
    let synthesizer = Synthesizer::new(seed, Utc::now().date_naive());
    EmployeeApi::new(FetchTransport::new(), config::api_config(), synthesizer)
}

/// Whole directory batch; the store filters and pages it locally
pub async fn load_directory() -> Result<EmployeePage, ApiError> {
    let api = employee_api();
    let request = PageRequest::batch(api.config().fetch_limit);
    api.fetch_page(&request).await
}

pub async fn load_employee(id: &str) -> Result<Option<Employee>, ApiError> {
    employee_api().fetch_employee(id).await
}
