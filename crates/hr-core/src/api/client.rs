//! Employee API Client
//!
//! Routing: when the backend is enabled its `/health` endpoint is checked first and it is used;
//! any backend failure falls back to DummyJSON when the fallback is enabled.
//! Only 5xx responses are retried, with linear backoff.

use std::cell::RefCell;

use log::{debug, info, warn};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use super::config::ApiConfig;
use super::error::ApiError;
use super::transport::HttpTransport;
use crate::domain::{Department, Employee};
use crate::pagination::Pagination;
use crate::query::FilterCriteria;
use crate::transform::{DummyUser, DummyUsersResponse, Synthesizer};

/// A page of the directory as asked of the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
    pub search: Option<String>,
    pub department: Option<Department>,
}

impl PageRequest {
    /// Whole unfiltered batch of `limit` employees (the store filters locally)
    pub fn batch(limit: usize) -> Self {
        Self {
            page: 1,
            limit,
            search: None,
            department: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Backend,
    Mock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeePage {
    pub employees: Vec<Employee>,
    /// Matches across all pages
    pub total: usize,
    pub source: DataSource,
}

/// `GET /api/employees` envelope
#[derive(Debug, Deserialize)]
struct BackendPage {
    data: Vec<Employee>,
    total: usize,
}

pub struct EmployeeApi<T> {
    transport: T,
    config: ApiConfig,
    synthesizer: RefCell<Synthesizer>,
}

impl<T: HttpTransport> EmployeeApi<T> {
    pub fn new(transport: T, config: ApiConfig, synthesizer: Synthesizer) -> Self {
        let synthesizer = synthesizer.with_rating_band(config.rating_band);
        Self {
            transport,
            config,
            synthesizer: RefCell::new(synthesizer),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn fetch_page(&self, request: &PageRequest) -> Result<EmployeePage, ApiError> {
        if !self.config.backend_enabled {
            if !self.config.fallback_enabled {
                return Err(ApiError::Disabled);
            }
            return self.fetch_mock_page(request).await;
        }

        match self.fetch_backend_page(request).await {
            Ok(page) => Ok(page),
            Err(primary) if self.config.fallback_enabled => {
                warn!("backend unavailable ({}), falling back to DummyJSON", primary);
                self.fetch_mock_page(request).await.map_err(|fallback| {
                    ApiError::Unavailable {
                        primary: Box::new(primary),
                        fallback: Box::new(fallback),
                    }
                })
            }
            Err(primary) => Err(primary),
        }
    }

    /// One employee by id; `Ok(None)` when the source answers 404
    pub async fn fetch_employee(&self, id: &str) -> Result<Option<Employee>, ApiError> {
        let encoded_id = utf8_percent_encode(id, NON_ALPHANUMERIC).to_string();

        if self.config.backend_enabled {
            let url = self.config.backend_url(&format!("employees/{}", encoded_id));
            let backend = match self.get_with_retry(&url).await {
                Ok(body) => decode::<Employee>(&body).map(Some),
                Err(e) if e.is_not_found() => Ok(None),
                Err(e) => Err(e),
            };
            match backend {
                Err(primary) if self.config.fallback_enabled => {
                    warn!("backend lookup of {} failed ({}), trying DummyJSON", id, primary);
                }
                other => return other,
            }
        } else if !self.config.fallback_enabled {
            return Err(ApiError::Disabled);
        }

        let url = self.config.dummy_json_endpoint(&format!("users/{}", encoded_id));
        match self.get_with_retry(&url).await {
            Ok(body) => {
                let user: DummyUser = decode(&body)?;
                Ok(Some(self.synthesizer.borrow_mut().employee(&user)))
            }
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Liveness check; a single attempt, no retries
    pub async fn health_check(&self) -> Result<(), ApiError> {
        let url = self.config.backend_url("health");
        let response = self.transport.get(&url, self.config.timeout).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status { status: response.status, url })
        }
    }

    /// Raw DummyJSON users
    pub async fn fetch_users(&self, limit: usize) -> Result<Vec<DummyUser>, ApiError> {
        let url = self.config.dummy_json_endpoint(&format!("users?limit={}", limit));
        let body = self.get_with_retry(&url).await?;
        let envelope: DummyUsersResponse = decode(&body)?;
        debug!("DummyJSON returned {} of {} users", envelope.users.len(), envelope.total);
        Ok(envelope.users)
    }

    async fn fetch_backend_page(&self, request: &PageRequest) -> Result<EmployeePage, ApiError> {
        self.health_check().await?;

        let mut url = self.config.backend_url(&format!(
            "employees?page={}&limit={}",
            request.page, request.limit
        ));
        if let Some(search) = request.search.as_deref().filter(|s| !s.trim().is_empty()) {
            url.push_str("&search=");
            url.push_str(&utf8_percent_encode(search.trim(), NON_ALPHANUMERIC).to_string());
        }
        if let Some(department) = request.department {
            url.push_str("&department=");
            url.push_str(&utf8_percent_encode(department.as_str(), NON_ALPHANUMERIC).to_string());
        }

        let body = self.get_with_retry(&url).await?;
        let page: BackendPage = decode(&body)?;
        info!("loaded {} employees from backend", page.data.len());
        Ok(EmployeePage {
            employees: page.data,
            total: page.total,
            source: DataSource::Backend,
        })
    }

    /// DummyJSON has no HR fields to filter on, so filtering and paging
    /// happen here after synthesis.
    async fn fetch_mock_page(&self, request: &PageRequest) -> Result<EmployeePage, ApiError> {
        let limit = self.config.fetch_limit.max(request.limit);
        let users = self.fetch_users(limit).await?;
        let employees = self.synthesizer.borrow_mut().employees(&users);

        let criteria = FilterCriteria {
            search_term: request.search.clone().unwrap_or_default(),
            department: request.department,
            ..Default::default()
        };
        let matching = criteria.apply(&employees);
        let total = matching.len();
        let page = Pagination::new(request.page, request.limit).slice(&matching).to_vec();
        info!("loaded {} employees from DummyJSON ({} matching)", page.len(), total);

        Ok(EmployeePage {
            employees: page,
            total,
            source: DataSource::Mock,
        })
    }

    async fn get_with_retry(&self, url: &str) -> Result<String, ApiError> {
        let mut attempt: u32 = 0;
        loop {
            let response = self.transport.get(url, self.config.timeout).await?;
            if response.is_success() {
                return Ok(response.body);
            }

            let error = ApiError::Status {
                status: response.status,
                url: url.to_string(),
            };
            if !error.is_retryable() || attempt >= self.config.max_retries {
                return Err(error);
            }
            attempt += 1;
            let delay = self.config.retry_delay * attempt;
            warn!("{}; retry {}/{} in {:?}", error, attempt, self.config.max_retries, delay);
            self.transport.sleep(delay).await;
        }
    }
}

fn decode<D: serde::de::DeserializeOwned>(body: &str) -> Result<D, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpResponse;
    use crate::fixtures::employee;
    use crate::transform::DummyAddress;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Replays scripted results in order and records what was asked
    #[derive(Default)]
    struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        requested: RefCell<Vec<String>>,
        slept: RefCell<Vec<Duration>>,
    }

    impl ScriptedTransport {
        fn with(replies: Vec<Result<HttpResponse, ApiError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                ..Default::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl<'a> HttpTransport for &'a ScriptedTransport {
        async fn get(&self, url: &str, _timeout: Duration) -> Result<HttpResponse, ApiError> {
            self.requested.borrow_mut().push(url.to_string());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".into())))
        }

        async fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }
    }

    fn dummy_user(id: u32, first: &str) -> DummyUser {
        DummyUser {
            id,
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@dummyjson.test", first.to_lowercase()),
            age: 35,
            phone: "+1 555".to_string(),
            image: String::new(),
            address: DummyAddress {
                address: "1 Road".to_string(),
                city: "Town".to_string(),
                state: "State".to_string(),
                postal_code: "00001".to_string(),
            },
        }
    }

    fn users_body(names: &[&str]) -> String {
        let users: Vec<DummyUser> = names
            .iter()
            .enumerate()
            .map(|(i, n)| dummy_user(i as u32 + 1, n))
            .collect();
        let total = users.len() as u32;
        serde_json::to_string(&DummyUsersResponse { users, total, skip: 0, limit: total }).unwrap()
    }

    fn ok(body: impl Into<String>) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse::new(200, body))
    }

    fn status(code: u16) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse::new(code, ""))
    }

    fn config() -> ApiConfig {
        ApiConfig {
            backend_base_url: "https://backend.test/api".into(),
            dummy_json_url: "https://dummy.test".into(),
            retry_delay: Duration::from_millis(100),
            ..Default::default()
        }
    }

    fn api(transport: &ScriptedTransport, config: ApiConfig) -> EmployeeApi<&ScriptedTransport> {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        EmployeeApi::new(transport, config, Synthesizer::new(9, today))
    }

    #[test]
    fn test_mock_batch() {
        let transport = ScriptedTransport::with(vec![ok(users_body(&["Ann", "Ben", "Cat"]))]);
        let page = block_on(api(&transport, config()).fetch_page(&PageRequest::batch(20))).unwrap();

        assert_eq!(page.source, DataSource::Mock);
        assert_eq!(page.total, 3);
        let ids: Vec<&str> = page.employees.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(*transport.requested.borrow(), vec!["https://dummy.test/users?limit=20"]);
    }

    #[test]
    fn test_mock_page_filters_and_paginates_locally() {
        let transport = ScriptedTransport::with(vec![ok(users_body(&["Ann", "Anna", "Ben", "Annie"]))]);
        let request = PageRequest {
            page: 2,
            limit: 2,
            search: Some("ann".into()),
            department: None,
        };
        let page = block_on(api(&transport, config()).fetch_page(&request)).unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.employees.len(), 1);
        assert_eq!(page.employees[0].first_name, "Annie");
    }

    #[test]
    fn test_retries_5xx_with_linear_backoff() {
        let transport = ScriptedTransport::with(vec![
            status(503),
            status(502),
            ok(users_body(&["Ann"])),
        ]);
        let page = block_on(api(&transport, config()).fetch_page(&PageRequest::batch(20))).unwrap();

        assert_eq!(page.employees.len(), 1);
        assert_eq!(transport.requested.borrow().len(), 3);
        assert_eq!(
            *transport.slept.borrow(),
            vec![Duration::from_millis(100), Duration::from_millis(200)]
        );
    }

    #[test]
    fn test_gives_up_after_max_retries() {
        let transport = ScriptedTransport::with(vec![status(500); 10]);
        let err = block_on(api(&transport, config()).fetch_page(&PageRequest::batch(20))).unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(transport.requested.borrow().len(), 4);
    }

    #[test]
    fn test_4xx_and_timeouts_are_not_retried() {
        let transport = ScriptedTransport::with(vec![status(404), ok(users_body(&["Ann"]))]);
        let err = block_on(api(&transport, config()).fetch_page(&PageRequest::batch(20))).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(transport.requested.borrow().len(), 1);

        let transport = ScriptedTransport::with(vec![Err(ApiError::Timeout(10_000)), ok(users_body(&["Ann"]))]);
        let err = block_on(api(&transport, config()).fetch_page(&PageRequest::batch(20))).unwrap_err();
        assert_eq!(err, ApiError::Timeout(10_000));
        assert!(transport.slept.borrow().is_empty());
    }

    #[test]
    fn test_backend_used_when_healthy() {
        let body = serde_json::json!({
            "data": [employee("42", Department::CustomerSupport, 4)],
            "total": 9,
            "page": 2,
            "limit": 5,
        })
        .to_string();
        let transport = ScriptedTransport::with(vec![ok("{\"status\":\"ok\"}"), ok(body)]);
        let request = PageRequest {
            page: 2,
            limit: 5,
            search: Some("a b".into()),
            department: Some(Department::CustomerSupport),
        };
        let config = ApiConfig { backend_enabled: true, ..config() };
        let page = block_on(api(&transport, config).fetch_page(&request)).unwrap();

        assert_eq!(page.source, DataSource::Backend);
        assert_eq!(page.total, 9);
        assert_eq!(page.employees[0].id, "42");
        assert_eq!(
            *transport.requested.borrow(),
            vec![
                "https://backend.test/api/health",
                "https://backend.test/api/employees?page=2&limit=5&search=a%20b&department=Customer%20Support",
            ]
        );
    }

    #[test]
    fn test_unhealthy_backend_falls_back() {
        let transport = ScriptedTransport::with(vec![
            Err(ApiError::Network("connection refused".into())),
            ok(users_body(&["Ann", "Ben"])),
        ]);
        let config = ApiConfig { backend_enabled: true, ..config() };
        let page = block_on(api(&transport, config).fetch_page(&PageRequest::batch(20))).unwrap();

        assert_eq!(page.source, DataSource::Mock);
        assert_eq!(page.employees.len(), 2);
    }

    #[test]
    fn test_both_sources_failing_is_unavailable() {
        let transport = ScriptedTransport::with(vec![status(503), status(404)]);
        let config = ApiConfig { backend_enabled: true, ..config() };
        let err = block_on(api(&transport, config).fetch_page(&PageRequest::batch(20))).unwrap_err();

        match err {
            ApiError::Unavailable { primary, fallback } => {
                assert!(matches!(*primary, ApiError::Status { status: 503, .. }));
                assert!(fallback.is_not_found());
            }
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_backend_failure_without_fallback_surfaces() {
        let transport = ScriptedTransport::with(vec![status(500)]);
        let config = ApiConfig { backend_enabled: true, fallback_enabled: false, ..config() };
        let err = block_on(api(&transport, config).fetch_page(&PageRequest::batch(20))).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn test_no_sources_enabled() {
        let transport = ScriptedTransport::default();
        let config = ApiConfig { fallback_enabled: false, ..config() };
        let err = block_on(api(&transport, config).fetch_page(&PageRequest::batch(20))).unwrap_err();
        assert_eq!(err, ApiError::Disabled);
        assert!(transport.requested.borrow().is_empty());
    }

    #[test]
    fn test_fetch_employee_from_mock() {
        let user = serde_json::to_string(&dummy_user(7, "Gus")).unwrap();
        let transport = ScriptedTransport::with(vec![ok(user), status(404)]);
        let api = api(&transport, config());

        let found = block_on(api.fetch_employee("7")).unwrap().unwrap();
        assert_eq!(found.id, "7");
        assert_eq!(found.first_name, "Gus");
        assert_eq!(block_on(api.fetch_employee("999")).unwrap(), None);
        assert_eq!(transport.requested.borrow()[0], "https://dummy.test/users/7");
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let transport = ScriptedTransport::with(vec![ok("{\"users\": 5}")]);
        let err = block_on(api(&transport, config()).fetch_page(&PageRequest::batch(20))).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
