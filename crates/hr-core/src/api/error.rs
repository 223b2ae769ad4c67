//! API Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    #[error("HTTP error {status} from {url}")]
    Status { status: u16, url: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("all data sources failed (backend: {primary}; fallback: {fallback})")]
    Unavailable {
        primary: Box<ApiError>,
        fallback: Box<ApiError>,
    },
    #[error("no data source is enabled")]
    Disabled,
}

impl ApiError {
    /// Only server-side failures are worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status >= 500)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Banner text for the dashboard
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Timeout(_) => "The employee service took too long to respond.".to_string(),
            ApiError::Status { status, .. } => {
                format!("The employee service returned an error (HTTP {}).", status)
            }
            ApiError::Network(_) => "Could not reach the employee service. Check your connection.".to_string(),
            ApiError::Decode(_) => "The employee service sent data we could not read.".to_string(),
            ApiError::Unavailable { fallback, .. } => fallback.user_message(),
            ApiError::Disabled => "No employee data source is configured.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_5xx_is_retryable() {
        let status = |status| ApiError::Status { status, url: "u".into() };
        assert!(status(500).is_retryable());
        assert!(status(503).is_retryable());
        assert!(!status(404).is_retryable());
        assert!(!status(429).is_retryable());
        assert!(!ApiError::Timeout(10).is_retryable());
        assert!(!ApiError::Network("reset".into()).is_retryable());
    }

    #[test]
    fn test_unavailable_reports_fallback_message() {
        let err = ApiError::Unavailable {
            primary: Box::new(ApiError::Timeout(10)),
            fallback: Box::new(ApiError::Network("offline".into())),
        };
        assert_eq!(err.user_message(), ApiError::Network(String::new()).user_message());
        assert!(err.to_string().contains("timed out"));
    }
}
