//! API Configuration

use std::time::Duration;

use crate::transform::RatingBand;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Backend base url, including the `/api` prefix
    pub backend_base_url: String,
    pub dummy_json_url: String,
    pub timeout: Duration,
    /// Extra attempts after a 5xx response
    pub max_retries: u32,
    /// Backoff unit; attempt `n` waits `n * retry_delay`
    pub retry_delay: Duration,
    pub backend_enabled: bool,
    pub fallback_enabled: bool,
    /// Users requested per directory load
    pub fetch_limit: usize,
    pub rating_band: RatingBand,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend_base_url: "http://localhost:3001/api".into(),
            dummy_json_url: "https://dummyjson.com".into(),
            timeout: Duration::from_millis(10_000),
            max_retries: 3,
            retry_delay: Duration::from_millis(500),
            backend_enabled: false,
            fallback_enabled: true,
            fetch_limit: 20,
            rating_band: RatingBand::Full,
        }
    }
}

impl ApiConfig {
    /// Build from `HR_*` variables. Unset or unparsable values keep the
    /// default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str| {
            lookup(key)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
        };
        let number = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        let flag = |key: &str| lookup(key).and_then(|v| parse_flag(&v));

        Self {
            backend_base_url: text("HR_API_BASE_URL").unwrap_or(defaults.backend_base_url),
            dummy_json_url: text("HR_DUMMY_JSON_URL").unwrap_or(defaults.dummy_json_url),
            timeout: number("HR_API_TIMEOUT_MS")
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            max_retries: number("HR_API_MAX_RETRIES")
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(defaults.max_retries),
            retry_delay: number("HR_API_RETRY_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.retry_delay),
            backend_enabled: flag("HR_ENABLE_BACKEND").unwrap_or(defaults.backend_enabled),
            fallback_enabled: flag("HR_ENABLE_FALLBACK").unwrap_or(defaults.fallback_enabled),
            fetch_limit: number("HR_FETCH_LIMIT")
                .filter(|n| *n > 0)
                .map(|n| n as usize)
                .unwrap_or(defaults.fetch_limit),
            rating_band: lookup("HR_RATING_BAND")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rating_band),
        }
    }

    /// Join a path onto the backend base url
    pub fn backend_url(&self, path: &str) -> String {
        format!("{}/{}", self.backend_base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub fn dummy_json_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.dummy_json_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ApiConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_lookup_is_default() {
        assert_eq!(config_from(&[]), ApiConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HR_API_BASE_URL", "https://hr.example.com/api/"),
            ("HR_API_TIMEOUT_MS", "2500"),
            ("HR_API_MAX_RETRIES", "1"),
            ("HR_ENABLE_BACKEND", "yes"),
            ("HR_ENABLE_FALLBACK", "0"),
            ("HR_FETCH_LIMIT", "50"),
            ("HR_RATING_BAND", "upper"),
        ]);
        assert_eq!(config.backend_base_url, "https://hr.example.com/api");
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.max_retries, 1);
        assert!(config.backend_enabled);
        assert!(!config.fallback_enabled);
        assert_eq!(config.fetch_limit, 50);
        assert_eq!(config.rating_band, RatingBand::Upper);
        assert_eq!(config.backend_url("/health"), "https://hr.example.com/api/health");
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = config_from(&[
            ("HR_API_TIMEOUT_MS", "soon"),
            ("HR_ENABLE_BACKEND", "maybe"),
            ("HR_FETCH_LIMIT", "0"),
            ("HR_API_BASE_URL", "   "),
        ]);
        assert_eq!(config, ApiConfig::default());
    }
}
