//! Build-Time Configuration
//!
//! `HR_*` variables are baked in by `option_env!` when the bundle is built;
//! anything unset keeps the `ApiConfig` default.

use hr_core::api::ApiConfig;
use log::LevelFilter;

pub fn api_config() -> ApiConfig {
    ApiConfig::from_lookup(build_var)
}

pub fn log_level() -> LevelFilter {
    option_env!("HR_LOG_LEVEL")
        .and_then(console_logger::parse_level)
        .unwrap_or(LevelFilter::Info)
}

fn build_var(key: &str) -> Option<String> {
    let value = match key {
        "HR_API_BASE_URL" => option_env!("HR_API_BASE_URL"),
        "HR_DUMMY_JSON_URL" => option_env!("HR_DUMMY_JSON_URL"),
        "HR_API_TIMEOUT_MS" => option_env!("HR_API_TIMEOUT_MS"),
        "HR_API_MAX_RETRIES" => option_env!("HR_API_MAX_RETRIES"),
        "HR_API_RETRY_DELAY_MS" => option_env!("HR_API_RETRY_DELAY_MS"),
        "HR_ENABLE_BACKEND" => option_env!("HR_ENABLE_BACKEND"),
        "HR_ENABLE_FALLBACK" => option_env!("HR_ENABLE_FALLBACK"),
        "HR_FETCH_LIMIT" => option_env!("HR_FETCH_LIMIT"),
        "HR_RATING_BAND" => option_env!("HR_RATING_BAND"),
        _ => None,
    };
    value.map(String::from)
}
