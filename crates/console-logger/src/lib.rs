//! Browser Console Logger
//!
//! A `log` sink that writes each record to the matching `console.*`
//! method, formatted as `[target] message`.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name such as `debug` or `WARN`; unknown names give `None`
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}

fn format_record(target: &str, message: &str) -> String {
    // Keep only the crate/module tail so lines stay short in devtools
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", short, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uses_last_target_segment() {
        assert_eq!(
            format_record("hr_core::api::client", "fetched 20 users"),
            "[client] fetched 20 users"
        );
        assert_eq!(format_record("store", "saved"), "[store] saved");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("chatty"), None);
    }
}
