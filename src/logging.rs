//! Console Logging
//!
//! `log` facade backend that writes to the browser developer console.

use wasm_bindgen::JsValue;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

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

        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let js_line = JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&js_line),
            Level::Warn => web_sys::console::warn_1(&js_line),
            Level::Info => web_sys::console::info_1(&js_line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&js_line),
        }
    }

    fn flush(&self) {}
}

/// `[LEVEL target] message`, with the crate prefix stripped from the target
fn format_record(level: Level, target: &str, message: &str) -> String {
    let target = target
        .strip_prefix("library_reservation_ui::")
        .unwrap_or(target);
    format!("[{} {}] {}", level, target, message)
}

/// Parse a configured level name; unknown names fall back to `info`
pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

/// Install the console logger. Call once at startup.
pub fn init(level: &str) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(parse_level(level));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }

    #[test]
    fn test_format_record_strips_crate_prefix() {
        let line = format_record(Level::Warn, "library_reservation_ui::session", "storage unavailable");
        assert_eq!(line, "[WARN session] storage unavailable");
    }
}
