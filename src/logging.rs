//! Logging Setup
//!
//! Routes `log` records through the rolling logger into the browser console.

use log::Level;
use rolling_logger::{LogEntry, LogSink, RollingLogger};
use wasm_bindgen::JsValue;

use crate::config::AppConfig;

/// Writes each record to the devtools console at the matching level
struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry) {
        let line = JsValue::from_str(&entry.to_string());
        match entry.level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

/// Install the global logger; a second call only warns
pub fn init(config: &AppConfig) {
    let logger = RollingLogger::new(config.log_capacity)
        .with_level(config.log_level)
        .with_sink(ConsoleSink);

    match rolling_logger::init(logger) {
        Ok(_) => log::debug!("[APP] Logger ready (level={}, capacity={})", config.log_level, config.log_capacity),
        Err(err) => web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into()),
    }
}
