//! Browser implementations of the domain logging traits.

use gloo::console;

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

/// Routes log entries to the devtools console by level
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Warn)
    }

    /// Debug builds log everything from DEBUG up, release builds only warnings.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::new_development()
        } else {
            Self::new_production()
        }
    }

    pub fn accepts(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if !self.accepts(entry.level) {
            return;
        }
        let line = entry.render();
        match entry.level {
            LogLevel::Error => console::error!(line),
            LogLevel::Warn => console::warn!(line),
            LogLevel::Info => console::info!(line),
            LogLevel::Debug | LogLevel::Trace => console::debug!(line),
        }
    }
}

/// Wall clock backed by `js_sys::Date`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp as f64));
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

/// Current local time as the browser formats it, e.g. `3:04:05 PM`.
pub fn local_time_label() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_logger_drops_chatter() {
        let logger = ConsoleLogger::new_production();
        assert!(!logger.accepts(LogLevel::Info));
        assert!(logger.accepts(LogLevel::Warn));
        assert!(logger.accepts(LogLevel::Error));
        assert!(ConsoleLogger::new_development().accepts(LogLevel::Debug));
    }
}
