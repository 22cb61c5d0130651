//! Console Logger
//!
//! `log` backend for browser builds. Every record is written to the devtools
//! console and the most recent ones are kept in a circular buffer, readable
//! through `recent()`.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in history
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Single-line rendering used for the console
    pub fn line(&self) -> String {
        format!(
            "{} {:<5} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<LogEntry>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self::with_capacity(level, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            history: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append an entry, evicting the oldest once the buffer is full
    fn remember(&self, entry: LogEntry) {
        let Ok(mut history) = self.history.lock() else {
            return;
        };
        if history.len() == self.capacity {
            history.pop_front();
        }
        history.push_back(entry);
    }

    /// Snapshot of buffered entries, oldest first
    pub fn history(&self) -> Vec<LogEntry> {
        self.history
            .lock()
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut history) = self.history.lock() {
            history.clear();
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(entry.level, &entry.line());
        self.remember(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the global logger. Calling it twice returns the `log` error.
pub fn init(level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Recent records from the installed logger (empty before `init`)
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(ConsoleLogger::history).unwrap_or_default()
}

/// Drop the buffered records of the installed logger
pub fn clear_recent() {
    if let Some(logger) = LOGGER.get() {
        logger.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{message}"))
                .build(),
        );
    }

    #[test]
    fn test_history_keeps_latest_entries() {
        let logger = ConsoleLogger::with_capacity(LevelFilter::Trace, 3);
        for i in 0..5 {
            record_at(&logger, Level::Info, &format!("msg {}", i));
        }

        let messages: Vec<String> = logger.history().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn test_level_filter_skips_verbose_records() {
        let logger = ConsoleLogger::with_capacity(LevelFilter::Warn, 10);
        record_at(&logger, Level::Debug, "hidden");
        record_at(&logger, Level::Error, "shown");

        let history = logger.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].level, Level::Error);
        assert!(history[0].line().contains("[test] shown"));
    }

    #[test]
    fn test_clear_empties_history() {
        let logger = ConsoleLogger::with_capacity(LevelFilter::Info, 4);
        record_at(&logger, Level::Info, "one");
        logger.clear();
        assert!(logger.history().is_empty());
    }

    #[test]
    fn test_global_logger_exposes_recent_records() {
        assert!(init(LevelFilter::Info).is_ok());
        log::info!(target: "app", "mounted");
        assert!(recent().iter().any(|e| e.target == "app" && e.message == "mounted"));

        clear_recent();
        assert!(recent().is_empty());
        assert!(init(LevelFilter::Info).is_err());
    }
}
