//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and forwards every accepted record to a pluggable sink.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<&'static RollingLogger> = OnceLock::new();

/// A single captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Destination for accepted records (console, file, ...)
pub trait LogSink: Send + Sync {
    fn write(&self, entry: &LogEntry);
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

/// Circular-buffer logger
pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    buffer: Mutex<VecDeque<LogEntry>>,
    sink: Option<Box<dyn LogSink>>,
}

impl RollingLogger {
    /// Create a logger keeping at most `capacity` records (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            level: LevelFilter::Info,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            sink: None,
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Store an entry, evicting the oldest one when full, and forward it to the sink
    pub fn push(&self, entry: LogEntry) {
        if let Some(sink) = &self.sink {
            sink.write(&entry);
        }
        // A poisoned buffer only means a writer panicked mid-push; the data is still usable.
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }

    /// Snapshot of buffered records, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.iter().cloned().collect()
    }

    pub fn clear(&self) {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.clear();
    }
}

impl fmt::Debug for RollingLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollingLogger")
            .field("capacity", &self.capacity)
            .field("level", &self.level)
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.push(LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

/// Install `logger` as the global `log` backend.
///
/// The logger is only published to [`global`] once `log` has accepted it. If
/// another backend is already installed, `logger` is leaked and never used.
pub fn init(logger: RollingLogger) -> Result<&'static RollingLogger, InitError> {
    let level = logger.level;
    let logger: &'static RollingLogger = Box::leak(Box::new(logger));
    log::set_logger(logger).map_err(|_| InitError::AlreadyInitialized)?;
    log::set_max_level(level);
    LOGGER.set(logger).map_err(|_| InitError::AlreadyInitialized)?;
    Ok(logger)
}

/// The installed global logger, if `init` succeeded
pub fn global() -> Option<&'static RollingLogger> {
    LOGGER.get().copied()
}
