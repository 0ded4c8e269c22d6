//! crates/sublog-core/src/logger.rs
//! The leveled logger: threshold filtering, prefix nesting, timestamped
//! emission through a shared sink.

use std::fmt;
use std::io;
use std::panic::Location;
use std::process;
use std::sync::{Arc, Mutex, MutexGuard};

use sublog_sink::{SharedSink, shared_sink};

use crate::levels::LogLevel;
use crate::record::{LogRecord, SourceLocation};
use crate::timestamp::Timestamp;

/// A leveled, prefixed logger.
///
/// A `Logger` owns three pieces of state fixed at construction: a severity
/// threshold, a display prefix, and a shared destination sink. Messages at
/// or above the threshold severity (ordinal less than or equal) are
/// formatted as `[prefix] MM/DD/YYYY HH:MM:SS message` and written to the
/// destination, flushed immediately; everything else is dropped.
///
/// [`Logger::sublogger`] derives a child whose prefix extends the parent's
/// (`parent][child`) and which inherits the parent's threshold and
/// destination at creation time. Each logger keeps a list of the subloggers
/// it created; the list is bookkeeping only and never propagates operations.
///
/// `Logger` is a cheap handle: cloning it yields the same logger, so the
/// entry recorded in the parent's bookkeeping list and the value returned to
/// the caller are one object.
///
/// When the threshold is [`LogLevel::Debug`], every emitted line also
/// carries the `file:line` of the logging call site between the timestamp
/// and the message.
#[derive(Clone)]
pub struct Logger {
    shared: Arc<LoggerShared>,
}

struct LoggerShared {
    threshold: LogLevel,
    prefix: String,
    sink: SharedSink,
    subloggers: Mutex<Vec<Logger>>,
}

impl Logger {
    /// Creates a logger with the given threshold, prefix, and destination.
    #[must_use]
    pub fn new(threshold: LogLevel, prefix: &str, sink: SharedSink) -> Self {
        Self {
            shared: Arc::new(LoggerShared {
                threshold,
                prefix: prefix.to_owned(),
                sink,
                subloggers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Returns the severity threshold.
    #[must_use]
    pub fn threshold(&self) -> LogLevel {
        self.shared.threshold
    }

    /// Returns the prefix, without brackets.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.shared.prefix
    }

    /// Returns a clone of the destination sink handle.
    #[must_use]
    pub fn sink(&self) -> SharedSink {
        Arc::clone(&self.shared.sink)
    }

    /// Derives a child logger and records it in this logger's bookkeeping
    /// list.
    ///
    /// The child's prefix is `parent][child`, rendered with surrounding
    /// brackets on every line, and it inherits this logger's threshold and
    /// destination as they are now. Subloggers nest to arbitrary depth.
    pub fn sublogger(&self, prefix: &str) -> Logger {
        let composed = format!("{}][{prefix}", self.shared.prefix);
        let child = Logger::new(self.shared.threshold, &composed, self.sink());
        self.lock_subloggers().push(child.clone());
        child
    }

    /// Returns handles to the subloggers created by this logger, in creation
    /// order.
    #[must_use]
    pub fn subloggers(&self) -> Vec<Logger> {
        self.lock_subloggers().clone()
    }

    /// Logs `message` at an explicit severity.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: &str) {
        self.emit(level, message, Location::caller());
    }

    /// Logs a message at the `emerg` severity.
    #[track_caller]
    pub fn emerg(&self, message: &str) {
        self.emit(LogLevel::Emerg, message, Location::caller());
    }

    /// Logs a message at the `alert` severity.
    #[track_caller]
    pub fn alert(&self, message: &str) {
        self.emit(LogLevel::Alert, message, Location::caller());
    }

    /// Logs a message at the `crit` severity.
    #[track_caller]
    pub fn crit(&self, message: &str) {
        self.emit(LogLevel::Crit, message, Location::caller());
    }

    /// Logs a message at the `err` severity.
    #[track_caller]
    pub fn err(&self, message: &str) {
        self.emit(LogLevel::Err, message, Location::caller());
    }

    /// Logs a message at the `warning` severity.
    #[track_caller]
    pub fn warning(&self, message: &str) {
        self.emit(LogLevel::Warning, message, Location::caller());
    }

    /// Logs a message at the `notice` severity.
    #[track_caller]
    pub fn notice(&self, message: &str) {
        self.emit(LogLevel::Notice, message, Location::caller());
    }

    /// Logs a message at the `info` severity.
    #[track_caller]
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message, Location::caller());
    }

    /// Logs a message at the `debug` severity.
    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message, Location::caller());
    }

    /// Logs `message` at the `err` severity and terminates the process with
    /// exit code 1.
    #[track_caller]
    pub fn fatal(&self, message: &str) -> ! {
        self.emit(LogLevel::Err, message, Location::caller());
        process::exit(1);
    }

    fn emit(&self, level: LogLevel, message: &str, caller: &'static Location<'static>) {
        if !self.shared.threshold.permits(level) {
            return;
        }

        let mut record = LogRecord::new(level, &self.shared.prefix, Timestamp::now(), message);
        if self.shared.threshold == LogLevel::Debug {
            record = record.with_source(SourceLocation::from_caller(caller));
        }
        let line = record.to_string();

        // Emission must never take down the caller: a poisoned lock, a
        // failed write, and a failed flush are all swallowed.
        if let Ok(mut sink) = self.shared.sink.lock() {
            if sink.write_line(&line).is_ok() {
                let _ = sink.flush();
            }
        }
    }

    // A panic while registering a child cannot tear the Vec, so a poisoned
    // bookkeeping lock is recovered instead of propagated.
    fn lock_subloggers(&self) -> MutexGuard<'_, Vec<Logger>> {
        match self.shared.subloggers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for Logger {
    /// Returns a logger with workable fallback settings: stderr destination,
    /// prefix `default`, threshold `debug`.
    fn default() -> Self {
        Self::new(LogLevel::Debug, "default", shared_sink(io::stderr()))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.shared.threshold)
            .field("prefix", &self.shared.prefix)
            .finish_non_exhaustive()
    }
}
