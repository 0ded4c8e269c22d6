//! crates/sublog-core/src/macros.rs
//! Formatted logging macros, one per severity.
//!
//! Each macro formats its arguments and forwards to the matching [`Logger`]
//! method, so call-site capture at the debug threshold still reports the
//! caller's file and line.
//!
//! [`Logger`]: crate::logger::Logger

/// Log a formatted message at the `emerg` severity.
///
/// # Example
/// ```ignore
/// log_emerg!(logger, "store {} is unusable", name);
/// ```
#[macro_export]
macro_rules! log_emerg {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emerg(&::std::format!($($arg)*))
    };
}

/// Log a formatted message at the `alert` severity.
///
/// # Example
/// ```ignore
/// log_alert!(logger, "disk {} failing", device);
/// ```
#[macro_export]
macro_rules! log_alert {
    ($logger:expr, $($arg:tt)*) => {
        $logger.alert(&::std::format!($($arg)*))
    };
}

/// Log a formatted message at the `crit` severity.
///
/// # Example
/// ```ignore
/// log_crit!(logger, "pool exhausted after {} retries", retries);
/// ```
#[macro_export]
macro_rules! log_crit {
    ($logger:expr, $($arg:tt)*) => {
        $logger.crit(&::std::format!($($arg)*))
    };
}

/// Log a formatted message at the `err` severity.
///
/// # Example
/// ```ignore
/// log_err!(logger, "request failed: {err}");
/// ```
#[macro_export]
macro_rules! log_err {
    ($logger:expr, $($arg:tt)*) => {
        $logger.err(&::std::format!($($arg)*))
    };
}

/// Log a formatted message at the `warning` severity.
///
/// # Example
/// ```ignore
/// log_warning!(logger, "retrying {} in {}s", task, delay);
/// ```
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(&::std::format!($($arg)*))
    };
}

/// Log a formatted message at the `notice` severity.
///
/// # Example
/// ```ignore
/// log_notice!(logger, "config reloaded from {}", path);
/// ```
#[macro_export]
macro_rules! log_notice {
    ($logger:expr, $($arg:tt)*) => {
        $logger.notice(&::std::format!($($arg)*))
    };
}

/// Log a formatted message at the `info` severity.
///
/// # Example
/// ```ignore
/// log_info!(logger, "served {} requests", count);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&::std::format!($($arg)*))
    };
}

/// Log a formatted message at the `debug` severity.
///
/// # Example
/// ```ignore
/// log_debug!(logger, "cache miss for {key}");
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&::std::format!($($arg)*))
    };
}

/// Log a formatted message at an explicit severity.
///
/// # Example
/// ```ignore
/// log_at!(logger, LogLevel::Notice, "rotated {} keys", count);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log($level, &::std::format!($($arg)*))
    };
}

/// Log a formatted message at the `err` severity, then exit with code 1.
///
/// # Example
/// ```ignore
/// log_fatal!(logger, "cannot open {}: {err}", path);
/// ```
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(&::std::format!($($arg)*))
    };
}
