#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `sublog` is a tiny leveled logging library. It supports the eight syslog
//! severities, hierarchical subloggers whose prefixes nest, and not much
//! else. Messages that pass a logger's severity threshold are rendered as
//! `[prefix] MM/DD/YYYY HH:MM:SS message` and flushed to the destination
//! immediately; everything else is dropped.
//!
//! This crate is a facade over the two workspace halves: `sublog-core` (the
//! [`Logger`], [`LogLevel`], and rendering types) and `sublog-sink`
//! (destination selection and the shared sink handle). Depend on `sublog`
//! and the whole surface is one `use` away.
//!
//! # Design
//!
//! A [`Logger`] fixes its threshold, prefix, and destination at construction.
//! [`Logger::sublogger`] derives a child with the composed prefix
//! `parent][child` that inherits the parent's threshold and destination, to
//! arbitrary depth; parent and children share one locked sink, so their
//! lines interleave in write order. [`LogDestination`] picks stderr, stdout,
//! or an append-mode file from a spec string, and [`LogConfig`] bundles
//! level, prefix, and destination so loggers can come from configuration.
//!
//! Two opt-in cargo features extend the surface: `serde` derives
//! serialization for [`LogLevel`], [`LogDestination`], and [`LogConfig`],
//! and `tracing` provides a subscriber layer that forwards events from the
//! tracing ecosystem into a [`Logger`].
//!
//! # Invariants
//!
//! - A message logged at severity S is emitted iff S's ordinal is less than
//!   or equal to the logger's threshold ordinal (`emerg` is 0, `debug` is 7).
//! - A sublogger's rendered prefix is the parent's prefix concatenated with
//!   its own, nested to arbitrary depth.
//! - Every emitted line is newline-terminated and flushed before the logging
//!   call returns.
//! - When a logger's threshold is [`LogLevel::Debug`], each line carries the
//!   `file:line` of the logging call site.
//!
//! # Errors
//!
//! Parsing an unrecognized level name yields [`ParseLogLevelError`], and
//! [`LogDestination::open`] surfaces [`std::io::Error`] for unopenable
//! files. Emission itself never fails: write errors at the sink are
//! swallowed, so a logging call cannot take down its caller.
//!
//! # Examples
//!
//! Filtered, prefixed logging into an in-memory capture buffer:
//!
//! ```
//! use sublog::{LogLevel, Logger, SharedBuffer, shared_sink};
//!
//! let buffer = SharedBuffer::new();
//! let server = Logger::new(LogLevel::Info, "server", shared_sink(buffer.clone()));
//! let auth = server.sublogger("auth");
//!
//! server.info("listening");
//! auth.debug("dropped by the threshold");
//! auth.warning("weak credentials");
//!
//! let output = String::from_utf8(buffer.contents()).unwrap();
//! let lines: Vec<&str> = output.lines().collect();
//! assert_eq!(lines.len(), 2);
//! assert!(lines[0].starts_with("[server] "));
//! assert!(lines[1].starts_with("[server][auth] "));
//! assert!(lines[1].ends_with("weak credentials"));
//! ```
//!
//! Parse a level name and open a logger from configuration:
//!
//! ```
//! use sublog::{LogConfig, LogDestination, LogLevel};
//!
//! let level: LogLevel = "WARNING".parse().unwrap();
//!
//! let config = LogConfig {
//!     level,
//!     prefix: "job".to_owned(),
//!     destination: LogDestination::from_spec("stderr"),
//! };
//! let logger = config.open_logger().unwrap();
//! assert_eq!(logger.threshold(), LogLevel::Warning);
//! assert_eq!(logger.prefix(), "job");
//! ```
//!
//! # See also
//!
//! - `sublog-core` for the logger, levels, and rendering types.
//! - `sublog-sink` for destinations, sinks, and the capture buffer.

pub use sublog_core::{
    LogConfig, LogLevel, LogRecord, Logger, ParseLogLevelError, SourceLocation, Timestamp,
};
pub use sublog_core::{
    log_alert, log_at, log_crit, log_debug, log_emerg, log_err, log_fatal, log_info, log_notice,
    log_warning,
};
pub use sublog_sink::{LogDestination, SharedBuffer, SharedSink, StreamSink, shared_sink};

#[cfg(feature = "tracing")]
pub use sublog_core::{SublogLayer, init_tracing, init_tracing_with_filter};
