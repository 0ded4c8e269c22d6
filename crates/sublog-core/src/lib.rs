#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/sublog-core/src/lib.rs
//!
//! # Overview
//!
//! `sublog-core` is the logger half of the sublog workspace: syslog
//! severities, threshold filtering, prefix nesting, and timestamped emission
//! through the shared sink handle exported by `sublog-sink`. A [`Logger`]
//! carries a severity threshold, a display prefix, and a destination; a
//! message at or above the threshold severity is rendered as
//! `[prefix] MM/DD/YYYY HH:MM:SS message` and flushed immediately.
//!
//! # Design
//!
//! [`LogLevel`] holds the eight syslog severities with their conventional
//! ordinals (`emerg` is 0, `debug` is 7); [`LogLevel::permits`] is the single
//! filtering rule everything else defers to. [`Logger::sublogger`] derives
//! children whose prefixes extend the parent's (`parent][child`) and which
//! inherit the parent's threshold and destination at creation time, nesting
//! to arbitrary depth. Rendering is split out into [`LogRecord`] and
//! [`Timestamp`] so the emitted line shape is testable without a sink, and
//! [`LogConfig`] bundles level, prefix, and destination for assembly from
//! configuration. The `log_emerg!` .. `log_debug!` macros add a
//! format-capturing surface over the plain `&str` methods.
//!
//! # Invariants
//!
//! - A message is emitted iff its severity ordinal is less than or equal to
//!   the logger's threshold ordinal.
//! - A sublogger's rendered prefix is the parent's prefix concatenated with
//!   its own, at any nesting depth.
//! - Every emitted line is newline-terminated and flushed before the logging
//!   call returns.
//! - `file:line` call-site capture appears iff the threshold is
//!   [`LogLevel::Debug`].
//!
//! # Errors
//!
//! Parsing an unrecognized level name yields [`ParseLogLevelError`]. Emission
//! never fails: write and flush errors at the sink are swallowed, matching
//! the fire-and-forget contract of a logging call. Opening a destination is
//! the only fallible I/O surface and lives in `sublog-sink`.
//!
//! # Examples
//!
//! Filter and nest through an in-memory capture buffer:
//!
//! ```
//! use sublog_core::{LogLevel, Logger};
//! use sublog_sink::{SharedBuffer, shared_sink};
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
//! # See also
//!
//! - `sublog-sink` for destination selection and the shared sink handle.
//! - The `sublog` facade crate, which re-exports both halves.

mod config;
mod levels;
mod logger;
mod macros;
mod record;
mod timestamp;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LogConfig;
pub use levels::{LogLevel, ParseLogLevelError};
pub use logger::Logger;
pub use record::{LogRecord, SourceLocation};
pub use timestamp::Timestamp;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{SublogLayer, init_tracing, init_tracing_with_filter};
