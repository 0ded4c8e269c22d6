#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/sublog-sink/src/lib.rs
//!
//! # Overview
//!
//! `sublog-sink` provides the destination plumbing for the sublog workspace:
//! choosing where log lines go and writing them there one line at a time. The
//! logger core stays free of filesystem and stream concerns by depending only
//! on the [`SharedSink`] handle exported here.
//!
//! # Design
//!
//! [`LogDestination`] names a destination (stderr, stdout, or a file path)
//! and opens it into a [`StreamSink`], a thin line-oriented wrapper over any
//! [`std::io::Write`] implementor. Sinks are shared through
//! [`SharedSink`], an `Arc<Mutex<_>>` handle, because a logger and the
//! subloggers derived from it all write to one destination. [`SharedBuffer`]
//! is a clonable in-memory writer for capturing output in tests and tools.
//!
//! # Invariants
//!
//! - [`StreamSink::write_line`] emits exactly one newline-terminated line per
//!   call; payloads that already end in a newline are not double-terminated.
//! - Files open in create+append mode, so reopening a destination extends
//!   the existing log.
//! - Flushing is explicit: the sink never flushes on its own, leaving the
//!   per-message flush policy to the caller.
//!
//! # Errors
//!
//! [`LogDestination::open`] and the sink methods surface [`std::io::Error`]
//! values from the underlying writer unchanged. Parsing a destination spec
//! cannot fail; unrecognized specs are file paths.
//!
//! # Examples
//!
//! Capture two lines in memory through a shared handle:
//!
//! ```
//! use sublog_sink::{SharedBuffer, shared_sink};
//!
//! let buffer = SharedBuffer::new();
//! let sink = shared_sink(buffer.clone());
//!
//! sink.lock().unwrap().write_line("first").unwrap();
//! sink.lock().unwrap().write_line("second").unwrap();
//!
//! let output = String::from_utf8(buffer.contents()).unwrap();
//! assert_eq!(output, "first\nsecond\n");
//! ```
//!
//! # See also
//!
//! - `sublog-core` for the leveled logger that drives these sinks.

mod buffer;
mod destination;
mod stream;

pub use buffer::SharedBuffer;
pub use destination::LogDestination;
pub use stream::{SharedSink, StreamSink, shared_sink};
