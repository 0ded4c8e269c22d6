//! crates/sublog-core/src/record.rs
//! One formatted log line: prefix, timestamp, optional call site, message.

use std::fmt;
use std::panic::Location;

use crate::levels::LogLevel;
use crate::timestamp::Timestamp;

/// Call site of a logging statement.
///
/// Rendering keeps only the file basename, so lines stay short no matter how
/// deep the source tree is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from a file path and line number.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Creates a location from a [`Location`] captured via `#[track_caller]`.
    #[must_use]
    pub fn from_caller(caller: &'static Location<'static>) -> Self {
        Self::new(caller.file(), caller.line())
    }

    /// Returns the full file path.
    #[must_use]
    pub const fn file(self) -> &'static str {
        self.file
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.file.rsplit(['/', '\\']).next().unwrap_or(self.file);
        let line = self.line;
        write!(f, "{name}:{line}")
    }
}

/// A single message ready for emission.
///
/// `Display` produces the exact line written to the destination (without the
/// trailing newline): `[prefix] MM/DD/YYYY HH:MM:SS message`, with
/// `file:line:` inserted before the message when a source location is
/// attached.
#[derive(Clone, Copy, Debug)]
pub struct LogRecord<'a> {
    level: LogLevel,
    prefix: &'a str,
    timestamp: Timestamp,
    source: Option<SourceLocation>,
    message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Creates a record with no source location attached.
    #[must_use]
    pub fn new(level: LogLevel, prefix: &'a str, timestamp: Timestamp, message: &'a str) -> Self {
        Self {
            level,
            prefix,
            timestamp,
            source: None,
            message,
        }
    }

    /// Attaches the call site to the record.
    #[must_use]
    pub fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns the severity of the message.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns the logger prefix, without brackets.
    #[must_use]
    pub const fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// Returns the capture time.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the attached call site, if any.
    #[must_use]
    pub const fn source(&self) -> Option<SourceLocation> {
        self.source
    }

    /// Returns the message text.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix;
        let timestamp = self.timestamp;
        write!(f, "[{prefix}] {timestamp} ")?;
        if let Some(source) = self.source {
            write!(f, "{source}: ")?;
        }
        f.write_str(self.message)
    }
}
