//! crates/sublog-sink/src/destination.rs
//! Destination stream selection: standard streams or an append-mode file.

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use crate::stream::{SharedSink, shared_sink};

/// Where emitted log lines go.
///
/// Configuration names the destination with a spec string: `stderr` and
/// `stdout` (case-insensitive) select the standard streams, anything else is
/// treated as a file path. Files are opened in create+append mode so
/// restarting a process extends its log instead of truncating it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogDestination {
    /// The standard error stream.
    Stderr,
    /// The standard output stream.
    Stdout,
    /// An append-mode file at the given path.
    File(PathBuf),
}

impl LogDestination {
    /// Parses a destination spec string.
    ///
    /// Stream names are matched case-insensitively; any other spec becomes a
    /// file path with its original spelling preserved.
    #[must_use]
    pub fn from_spec(spec: &str) -> Self {
        match spec.to_ascii_lowercase().as_str() {
            "stderr" => Self::Stderr,
            "stdout" => Self::Stdout,
            _ => Self::File(PathBuf::from(spec)),
        }
    }

    /// Opens the destination and returns the shared sink handle loggers
    /// clone among themselves.
    pub fn open(&self) -> io::Result<SharedSink> {
        match self {
            Self::Stderr => Ok(shared_sink(io::stderr())),
            Self::Stdout => Ok(shared_sink(io::stdout())),
            Self::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(shared_sink(file))
            }
        }
    }
}

impl Default for LogDestination {
    fn default() -> Self {
        Self::Stderr
    }
}

impl fmt::Display for LogDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => f.write_str("stderr"),
            Self::Stdout => f.write_str("stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
