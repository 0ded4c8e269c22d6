//! crates/sublog-core/src/config.rs
//! Logger configuration combining level, prefix, and destination.

use std::io;

use sublog_sink::LogDestination;

use crate::levels::LogLevel;
use crate::logger::Logger;

/// Everything needed to describe a logger before opening it.
///
/// The bundle is plain data so it can come from a config file (with the
/// `serde` feature) or be assembled by hand; [`LogConfig::open_logger`]
/// turns it into a running [`Logger`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Severity threshold.
    pub level: LogLevel,
    /// Display prefix, without brackets.
    pub prefix: String,
    /// Where emitted lines go.
    pub destination: LogDestination,
}

impl LogConfig {
    /// Opens the destination and assembles the described logger.
    pub fn open_logger(&self) -> io::Result<Logger> {
        let sink = self.destination.open()?;
        Ok(Logger::new(self.level, &self.prefix, sink))
    }
}

impl Default for LogConfig {
    /// Matches [`Logger::default`]: stderr, prefix `default`, threshold
    /// `debug`.
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            prefix: "default".to_owned(),
            destination: LogDestination::default(),
        }
    }
}
