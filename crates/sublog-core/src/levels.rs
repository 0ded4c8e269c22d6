//! crates/sublog-core/src/levels.rs
//! Syslog severity levels and the ordinal threshold check that decides
//! whether a message is emitted.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The eight syslog severities, ordered by ordinal.
///
/// The numeric values follow the syslog convention: a lower ordinal means a
/// more severe condition, so `Emerg` is 0 and `Debug` is 7. A message passes
/// a logger's filter when its ordinal is less than or equal to the
/// threshold ordinal; see [`LogLevel::permits`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LogLevel {
    /// System is unusable.
    Emerg = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical condition.
    Crit = 2,
    /// Error condition.
    Err = 3,
    /// Warning condition.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational message.
    Info = 6,
    /// Debug-level message.
    Debug = 7,
}

/// Error returned when parsing a log level from its name fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid log level: \"{invalid_name}\"")]
pub struct ParseLogLevelError {
    invalid_name: String,
}

impl ParseLogLevelError {
    /// Creates a parse error that records the invalid level name.
    #[must_use]
    pub fn new(invalid_name: &str) -> Self {
        Self {
            invalid_name: invalid_name.to_owned(),
        }
    }

    /// Returns the level name that failed to parse.
    #[must_use]
    pub fn invalid_name(&self) -> &str {
        &self.invalid_name
    }
}

impl LogLevel {
    /// Ordered list of all severities, most severe first.
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Emerg,
        LogLevel::Alert,
        LogLevel::Crit,
        LogLevel::Err,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Returns the ordered list of all severities.
    #[must_use]
    pub const fn all() -> &'static [LogLevel; 8] {
        &Self::ALL
    }

    /// Returns the syslog ordinal of this severity.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Attempts to construct a [`LogLevel`] from its syslog ordinal.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Emerg),
            1 => Some(Self::Alert),
            2 => Some(Self::Crit),
            3 => Some(Self::Err),
            4 => Some(Self::Warning),
            5 => Some(Self::Notice),
            6 => Some(Self::Info),
            7 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns the lowercase name of this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emerg => "emerg",
            Self::Alert => "alert",
            Self::Crit => "crit",
            Self::Err => "err",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Reports whether a message at `level` passes this severity threshold.
    ///
    /// `self` is the threshold; a message is emitted when its ordinal is
    /// less than or equal to the threshold ordinal. A `Debug` threshold
    /// therefore permits everything and an `Emerg` threshold permits only
    /// emergencies.
    #[must_use]
    #[inline]
    pub const fn permits(self, level: LogLevel) -> bool {
        level.as_u8() <= self.as_u8()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(name: &str) -> Result<Self, ParseLogLevelError> {
        match name.to_ascii_lowercase().as_str() {
            "emerg" => Ok(Self::Emerg),
            "alert" => Ok(Self::Alert),
            "crit" => Ok(Self::Crit),
            "err" => Ok(Self::Err),
            "warning" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLogLevelError::new(name)),
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(value: LogLevel) -> Self {
        value.as_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_the_syslog_convention() {
        assert_eq!(LogLevel::Emerg.as_u8(), 0);
        assert_eq!(LogLevel::Alert.as_u8(), 1);
        assert_eq!(LogLevel::Crit.as_u8(), 2);
        assert_eq!(LogLevel::Err.as_u8(), 3);
        assert_eq!(LogLevel::Warning.as_u8(), 4);
        assert_eq!(LogLevel::Notice.as_u8(), 5);
        assert_eq!(LogLevel::Info.as_u8(), 6);
        assert_eq!(LogLevel::Debug.as_u8(), 7);
    }

    #[test]
    fn from_u8_round_trips_all_levels() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level.as_u8()), Some(level));
            assert_eq!(u8::from(level), level.as_u8());
        }
    }

    #[test]
    fn from_u8_rejects_unknown_ordinals() {
        assert!(LogLevel::from_u8(8).is_none());
        assert!(LogLevel::from_u8(255).is_none());
    }

    #[test]
    fn all_contains_8_levels_most_severe_first() {
        assert_eq!(LogLevel::ALL.len(), 8);
        assert_eq!(LogLevel::all().len(), 8);
        assert_eq!(LogLevel::ALL[0], LogLevel::Emerg);
        assert_eq!(LogLevel::ALL[7], LogLevel::Debug);
    }

    #[test]
    fn parse_accepts_lowercase_names() {
        for level in LogLevel::ALL {
            assert_eq!(level.as_str().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn parse_accepts_uppercase_names() {
        for level in LogLevel::ALL {
            let upper = level.as_str().to_ascii_uppercase();
            assert_eq!(upper.parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn parse_accepts_mixed_case_names() {
        assert_eq!("Warning".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("dEbUg".parse::<LogLevel>(), Ok(LogLevel::Debug));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "verbose".parse::<LogLevel>().expect_err("must not parse");
        assert_eq!(err.invalid_name(), "verbose");
        assert_eq!(err.to_string(), "invalid log level: \"verbose\"");
    }

    #[test]
    fn parse_rejects_the_empty_string() {
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn parse_error_preserves_the_original_spelling() {
        let err = "DeBug!".parse::<LogLevel>().expect_err("must not parse");
        assert_eq!(err.invalid_name(), "DeBug!");
    }

    #[test]
    fn display_renders_lowercase_names() {
        assert_eq!(LogLevel::Emerg.to_string(), "emerg");
        assert_eq!(LogLevel::Alert.to_string(), "alert");
        assert_eq!(LogLevel::Crit.to_string(), "crit");
        assert_eq!(LogLevel::Err.to_string(), "err");
        assert_eq!(LogLevel::Warning.to_string(), "warning");
        assert_eq!(LogLevel::Notice.to_string(), "notice");
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }

    #[test]
    fn display_and_parse_round_trip() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn debug_threshold_permits_everything() {
        for level in LogLevel::ALL {
            assert!(LogLevel::Debug.permits(level));
        }
    }

    #[test]
    fn emerg_threshold_permits_only_emergencies() {
        assert!(LogLevel::Emerg.permits(LogLevel::Emerg));
        for level in &LogLevel::ALL[1..] {
            assert!(!LogLevel::Emerg.permits(*level));
        }
    }

    #[test]
    fn permits_matches_the_ordinal_comparison() {
        for threshold in LogLevel::ALL {
            for level in LogLevel::ALL {
                assert_eq!(
                    threshold.permits(level),
                    level.as_u8() <= threshold.as_u8(),
                    "threshold {threshold} vs level {level}"
                );
            }
        }
    }

    #[test]
    fn warning_threshold_splits_the_range() {
        let threshold = LogLevel::Warning;
        assert!(threshold.permits(LogLevel::Emerg));
        assert!(threshold.permits(LogLevel::Err));
        assert!(threshold.permits(LogLevel::Warning));
        assert!(!threshold.permits(LogLevel::Notice));
        assert!(!threshold.permits(LogLevel::Info));
        assert!(!threshold.permits(LogLevel::Debug));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn level_round_trips_through_json() {
            for level in LogLevel::ALL {
                let json = serde_json::to_string(&level).expect("serialize");
                let back: LogLevel = serde_json::from_str(&json).expect("deserialize");
                assert_eq!(back, level);
            }
        }
    }
}
