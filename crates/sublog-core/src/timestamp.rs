//! crates/sublog-core/src/timestamp.rs
//! Epoch-to-civil conversion and the `MM/DD/YYYY HH:MM:SS` rendering used on
//! every emitted line.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// UTC wall-clock instant captured when a message is emitted.
///
/// Stores whole seconds since the Unix epoch and renders as
/// `MM/DD/YYYY HH:MM:SS`, zero-padded. The civil-date conversion is done
/// manually to avoid an external time crate for a fixed output format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timestamp {
    epoch_secs: u64,
}

impl Timestamp {
    /// Captures the current time.
    ///
    /// A system clock before the Unix epoch saturates to zero.
    #[must_use]
    pub fn now() -> Self {
        let epoch_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        Self { epoch_secs }
    }

    /// Creates a timestamp from whole seconds since the Unix epoch.
    #[must_use]
    pub const fn from_epoch_secs(epoch_secs: u64) -> Self {
        Self { epoch_secs }
    }

    /// Returns the stored seconds since the Unix epoch.
    #[must_use]
    pub const fn epoch_secs(self) -> u64 {
        self.epoch_secs
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_days = self.epoch_secs / 86400;
        let day_seconds = (self.epoch_secs % 86400) as u32;
        let hours = day_seconds / 3600;
        let minutes = (day_seconds % 3600) / 60;
        let seconds = day_seconds % 60;

        let (year, month, day) = civil_from_days(total_days as i64);

        write!(
            f,
            "{month:02}/{day:02}/{year:04} {hours:02}:{minutes:02}:{seconds:02}"
        )
    }
}

/// Converts a day count (days since 1970-01-01) to a civil date (year, month, day).
///
/// Algorithm from Howard Hinnant's date library (public domain).
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y as i32, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_unix_epoch() {
        let ts = Timestamp::from_epoch_secs(0);
        assert_eq!(ts.to_string(), "01/01/1970 00:00:00");
    }

    #[test]
    fn renders_the_last_second_of_a_day() {
        // 1970-01-01 23:59:59 = 86399
        let ts = Timestamp::from_epoch_secs(86399);
        assert_eq!(ts.to_string(), "01/01/1970 23:59:59");
    }

    #[test]
    fn renders_the_first_second_of_the_next_day() {
        // 1970-01-02 00:00:00 = 86400
        let ts = Timestamp::from_epoch_secs(86400);
        assert_eq!(ts.to_string(), "01/02/1970 00:00:00");
    }

    #[test]
    fn renders_a_leap_day() {
        // 2024-02-29 12:00:00 UTC = 1709208000
        let ts = Timestamp::from_epoch_secs(1_709_208_000);
        assert_eq!(ts.to_string(), "02/29/2024 12:00:00");
    }

    #[test]
    fn renders_a_recent_date() {
        // 2026-02-21 14:30:00 UTC = 1771684200
        let ts = Timestamp::from_epoch_secs(1_771_684_200);
        assert_eq!(ts.to_string(), "02/21/2026 14:30:00");
    }

    #[test]
    fn epoch_secs_round_trips() {
        let ts = Timestamp::from_epoch_secs(1_771_684_200);
        assert_eq!(ts.epoch_secs(), 1_771_684_200);
    }

    #[test]
    fn now_renders_in_the_fixed_shape() {
        let rendered = Timestamp::now().to_string();
        let bytes = rendered.as_bytes();
        assert_eq!(rendered.len(), 19);
        assert_eq!(bytes[2], b'/');
        assert_eq!(bytes[5], b'/');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
    }

    #[test]
    fn civil_from_days_epoch() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
    }

    #[test]
    fn civil_from_days_known_date() {
        // 2026-02-21 is day 20505 from epoch
        assert_eq!(civil_from_days(20505), (2026, 2, 21));
    }
}
