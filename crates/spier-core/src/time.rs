//! Clock and timestamp utilities.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Timestamp layout used in records: `DD.MM.YYYY HH:MM:SS`.
pub const RECORD_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Date layout used in file names: `YYYYMMDD`.
pub const FILE_DATE_FORMAT: &str = "%Y%m%d";

/// Source of wall-clock time for records.
pub trait Clock: Send + Sync {
    /// Current local wall time. Must not fail.
    fn now(&self) -> NaiveDateTime;

    /// Current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system clock in the local time zone.
///
/// chrono resolves the local offset from the OS; when that lookup fails it
/// falls back to UTC, so reading the time never errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Fixed clock at the given local date and time.
    ///
    /// Out-of-range components yield the Unix epoch instead of panicking.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let instant = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .unwrap_or_default();
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Format an instant the way records carry it.
pub fn record_timestamp(instant: NaiveDateTime) -> String {
    instant.format(RECORD_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_timestamp() {
        let clock = FixedClock::at(2024, 3, 2, 9, 5, 7);
        assert_eq!(record_timestamp(clock.now()), "02.03.2024 09:05:07");
        assert_eq!(clock.today().format(FILE_DATE_FORMAT).to_string(), "20240302");
    }

    #[test]
    fn test_fixed_clock_out_of_range_is_epoch() {
        let clock = FixedClock::at(2024, 2, 30, 0, 0, 0);
        assert_eq!(record_timestamp(clock.now()), "01.01.1970 00:00:00");
    }

    #[test]
    fn test_system_clock_is_close_to_local() {
        let before = Local::now().naive_local();
        let now = SystemClock.now();
        let after = Local::now().naive_local();
        assert!(before <= now && now <= after);
    }
}
