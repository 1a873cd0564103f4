//! Time source for log records.
//!
//! # Responsibilities
//! - Stamp every emitted record with the current instant
//! - Allow a fixed instant to be injected for deterministic output

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Supplies the instant a record is stamped with.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock that always reports `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Midnight UTC of the given calendar day.
    ///
    /// Returns `None` for a date that does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let midnight = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
        Some(Self::new(Utc.from_utc_datetime(&midnight)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::from_ymd(2015, 12, 15).unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().timestamp(), 1_450_137_600);
    }

    #[test]
    fn test_fixed_clock_rejects_invalid_date() {
        assert!(FixedClock::from_ymd(2015, 2, 30).is_none());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_clock_as_trait_object() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::from_ymd(2020, 1, 1).unwrap());
        assert_eq!(clock.now().timestamp(), 1_577_836_800);
    }
}
