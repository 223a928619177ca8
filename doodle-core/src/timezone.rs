//! Time zone used to interpret the poll's epoch timestamps.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;

use crate::error::{DoodleError, DoodleResult};

/// Zone a poll's timestamps are rendered in.
///
/// Doodle only sometimes reports the initiator's zone, so a fixed offset
/// stands in when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTimeZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl PollTimeZone {
    /// Use `name` when it is a non-empty IANA zone name, otherwise a fixed
    /// offset of `fallback_hours` from UTC.
    pub fn resolve(name: Option<&str>, fallback_hours: i32) -> DoodleResult<Self> {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name
                .parse::<Tz>()
                .map(PollTimeZone::Named)
                .map_err(|_| DoodleError::InvalidTimeZone(name.to_string())),
            None => Self::fixed_hours(fallback_hours),
        }
    }

    pub fn fixed_hours(hours: i32) -> DoodleResult<Self> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(PollTimeZone::Fixed)
            .ok_or_else(|| DoodleError::Config(format!("UTC offset of {}h is out of range", hours)))
    }

    /// Convert epoch milliseconds into this zone.
    ///
    /// Returns `None` when the instant is outside what chrono can represent.
    pub fn at_epoch_millis(&self, millis: i64) -> Option<DateTime<FixedOffset>> {
        let utc: DateTime<Utc> = DateTime::from_timestamp_millis(millis)?;

        Some(match self {
            PollTimeZone::Named(tz) => utc.with_timezone(tz).fixed_offset(),
            PollTimeZone::Fixed(offset) => utc.with_timezone(offset),
        })
    }
}

impl fmt::Display for PollTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollTimeZone::Named(tz) => write!(f, "{}", tz.name()),
            PollTimeZone::Fixed(offset) => write!(f, "UTC{}", offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_zone() {
        let tz = PollTimeZone::resolve(Some("Europe/Berlin"), -12).unwrap();
        assert_eq!(tz, PollTimeZone::Named(chrono_tz::Europe::Berlin));
        assert_eq!(tz.to_string(), "Europe/Berlin");
    }

    #[test]
    fn test_missing_or_empty_name_uses_fallback() {
        let expected = PollTimeZone::Fixed(FixedOffset::west_opt(12 * 3600).unwrap());

        assert_eq!(PollTimeZone::resolve(None, -12).unwrap(), expected);
        assert_eq!(PollTimeZone::resolve(Some(""), -12).unwrap(), expected);
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        assert!(matches!(
            PollTimeZone::resolve(Some("Mars/Olympus_Mons"), -12),
            Err(DoodleError::InvalidTimeZone(name)) if name == "Mars/Olympus_Mons"
        ));
    }

    #[test]
    fn test_fallback_offset_out_of_range() {
        assert!(PollTimeZone::fixed_hours(30).is_err());
    }

    #[test]
    fn test_at_epoch_millis_in_berlin() {
        let tz = PollTimeZone::Named(chrono_tz::Europe::Berlin);
        let dt = tz.at_epoch_millis(1_700_000_000_000).unwrap();

        assert_eq!(dt.to_rfc3339(), "2023-11-14T23:13:20+01:00");
    }

    #[test]
    fn test_at_epoch_millis_at_fixed_offset() {
        let tz = PollTimeZone::fixed_hours(-12).unwrap();
        let dt = tz.at_epoch_millis(1_000_000).unwrap();

        assert_eq!(dt.to_rfc3339(), "1969-12-31T12:16:40-12:00");
    }

    #[test]
    fn test_at_epoch_millis_out_of_range() {
        let tz = PollTimeZone::fixed_hours(0).unwrap();
        assert_eq!(tz.at_epoch_millis(i64::MAX), None);
    }
}
