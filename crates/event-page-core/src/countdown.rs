//! Event Countdown
//!
//! Start-date parsing and the arithmetic behind the daily counter face.

use chrono::{DateTime, MappedLocalTime, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Far enough back to be outside any daylight saving gap
const GAP_LOOKBACK_HOURS: i64 = 6;

/// Replace the first space with `T`. Leading whitespace is not trimmed,
/// so such a value fails to parse.
pub fn normalize_start(raw: &str) -> String {
    raw.replacen(' ', "T", 1)
}

/// Resolve a wall-clock time in `local`.
///
/// An ambiguous time (clocks turned back) takes the earlier instant; a
/// time skipped by clocks turning forward uses the offset in force before
/// the transition, landing after the gap.
fn resolve_local<Tz: TimeZone>(naive: &NaiveDateTime, local: &Tz) -> Option<DateTime<Utc>> {
    let offset = match local.offset_from_local_datetime(naive) {
        MappedLocalTime::Single(offset) => offset.fix(),
        MappedLocalTime::Ambiguous(_, _) => {
            return local.from_local_datetime(naive).earliest().map(|dt| dt.with_timezone(&Utc));
        }
        MappedLocalTime::None => {
            let before = *naive - TimeDelta::hours(GAP_LOOKBACK_HOURS);
            local.offset_from_local_datetime(&before).earliest()?.fix()
        }
    };
    offset
        .from_local_datetime(naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a normalized start date.
///
/// With an explicit offset the instant is exact; a naive date-time is read
/// in `local`; a bare date is midnight UTC.
pub fn parse_start<Tz: TimeZone>(normalized: &str, local: &Tz) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(normalized) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(normalized, format) {
            return resolve_local(&naive, local);
        }
    }
    NaiveDate::parse_from_str(normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Time left until an event starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    /// Negative when the start is in the past
    pub remaining_ms: i64,
}

impl Countdown {
    /// Build from a `data-start` attribute value; `None` if it does not parse
    pub fn from_attribute<Tz: TimeZone>(raw: &str, now: DateTime<Utc>, local: &Tz) -> Option<Self> {
        let target = parse_start(&normalize_start(raw), local)?;
        Some(Self {
            remaining_ms: target.timestamp_millis() - now.timestamp_millis(),
        })
    }

    /// Initial clock time in seconds
    pub fn seconds(&self) -> f64 {
        self.remaining_ms as f64 / 1000.0
    }
}

/// Days / hours / minutes / seconds shown by the clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockFace {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockFace {
    /// Split a second count; negative or NaN clamps to zero
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds.is_nan() || seconds <= 0.0 {
            return Self::default();
        }
        let total = seconds.floor() as u64;
        Self {
            days: total / 86_400,
            hours: ((total % 86_400) / 3600) as u8,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Digit groups as rendered, days first
    pub fn groups(&self) -> [(String, &'static str); 4] {
        [
            (format!("{:02}", self.days), "Days"),
            (format!("{:02}", self.hours), "Hours"),
            (format!("{:02}", self.minutes), "Minutes"),
            (format!("{:02}", self.seconds), "Seconds"),
        ]
    }
}

/// Advance a running countdown by one tick, never below zero
pub fn tick(seconds: f64, step: f64) -> f64 {
    (seconds - step).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_normalize_first_space_only() {
        assert_eq!(normalize_start("2024-03-02 09:30:00"), "2024-03-02T09:30:00");
        assert_eq!(normalize_start("2024-03-02 09:30 +01:00"), "2024-03-02T09:30 +01:00");
    }

    #[test]
    fn test_leading_space_not_trimmed() {
        assert_eq!(normalize_start(" 2024-03-02 09:30"), "T2024-03-02 09:30");
        assert!(Countdown::from_attribute(" 2024-03-02 09:30", now(), &utc()).is_none());
    }

    #[test]
    fn test_future_start() {
        let countdown = Countdown::from_attribute("2024-03-02 12:00:00", now(), &utc()).unwrap();
        assert_eq!(countdown.remaining_ms, 86_400_000);
        assert_eq!(countdown.seconds(), 86_400.0);
    }

    #[test]
    fn test_local_offset_applied() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let countdown = Countdown::from_attribute("2024-03-01 14:00", now(), &cet).unwrap();
        assert_eq!(countdown.remaining_ms, 3_600_000);
    }

    #[test]
    fn test_explicit_offset_wins() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let countdown = Countdown::from_attribute("2024-03-01T13:00:00Z", now(), &cet).unwrap();
        assert_eq!(countdown.remaining_ms, 3_600_000);
    }

    #[test]
    fn test_date_only_is_utc_midnight() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let countdown = Countdown::from_attribute("2024-03-02", now(), &cet).unwrap();
        assert_eq!(countdown.remaining_ms, 12 * 3_600_000);
    }

    #[test]
    fn test_fractional_seconds() {
        let countdown = Countdown::from_attribute("2024-03-01 12:00:01.500", now(), &utc()).unwrap();
        assert_eq!(countdown.seconds(), 1.5);
    }

    #[test]
    fn test_past_start_is_negative() {
        let countdown = Countdown::from_attribute("2024-02-29 12:00:00", now(), &utc()).unwrap();
        assert!(countdown.remaining_ms < 0);
        assert!(ClockFace::from_seconds(countdown.seconds()).is_zero());
    }

    #[test]
    fn test_unparseable_start() {
        assert!(Countdown::from_attribute("soon", now(), &utc()).is_none());
        assert!(Countdown::from_attribute("", now(), &utc()).is_none());
        assert!(Countdown::from_attribute("2024-13-40 99:00", now(), &utc()).is_none());
    }

    #[test]
    fn test_clock_face_split() {
        let face = ClockFace::from_seconds(2.0 * 86_400.0 + 3.0 * 3600.0 + 4.0 * 60.0 + 5.9);
        assert_eq!(face, ClockFace { days: 2, hours: 3, minutes: 4, seconds: 5 });
        assert_eq!(face.groups()[0].0, "02");
        assert_eq!(face.groups()[3], ("05".to_string(), "Seconds"));
    }

    #[test]
    fn test_tick_stops_at_zero() {
        assert_eq!(tick(10.0, 1.0), 9.0);
        assert_eq!(tick(0.4, 1.0), 0.0);
    }

    /// Central European time for 2024 only: +02:00 between the spring and
    /// autumn transitions, +01:00 otherwise
    #[derive(Debug, Clone, Copy)]
    struct CentralEurope2024;

    impl CentralEurope2024 {
        fn summer_start() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap().and_hms_opt(1, 0, 0).unwrap()
        }

        fn summer_end() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 10, 27).unwrap().and_hms_opt(1, 0, 0).unwrap()
        }

        fn offset_hours(utc: &NaiveDateTime) -> i32 {
            if *utc >= Self::summer_start() && *utc < Self::summer_end() { 2 } else { 1 }
        }
    }

    impl TimeZone for CentralEurope2024 {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            CentralEurope2024
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> MappedLocalTime<FixedOffset> {
            // Larger offset first so the earlier instant comes first
            let candidates: Vec<FixedOffset> = [2, 1]
                .into_iter()
                .filter(|hours| Self::offset_hours(&(*local - TimeDelta::hours(*hours as i64))) == *hours)
                .map(|hours| FixedOffset::east_opt(hours * 3600).unwrap())
                .collect();
            match candidates.as_slice() {
                [] => MappedLocalTime::None,
                [one] => MappedLocalTime::Single(*one),
                [first, second, ..] => MappedLocalTime::Ambiguous(*first, *second),
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            FixedOffset::east_opt(Self::offset_hours(utc) * 3600).unwrap()
        }
    }

    #[test]
    fn test_ambiguous_local_time_takes_earlier_instant() {
        // 02:30 occurs twice on 2024-10-27; the first is 00:30 UTC
        let now = Utc.with_ymd_and_hms(2024, 10, 27, 0, 0, 0).unwrap();
        let countdown = Countdown::from_attribute("2024-10-27 02:30:00", now, &CentralEurope2024).unwrap();
        assert_eq!(countdown.remaining_ms, 30 * 60_000);
    }

    #[test]
    fn test_skipped_local_time_moves_past_gap() {
        // 02:30 does not exist on 2024-03-31; read with +01:00 it is 01:30 UTC
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 1, 0, 0).unwrap();
        let countdown = Countdown::from_attribute("2024-03-31 02:30", now, &CentralEurope2024).unwrap();
        assert_eq!(countdown.remaining_ms, 30 * 60_000);
    }

    #[test]
    fn test_regular_local_time_in_dst_zone() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap();
        let countdown = Countdown::from_attribute("2024-07-01 13:00", now, &CentralEurope2024).unwrap();
        assert_eq!(countdown.remaining_ms, 60 * 60_000);
    }
}
