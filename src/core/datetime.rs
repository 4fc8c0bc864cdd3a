//! Calendar and timezone helpers.
//!
//! All functions take their anchor explicitly; nothing here reads the
//! system clock.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Weekday};
use chrono_tz::Tz;

use crate::error::{PostponeError, ResolveError};

/// Parse an IANA timezone name such as `Europe/Moscow` or `UTC`.
///
/// # Errors
///
/// Returns `PostponeError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, PostponeError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| PostponeError::InvalidTimezone(name.to_string()))
}

/// Parse an RFC 3339 anchor time and convert it into `tz`.
///
/// # Errors
///
/// Returns `PostponeError::InvalidAnchor` if the input is not RFC 3339.
pub fn parse_anchor(input: &str, tz: Tz) -> Result<DateTime<Tz>, PostponeError> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.with_timezone(&tz))
        .map_err(|e| PostponeError::InvalidAnchor {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// The next date after `date` that falls on `target`.
///
/// Never returns `date` itself: if `date` is already a `target`, the result
/// is a full week later.
#[must_use]
pub fn next_weekday(date: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let mut days_ahead = i64::from(target.num_days_from_monday())
        - i64::from(date.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    date.checked_add_days(Days::new(days_ahead.unsigned_abs()))
}

/// The first day of the month after `date`'s month.
#[must_use]
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year().checked_add(1)?, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Local midnight of `date` in `tz`.
///
/// When midnight is ambiguous (clocks fall back across it) the earlier
/// instant is used.
///
/// # Errors
///
/// Returns `ResolveError::NonexistentLocalTime` when a DST transition skips
/// midnight on that date.
pub fn start_of_day(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>, ResolveError> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or_else(|| ResolveError::NonexistentLocalTime {
            date,
            timezone: tz.name().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Europe/Moscow").unwrap(), Tz::Europe__Moscow);
        assert_eq!(parse_timezone("UTC").unwrap(), Tz::UTC);
        assert!(matches!(
            parse_timezone("Mars/Olympus"),
            Err(PostponeError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn test_parse_anchor_converts_zone() {
        let anchor = parse_anchor("2019-10-19T09:00:00Z", Tz::Europe__Moscow).unwrap();
        assert_eq!(anchor.hour(), 12);
        assert_eq!(anchor.timezone(), Tz::Europe__Moscow);
    }

    #[test]
    fn test_parse_anchor_rejects_garbage() {
        assert!(matches!(
            parse_anchor("yesterday", Tz::UTC),
            Err(PostponeError::InvalidAnchor { .. })
        ));
    }

    #[test]
    fn test_next_weekday_later_this_week() {
        // 2019-10-16 is a Wednesday
        assert_eq!(
            next_weekday(date(2019, 10, 16), Weekday::Fri),
            Some(date(2019, 10, 18))
        );
    }

    #[test]
    fn test_next_weekday_wraps_to_next_week() {
        assert_eq!(
            next_weekday(date(2019, 10, 16), Weekday::Mon),
            Some(date(2019, 10, 21))
        );
    }

    #[test]
    fn test_next_weekday_same_day_is_a_week_later() {
        // 2019-10-21 is a Monday
        assert_eq!(
            next_weekday(date(2019, 10, 21), Weekday::Mon),
            Some(date(2019, 10, 28))
        );
    }

    #[test]
    fn test_next_weekday_crosses_month() {
        // 2019-10-31 is a Thursday
        assert_eq!(
            next_weekday(date(2019, 10, 31), Weekday::Sat),
            Some(date(2019, 11, 2))
        );
    }

    #[test]
    fn test_first_of_next_month() {
        assert_eq!(first_of_next_month(date(2019, 10, 19)), Some(date(2019, 11, 1)));
        assert_eq!(first_of_next_month(date(2019, 1, 31)), Some(date(2019, 2, 1)));
        assert_eq!(first_of_next_month(date(2019, 12, 31)), Some(date(2020, 1, 1)));
    }

    #[test]
    fn test_start_of_day_is_local_midnight() {
        let midnight = start_of_day(date(2019, 10, 19), Tz::Asia__Tokyo).unwrap();
        assert_eq!(midnight.date_naive(), date(2019, 10, 19));
        assert_eq!((midnight.hour(), midnight.minute(), midnight.second()), (0, 0, 0));
        assert_eq!(midnight.timestamp(), 1_571_410_800);
    }

    #[test]
    fn test_start_of_day_in_dst_gap() {
        // Brazil skipped 00:00-01:00 on 2018-11-04
        let result = start_of_day(date(2018, 11, 4), Tz::America__Sao_Paulo);
        assert!(matches!(
            result,
            Err(ResolveError::NonexistentLocalTime { .. })
        ));
    }

    #[test]
    fn test_start_of_day_ambiguous_takes_earlier() {
        // Cuba fell back from 01:00 to 00:00 on 2019-11-03, so midnight happened twice
        let midnight = start_of_day(date(2019, 11, 3), Tz::America__Havana).unwrap();
        assert_eq!(midnight.to_rfc3339(), "2019-11-03T00:00:00-04:00");
        assert_eq!(midnight.timestamp(), 1_572_753_600);
    }
}
