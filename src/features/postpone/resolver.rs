//! Due-date resolver.
//!
//! Turns a [`Command`] into a concrete due time relative to an anchor.
//! Durations keep the anchor's time of day; every calendar target lands on
//! local midnight in the anchor's zone.

use std::ops::RangeInclusive;

use chrono::{DateTime, Days, TimeDelta};
use chrono_tz::Tz;
use tracing::debug;

use super::command::{Command, ForSpec, NamedPhrase, TimeUnit, ToSpec, VaguePhrase};
use crate::core::{first_of_next_month, next_weekday, start_of_day, RandomSource};
use crate::error::ResolveError;

/// How many hours "a few hours" means.
pub const FEW_HOURS: RangeInclusive<u32> = 2..=5;

/// How many days "a few days" means.
pub const FEW_DAYS: RangeInclusive<u32> = 2..=5;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Resolve `command` against the anchor time `now`.
///
/// The result is in `now`'s timezone. `rng` is only consulted for the
/// "few hours" and "few days" phrases.
///
/// # Errors
///
/// Returns a [`ResolveError`] when the command has no resolution rule or the
/// result falls outside the representable calendar.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Tz;
/// use postpone::core::ThreadRandom;
/// use postpone::{parse, resolve};
///
/// let now = Tz::UTC.with_ymd_and_hms(2019, 10, 16, 15, 30, 0).unwrap();
/// let due = resolve(parse("to monday").unwrap(), now, &mut ThreadRandom).unwrap();
/// assert_eq!(due.to_rfc3339(), "2019-10-21T00:00:00+00:00");
/// ```
pub fn resolve<R>(
    command: Command,
    now: DateTime<Tz>,
    rng: &mut R,
) -> Result<DateTime<Tz>, ResolveError>
where
    R: RandomSource + ?Sized,
{
    let due = match command {
        Command::For(spec) => resolve_for(spec, now, rng)?,
        Command::To(spec) => resolve_to(spec, now)?,
    };

    debug!(%command, %now, %due, "resolved postponement");
    Ok(due)
}

fn resolve_for<R>(
    spec: ForSpec,
    now: DateTime<Tz>,
    rng: &mut R,
) -> Result<DateTime<Tz>, ResolveError>
where
    R: RandomSource + ?Sized,
{
    match spec {
        ForSpec::Duration { amount, unit } => {
            let (factor, what) = match unit {
                None => (1, "seconds"),
                Some(TimeUnit::Hours) => (SECONDS_PER_HOUR, "hours"),
                Some(TimeUnit::Days) => (SECONDS_PER_DAY, "days"),
                Some(unsupported @ TimeUnit::Seconds) => {
                    return Err(ResolveError::UnsupportedUnit(unsupported))
                },
            };
            let out_of_range = ResolveError::OutOfRange { amount, what };

            let seconds = amount
                .checked_mul(factor)
                .and_then(|s| i64::try_from(s).ok())
                .ok_or_else(|| out_of_range.clone())?;
            TimeDelta::try_seconds(seconds)
                .and_then(|delta| now.checked_add_signed(delta))
                .ok_or(out_of_range)
        },
        ForSpec::Vague {
            phrase: VaguePhrase::FewHours,
        } => {
            let hours = draw(rng, &FEW_HOURS);
            now.checked_add_signed(TimeDelta::hours(i64::from(hours)))
                .ok_or(ResolveError::OutOfRange {
                    amount: u64::from(hours),
                    what: "hours",
                })
        },
        ForSpec::Vague {
            phrase: VaguePhrase::FewDays,
        } => {
            let days = draw(rng, &FEW_DAYS);
            let date = now
                .date_naive()
                .checked_add_days(Days::new(u64::from(days)))
                .ok_or(ResolveError::OutOfRange {
                    amount: u64::from(days),
                    what: "days",
                })?;
            start_of_day(date, now.timezone())
        },
    }
}

fn resolve_to(spec: ToSpec, now: DateTime<Tz>) -> Result<DateTime<Tz>, ResolveError> {
    let tz = now.timezone();
    let today = now.date_naive();

    let date = match spec {
        ToSpec::Timestamp { value } => DateTime::from_timestamp(value, 0)
            .ok_or(ResolveError::InvalidTimestamp(value))?
            .with_timezone(&tz)
            .date_naive(),
        ToSpec::NamedTarget { phrase } => {
            let target = match phrase {
                NamedPhrase::Tomorrow => today.succ_opt(),
                NamedPhrase::NextMonth => first_of_next_month(today),
                day => day
                    .target_weekday()
                    .and_then(|weekday| next_weekday(today, weekday)),
            };
            target.ok_or(ResolveError::NoTargetDate {
                phrase,
                from: today,
            })?
        },
    };

    start_of_day(date, tz)
}

/// Draw from `range`, clamped so an injected source cannot escape the bounds.
fn draw<R>(rng: &mut R, range: &RangeInclusive<u32>) -> u32
where
    R: RandomSource + ?Sized,
{
    let (low, high) = (*range.start(), *range.end());
    rng.draw_inclusive(low, high).clamp(low, high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MockRandomSource, SeededRandom, ThreadRandom};
    use chrono::{Datelike, NaiveDate, TimeZone, Timelike, Weekday};
    use mockall::predicate::eq;

    /// Wednesday 2019-10-16 15:42:17 in `tz`.
    fn wednesday(tz: Tz) -> DateTime<Tz> {
        tz.with_ymd_and_hms(2019, 10, 16, 15, 42, 17).unwrap()
    }

    fn fixed_draw(value: u32) -> MockRandomSource {
        let mut rng = MockRandomSource::new();
        rng.expect_draw_inclusive()
            .with(eq(2), eq(5))
            .times(1)
            .return_const(value);
        rng
    }

    fn never_drawn() -> MockRandomSource {
        let mut rng = MockRandomSource::new();
        rng.expect_draw_inclusive().never();
        rng
    }

    fn named(phrase: NamedPhrase) -> Command {
        Command::To(ToSpec::NamedTarget { phrase })
    }

    fn is_midnight(due: &DateTime<Tz>) -> bool {
        due.hour() == 0 && due.minute() == 0 && due.second() == 0 && due.nanosecond() == 0
    }

    // ===================
    // Duration Tests
    // ===================

    #[test]
    fn test_raw_seconds_added() {
        let now = wednesday(Tz::UTC);
        for n in [0_u64, 1, 59, 3600, 1_000_000] {
            let command = Command::For(ForSpec::Duration { amount: n, unit: None });
            let due = resolve(command, now, &mut never_drawn()).unwrap();
            assert_eq!(due - now, TimeDelta::seconds(i64::try_from(n).unwrap()));
        }
    }

    #[test]
    fn test_hours_and_days_keep_minutes() {
        let now = wednesday(Tz::Europe__Berlin);
        for n in [0_u64, 1, 7, 48] {
            let hours = Command::For(ForSpec::Duration {
                amount: n,
                unit: Some(TimeUnit::Hours),
            });
            let due = resolve(hours, now, &mut never_drawn()).unwrap();
            assert_eq!(due - now, TimeDelta::seconds(i64::try_from(n * 3600).unwrap()));
            assert_eq!(due.minute(), now.minute());

            let days = Command::For(ForSpec::Duration {
                amount: n,
                unit: Some(TimeUnit::Days),
            });
            let due = resolve(days, now, &mut never_drawn()).unwrap();
            assert_eq!(due - now, TimeDelta::seconds(i64::try_from(n * 86_400).unwrap()));
            assert_eq!(due.minute(), now.minute());
        }
    }

    #[test]
    fn test_explicit_seconds_unit_is_unsupported() {
        let command = Command::For(ForSpec::Duration {
            amount: 5,
            unit: Some(TimeUnit::Seconds),
        });
        assert_eq!(
            resolve(command, wednesday(Tz::UTC), &mut never_drawn()),
            Err(ResolveError::UnsupportedUnit(TimeUnit::Seconds))
        );
    }

    #[test]
    fn test_huge_duration_is_out_of_range() {
        let command = Command::For(ForSpec::Duration {
            amount: u64::MAX,
            unit: Some(TimeUnit::Days),
        });
        assert!(matches!(
            resolve(command, wednesday(Tz::UTC), &mut never_drawn()),
            Err(ResolveError::OutOfRange { what: "days", .. })
        ));
    }

    // ===================
    // Vague Tests
    // ===================

    #[test]
    fn test_few_hours_uses_draw_without_truncation() {
        let now = wednesday(Tz::UTC);
        let command = Command::For(ForSpec::Vague {
            phrase: VaguePhrase::FewHours,
        });
        let due = resolve(command, now, &mut fixed_draw(3)).unwrap();
        assert_eq!(due - now, TimeDelta::hours(3));
        assert_eq!(due.minute(), 42);
        assert_eq!(due.second(), 17);
    }

    #[test]
    fn test_few_days_truncates_to_midnight() {
        let now = wednesday(Tz::America__New_York);
        let command = Command::For(ForSpec::Vague {
            phrase: VaguePhrase::FewDays,
        });
        let due = resolve(command, now, &mut fixed_draw(4)).unwrap();
        assert_eq!(due.date_naive(), NaiveDate::from_ymd_opt(2019, 10, 20).unwrap());
        assert!(is_midnight(&due));
        assert_eq!(due.timezone(), Tz::America__New_York);
    }

    #[test]
    fn test_out_of_range_draw_is_clamped() {
        let now = wednesday(Tz::UTC);
        let mut rng = MockRandomSource::new();
        rng.expect_draw_inclusive().return_const(42_u32);
        let command = Command::For(ForSpec::Vague {
            phrase: VaguePhrase::FewHours,
        });
        let due = resolve(command, now, &mut rng).unwrap();
        assert_eq!(due - now, TimeDelta::hours(5));

        let mut rng = MockRandomSource::new();
        rng.expect_draw_inclusive().return_const(0_u32);
        let command = Command::For(ForSpec::Vague {
            phrase: VaguePhrase::FewDays,
        });
        let due = resolve(command, now, &mut rng).unwrap();
        assert_eq!((due.date_naive() - now.date_naive()).num_days(), 2);
    }

    #[test]
    fn test_few_days_bounds_with_real_randomness() {
        let now = wednesday(Tz::Asia__Kolkata);
        let command = Command::For(ForSpec::Vague {
            phrase: VaguePhrase::FewDays,
        });
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            let due = resolve(command, now, &mut rng).unwrap();
            let days = (due.date_naive() - now.date_naive()).num_days();
            assert!((2..=5).contains(&days), "{days}");
            assert!(is_midnight(&due));
        }
    }

    #[test]
    fn test_few_hours_bounds_with_real_randomness() {
        let now = wednesday(Tz::UTC);
        let command = Command::For(ForSpec::Vague {
            phrase: VaguePhrase::FewHours,
        });
        let mut rng = SeededRandom::new(99);
        for _ in 0..100 {
            let delta = resolve(command, now, &mut rng).unwrap() - now;
            assert!(delta >= TimeDelta::hours(2) && delta <= TimeDelta::hours(5));
        }
    }

    // ===================
    // Named Target Tests
    // ===================

    #[test]
    fn test_tomorrow() {
        let due = resolve(named(NamedPhrase::Tomorrow), wednesday(Tz::UTC), &mut never_drawn())
            .unwrap();
        assert_eq!(due, Tz::UTC.with_ymd_and_hms(2019, 10, 17, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_monday_from_wednesday_is_following_week() {
        let due = resolve(named(NamedPhrase::Monday), wednesday(Tz::UTC), &mut never_drawn())
            .unwrap();
        assert_eq!(due, Tz::UTC.with_ymd_and_hms(2019, 10, 21, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_next_week_on_monday_skips_a_full_week() {
        let monday = Tz::UTC.with_ymd_and_hms(2019, 10, 21, 8, 0, 0).unwrap();
        let due = resolve(named(NamedPhrase::NextWeek), monday, &mut never_drawn()).unwrap();
        assert_eq!(due, Tz::UTC.with_ymd_and_hms(2019, 10, 28, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_next_week_matches_monday() {
        let now = wednesday(Tz::Europe__Moscow);
        assert_eq!(
            resolve(named(NamedPhrase::NextWeek), now, &mut never_drawn()),
            resolve(named(NamedPhrase::Monday), now, &mut never_drawn())
        );
    }

    #[test]
    fn test_weekend_matches_saturday() {
        let now = wednesday(Tz::UTC);
        let weekend = resolve(named(NamedPhrase::Weekend), now, &mut never_drawn()).unwrap();
        let saturday = resolve(named(NamedPhrase::Saturday), now, &mut never_drawn()).unwrap();
        assert_eq!(weekend, saturday);
        assert_eq!(weekend.weekday(), Weekday::Sat);
        assert_eq!(weekend.day(), 19);
    }

    #[test]
    fn test_every_weekday_is_strictly_in_the_future() {
        let now = wednesday(Tz::Australia__Sydney);
        let phrases = [
            NamedPhrase::Monday,
            NamedPhrase::Tuesday,
            NamedPhrase::Wednesday,
            NamedPhrase::Thursday,
            NamedPhrase::Friday,
            NamedPhrase::Saturday,
            NamedPhrase::Sunday,
        ];
        for phrase in phrases {
            let due = resolve(named(phrase), now, &mut never_drawn()).unwrap();
            let days = (due.date_naive() - now.date_naive()).num_days();
            assert!((1..=7).contains(&days), "{phrase}: {days}");
            assert_eq!(Some(due.weekday()), phrase.target_weekday());
            assert!(is_midnight(&due));
        }
    }

    #[test]
    fn test_same_weekday_is_a_week_later() {
        let due = resolve(named(NamedPhrase::Wednesday), wednesday(Tz::UTC), &mut never_drawn())
            .unwrap();
        assert_eq!(due.day(), 23);
    }

    #[test]
    fn test_next_month() {
        let due = resolve(named(NamedPhrase::NextMonth), wednesday(Tz::UTC), &mut never_drawn())
            .unwrap();
        assert_eq!(due, Tz::UTC.with_ymd_and_hms(2019, 11, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_next_month_in_december_rolls_year() {
        let now = Tz::Europe__Paris.with_ymd_and_hms(2019, 12, 31, 23, 59, 59).unwrap();
        let due = resolve(named(NamedPhrase::NextMonth), now, &mut never_drawn()).unwrap();
        assert_eq!((due.year(), due.month(), due.day()), (2020, 1, 1));
        assert!(is_midnight(&due));
    }

    // ===================
    // Timestamp Tests
    // ===================

    #[test]
    fn test_timestamp_truncated_in_anchor_zone() {
        // 1571475504 is 2019-10-19T08:58:24Z
        let command = Command::To(ToSpec::Timestamp {
            value: 1_571_475_504,
        });

        let due = resolve(command, wednesday(Tz::UTC), &mut never_drawn()).unwrap();
        assert_eq!(due, Tz::UTC.with_ymd_and_hms(2019, 10, 19, 0, 0, 0).unwrap());

        // Still the 18th in Honolulu (UTC-10)
        let due = resolve(command, wednesday(Tz::Pacific__Honolulu), &mut never_drawn()).unwrap();
        assert_eq!(
            due,
            Tz::Pacific__Honolulu.with_ymd_and_hms(2019, 10, 18, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_invalid_timestamp() {
        let command = Command::To(ToSpec::Timestamp { value: i64::MAX });
        assert_eq!(
            resolve(command, wednesday(Tz::UTC), &mut never_drawn()),
            Err(ResolveError::InvalidTimestamp(i64::MAX))
        );
    }

    #[test]
    fn test_named_target_past_last_date() {
        let now = Tz::UTC.from_utc_datetime(&NaiveDate::MAX.and_time(chrono::NaiveTime::MIN));
        for phrase in [NamedPhrase::Tomorrow, NamedPhrase::NextMonth, NamedPhrase::Friday] {
            let command = Command::To(ToSpec::NamedTarget { phrase });
            assert_eq!(
                resolve(command, now, &mut never_drawn()),
                Err(ResolveError::NoTargetDate {
                    phrase,
                    from: NaiveDate::MAX,
                })
            );
        }
    }

    #[test]
    fn test_midnight_in_dst_gap_fails() {
        // Sao Paulo clocks jumped from 00:00 to 01:00 on 2018-11-04
        let now = Tz::America__Sao_Paulo
            .with_ymd_and_hms(2018, 11, 3, 12, 0, 0)
            .unwrap();
        assert!(matches!(
            resolve(named(NamedPhrase::Tomorrow), now, &mut never_drawn()),
            Err(ResolveError::NonexistentLocalTime { .. })
        ));
    }
}
