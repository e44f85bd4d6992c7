//! Business-day offsets.
//!
//! [`offset`] walks the calendar one day at a time and counts only the days
//! that are Monday–Friday and not public holidays. The start date itself is
//! never counted.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use lt_core::errors::{Error, Result};
use lt_core::{ensure, BusinessDays};
use serde::{Deserialize, Serialize};

/// Calendar steps allowed per requested business day.
pub const STEPS_PER_BUSINESS_DAY: u32 = 10;

/// Extra calendar steps allowed on top of the per-day budget, so that a
/// short count can still cross a long real holiday run.
pub const STEP_ALLOWANCE: u32 = 30;

/// Which way to count through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

impl Direction {
    /// Calendar-day step: `+1` or `-1`.
    pub fn step(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        };
        write!(f, "{s}")
    }
}

/// Maximum calendar steps [`offset`] takes for `count` business days.
pub fn step_limit(count: u32) -> u32 {
    count
        .saturating_mul(STEPS_PER_BUSINESS_DAY)
        .saturating_add(STEP_ALLOWANCE)
}

/// Move `count` business days away from `start` in `direction`.
///
/// `count == 0` returns `start` unchanged, even if `start` is a holiday.
/// Otherwise the result is always a business day of `calendar`.
///
/// # Errors
/// * [`Error::InvalidInput`] if `count` is negative.
/// * [`Error::OracleExhaustion`] if more than [`step_limit`] calendar days
///   are stepped through without finding `count` business days.
/// * [`Error::Date`] if the walk leaves the supported date range.
///
/// # Example
/// ```
/// use lt_time::{offset, Date, Direction, NoHolidays};
///
/// let monday = Date::from_ymd(2026, 11, 30).unwrap();
/// let wednesday = offset(monday, 2, Direction::Forward, &NoHolidays).unwrap();
/// assert_eq!(wednesday, Date::from_ymd(2026, 12, 2).unwrap());
/// ```
pub fn offset(
    start: Date,
    count: BusinessDays,
    direction: Direction,
    calendar: &dyn HolidayCalendar,
) -> Result<Date> {
    ensure!(count >= 0, "business-day count must be non-negative, got {count}");

    let limit = step_limit(count as u32);
    let step = direction.step();
    let mut date = start;
    let mut remaining = count;
    let mut steps = 0u32;
    while remaining > 0 {
        if steps == limit {
            tracing::warn!(
                calendar = calendar.name(),
                %start,
                count,
                steps,
                "holiday calendar exhausted the business-day search"
            );
            return Err(Error::OracleExhaustion {
                calendar: calendar.name().to_string(),
                start: start.to_string(),
                count,
                steps,
            });
        }
        date = date.add_days(step)?;
        steps += 1;
        if calendar.is_business_day(date) {
            remaining -= 1;
        }
    }

    tracing::debug!(
        calendar = calendar.name(),
        %start,
        count,
        %direction,
        result = %date,
        steps,
        "business-day offset"
    );
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::NoHolidays;
    use crate::calendars::bespoke_calendar::BespokeCalendar;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[derive(Debug)]
    struct EveryDay;

    impl HolidayCalendar for EveryDay {
        fn name(&self) -> &str {
            "Every Day"
        }

        fn is_public_holiday(&self, _date: Date) -> bool {
            true
        }
    }

    #[test]
    fn zero_count_is_identity() {
        let sat = date(2026, 10, 24);
        assert_eq!(offset(sat, 0, Direction::Forward, &NoHolidays).unwrap(), sat);
        assert_eq!(offset(sat, 0, Direction::Backward, &EveryDay).unwrap(), sat);
    }

    #[test]
    fn negative_count_rejected() {
        let mon = date(2026, 10, 19);
        assert!(matches!(
            offset(mon, -1, Direction::Forward, &NoHolidays),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn forward_skips_weekend() {
        // Friday + 1 → Monday
        let fri = date(2026, 10, 23);
        assert_eq!(
            offset(fri, 1, Direction::Forward, &NoHolidays).unwrap(),
            date(2026, 10, 26)
        );
    }

    #[test]
    fn backward_never_counts_start() {
        // Monday − 1 → previous Friday, even though Monday is a business day
        let mon = date(2026, 10, 26);
        assert_eq!(
            offset(mon, 1, Direction::Backward, &NoHolidays).unwrap(),
            date(2026, 10, 23)
        );
    }

    #[test]
    fn skips_bespoke_holiday() {
        let cal = BespokeCalendar::with_holidays("Test", [date(2026, 10, 27)]);
        let mon = date(2026, 10, 26);
        let result = offset(mon, 1, Direction::Forward, &cal).unwrap();
        assert_eq!(result, date(2026, 10, 28));
        assert_eq!(result.weekday(), Weekday::Wednesday);
    }

    #[test]
    fn every_day_holiday_is_exhaustion() {
        let mon = date(2026, 10, 19);
        let err = offset(mon, 5, Direction::Backward, &EveryDay).unwrap_err();
        assert_eq!(
            err,
            Error::OracleExhaustion {
                calendar: "Every Day".into(),
                start: "2026-10-19".into(),
                count: 5,
                steps: step_limit(5),
            }
        );
    }

    #[test]
    fn leaving_range_is_date_error() {
        assert!(matches!(
            offset(Date::MAX, 1, Direction::Forward, &NoHolidays),
            Err(Error::Date(_))
        ));
    }

    #[test]
    fn step_limit_has_floor() {
        assert_eq!(step_limit(0), STEP_ALLOWANCE);
        assert_eq!(step_limit(15), 180);
        assert_eq!(step_limit(u32::MAX), u32::MAX);
    }
}
