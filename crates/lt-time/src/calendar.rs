//! `HolidayCalendar` trait and the trivial implementations.
//!
//! A holiday calendar only answers one question: is this date a public
//! holiday? Weekends are handled by the trait's default methods, so an
//! implementation never has to repeat the Saturday/Sunday check.

use crate::date::Date;
use crate::weekday::Weekday;

/// A source of public-holiday information for one jurisdiction.
///
/// The business-day calculator takes `&dyn HolidayCalendar`, so tests can
/// pass a deterministic fake while production code passes a real calendar
/// such as [`Japan`](crate::calendars::japan::Japan).
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Japan"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a designated public holiday.
    ///
    /// This says nothing about weekends: a Sunday that is also a national
    /// holiday returns `true`, an ordinary Sunday returns `false`.
    fn is_public_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if `date` is Monday–Friday and not a public holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_public_holiday(date)
    }

    /// Count the business days between `from` (exclusive) and `to`
    /// (inclusive).  Returns a negative number if `to < from`.
    fn business_days_between(&self, from: Date, to: Date) -> i32 {
        if from == to {
            return 0;
        }
        let (sign, start, end) = if to > from { (1, from, to) } else { (-1, to, from) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|&d| self.is_business_day(d))
            .count() as i32;
        sign * count
    }
}

/// A calendar with no public holidays: only weekends are non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_public_holiday(&self, _date: Date) -> bool {
        false
    }
}
