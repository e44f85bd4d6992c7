//! # lt-time
//!
//! Date, weekday, holiday-calendar, and business-day offset types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day offsets (`offset`, `Direction`).
pub mod business_days;

/// `HolidayCalendar` trait and the trivial implementations.
pub mod calendar;

/// Concrete calendar implementations (country specific or user defined).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_days::{offset, Direction};
pub use calendar::{HolidayCalendar, NoHolidays};
pub use calendars::bespoke_calendar::BespokeCalendar;
pub use calendars::japan::Japan;
pub use date::Date;
pub use weekday::Weekday;
