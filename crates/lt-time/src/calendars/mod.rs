//! Concrete holiday calendars.

/// Calendar with holidays supplied at run time.
pub mod bespoke_calendar;

/// Japanese national holidays.
pub mod japan;
