//! Bespoke calendar: a calendar with user-defined holidays.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use std::collections::HashSet;

/// A calendar where holidays are added manually at run time.
///
/// Useful for company closures layered on top of nothing, and as a
/// deterministic calendar in tests.
#[derive(Debug, Clone)]
pub struct BespokeCalendar {
    name: String,
    holidays: HashSet<Date>,
}

impl BespokeCalendar {
    /// Create a new bespoke calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: HashSet::new(),
        }
    }

    /// Create a calendar pre-populated with `holidays`.
    pub fn with_holidays(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Add a holiday. Weekends are already non-business days.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: Date) {
        self.holidays.remove(&date);
    }

    /// Return the number of explicitly-added holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl HolidayCalendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_public_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}
