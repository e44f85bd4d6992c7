//! Japan calendar.
//!
//! National holidays as defined by the Act on National Holidays
//! (国民の祝日に関する法律), including the moveable "Happy Monday" days,
//! the equinoxes, substitute holidays and citizen's holidays.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::weekday::Weekday;
use lt_core::errors::Result;

/// First year with holidays under the current act (in force from July 1948).
const FIRST_YEAR: u16 = 1949;

/// Last year covered by [`Date`].
const LAST_YEAR: u16 = 2199;

/// Citizen's holidays exist from the 1985 amendment onwards.
const CITIZENS_HOLIDAY_FIRST_YEAR: u16 = 1986;

/// From 2007 the substitute is the next non-holiday, not just Monday.
const NEXT_FREE_DAY_SUBSTITUTE_FIRST_YEAR: u16 = 2007;

/// Name given to a substitute holiday (振替休日).
pub const SUBSTITUTE_HOLIDAY: &str = "Substitute Holiday";

/// Name given to a citizen's holiday (国民の休日).
pub const CITIZENS_HOLIDAY: &str = "Citizen's Holiday";

/// Japan calendar.
///
/// Weekends and the following holidays are observed (current rules):
/// * New Year's Day (Jan 1)
/// * Coming of Age Day (2nd Monday in January)
/// * National Foundation Day (Feb 11)
/// * Emperor's Birthday (Feb 23 since 2020; Dec 23 from 1989 to 2018)
/// * Vernal Equinox Day (Mar 20–21)
/// * Showa Day (Apr 29)
/// * Constitution Memorial Day (May 3)
/// * Greenery Day (May 4)
/// * Children's Day (May 5)
/// * Marine Day (3rd Monday in July)
/// * Mountain Day (Aug 11, since 2016)
/// * Respect for the Aged Day (3rd Monday in September)
/// * Autumnal Equinox Day (Sep 22–23)
/// * Sports Day (2nd Monday in October)
/// * Culture Day (Nov 3)
/// * Labour Thanksgiving Day (Nov 23)
///
/// If a holiday falls on a Sunday, the next day that is not a holiday is
/// observed as a substitute (*furikae kyūjitsu*). A weekday squeezed
/// between two holidays is a citizen's holiday (*kokumin no kyūjitsu*).
/// One-off imperial and Olympic days are included.
///
/// Holidays for 1949–2199 are computed on first use and cached for the
/// life of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct Japan;

impl Japan {
    /// All holidays of `year` in date order, with their English names.
    ///
    /// Weekends are not listed unless they are also holidays.
    pub fn holidays_in(year: u16) -> Vec<(Date, &'static str)> {
        holidays_for_year(year)
    }

    /// Name of the holiday on `date`, if any.
    pub fn holiday_name(date: Date) -> Option<&'static str> {
        table().get(&date).copied()
    }
}

impl HolidayCalendar for Japan {
    fn name(&self) -> &str {
        "Japan"
    }

    fn is_public_holiday(&self, date: Date) -> bool {
        table().contains_key(&date)
    }
}

fn table() -> &'static HashMap<Date, &'static str> {
    static TABLE: OnceLock<HashMap<Date, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table: HashMap<_, _> = (FIRST_YEAR..=LAST_YEAR)
            .flat_map(holidays_for_year)
            .collect();
        tracing::debug!(entries = table.len(), "built Japanese holiday table");
        table
    })
}

/// Day of March on which the vernal equinox falls.
///
/// Standard approximation used by the National Astronomical Observatory
/// for 1900–2150; later years reuse the 2100–2150 coefficients.
fn vernal_equinox_day(year: u16) -> u8 {
    equinox_day(year, 20.8357, 20.8431, 21.8510)
}

/// Day of September on which the autumnal equinox falls.
fn autumnal_equinox_day(year: u16) -> u8 {
    equinox_day(year, 23.2588, 23.2488, 24.2488)
}

fn equinox_day(year: u16, before_1980: f64, until_2099: f64, from_2100: f64) -> u8 {
    let y = year as i32;
    let (base, leap_shift) = match y {
        ..=1979 => (before_1980, (y - 1983) / 4),
        1980..=2099 => (until_2099, (y - 1980) / 4),
        _ => (from_2100, (y - 1980) / 4),
    };
    (base + 0.242194 * (y - 1980) as f64 - leap_shift as f64) as u8
}

/// Holidays named directly by the act, before substitute and citizen's
/// holidays are derived.
fn named_holidays(year: u16) -> Vec<(Date, &'static str)> {
    let mut out = Vec::new();
    let mut add = |date: Result<Date>, name: &'static str| {
        if let Ok(date) = date {
            out.push((date, name));
        }
    };
    let on = |month: u8, day: u8| Date::from_ymd(year, month, day);
    let monday = |n: u8, month: u8| Date::nth_weekday(n, Weekday::Monday, year, month);

    add(on(1, 1), "New Year's Day");
    if year < 2000 {
        add(on(1, 15), "Coming of Age Day");
    } else {
        add(monday(2, 1), "Coming of Age Day");
    }
    if year >= 1967 {
        add(on(2, 11), "National Foundation Day");
    }
    if year >= 2020 {
        add(on(2, 23), "Emperor's Birthday");
    }
    add(on(3, vernal_equinox_day(year)), "Vernal Equinox Day");
    match year {
        ..=1988 => add(on(4, 29), "Emperor's Birthday"),
        1989..=2006 => add(on(4, 29), "Greenery Day"),
        _ => add(on(4, 29), "Showa Day"),
    }
    add(on(5, 3), "Constitution Memorial Day");
    if year >= 2007 {
        add(on(5, 4), "Greenery Day");
    }
    add(on(5, 5), "Children's Day");
    match year {
        ..=1995 => {}
        1996..=2002 => add(on(7, 20), "Marine Day"),
        2020 => add(on(7, 23), "Marine Day"),
        2021 => add(on(7, 22), "Marine Day"),
        _ => add(monday(3, 7), "Marine Day"),
    }
    match year {
        ..=2015 => {}
        2020 => add(on(8, 10), "Mountain Day"),
        2021 => add(on(8, 8), "Mountain Day"),
        _ => add(on(8, 11), "Mountain Day"),
    }
    match year {
        ..=1965 => {}
        1966..=2002 => add(on(9, 15), "Respect for the Aged Day"),
        _ => add(monday(3, 9), "Respect for the Aged Day"),
    }
    add(on(9, autumnal_equinox_day(year)), "Autumnal Equinox Day");
    match year {
        ..=1965 => {}
        1966..=1999 => add(on(10, 10), "Health and Sports Day"),
        2000..=2019 => add(monday(2, 10), "Health and Sports Day"),
        2020 => add(on(7, 24), "Sports Day"),
        2021 => add(on(7, 23), "Sports Day"),
        _ => add(monday(2, 10), "Sports Day"),
    }
    add(on(11, 3), "Culture Day");
    add(on(11, 23), "Labour Thanksgiving Day");
    if (1989..=2018).contains(&year) {
        add(on(12, 23), "Emperor's Birthday");
    }

    match year {
        1959 => add(on(4, 10), "Wedding of Crown Prince Akihito"),
        1989 => add(on(2, 24), "Funeral of Emperor Showa"),
        1990 => add(on(11, 12), "Enthronement Ceremony"),
        1993 => add(on(6, 9), "Wedding of Crown Prince Naruhito"),
        2019 => {
            add(on(5, 1), "Enthronement Day");
            add(on(10, 22), "Enthronement Ceremony");
        }
        _ => {}
    }
    out
}

fn holidays_for_year(year: u16) -> Vec<(Date, &'static str)> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Vec::new();
    }
    let mut days: BTreeMap<Date, &'static str> = named_holidays(year).into_iter().collect();

    if year >= CITIZENS_HOLIDAY_FIRST_YEAR {
        let sandwiched: Vec<Date> = days
            .keys()
            .zip(days.keys().skip(1))
            .filter(|(a, b)| **b - **a == 2)
            .filter_map(|(a, _)| a.add_days(1).ok())
            .filter(|d| d.weekday() != Weekday::Sunday)
            .collect();
        for d in sandwiched {
            days.insert(d, CITIZENS_HOLIDAY);
        }
    }

    let substitutes_from = Date::from_ymd(1973, 4, 12).unwrap_or(Date::MAX);
    let sundays: Vec<Date> = days
        .keys()
        .copied()
        .filter(|d| d.weekday() == Weekday::Sunday && *d >= substitutes_from)
        .collect();
    for sunday in sundays {
        let mut candidate = sunday.add_days(1);
        if year >= NEXT_FREE_DAY_SUBSTITUTE_FIRST_YEAR {
            while let Ok(d) = candidate {
                if !days.contains_key(&d) {
                    break;
                }
                candidate = d.add_days(1);
            }
        }
        if let Ok(d) = candidate {
            days.entry(d).or_insert(SUBSTITUTE_HOLIDAY);
        }
    }

    days.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn equinoxes() {
        assert_eq!(vernal_equinox_day(2019), 21);
        assert_eq!(vernal_equinox_day(2026), 20);
        assert_eq!(autumnal_equinox_day(2020), 22);
        assert_eq!(autumnal_equinox_day(2026), 23);
        assert_eq!(vernal_equinox_day(1979), 21);
    }

    #[test]
    fn new_years_2027() {
        let cal = Japan;
        assert!(cal.is_public_holiday(date(2027, 1, 1)));
        // Jan 2 and 3 are customary days off, not national holidays
        assert!(!cal.is_public_holiday(date(2027, 1, 2)));
        assert_eq!(Japan::holiday_name(date(2027, 1, 1)), Some("New Year's Day"));
    }

    #[test]
    fn coming_of_age_2026() {
        // 2nd Monday in January 2026 = Jan 12
        let cal = Japan;
        assert!(cal.is_public_holiday(date(2026, 1, 12)));
        assert!(!cal.is_business_day(date(2026, 1, 12)));
    }

    #[test]
    fn golden_week_substitute_2026() {
        // May 3, 2026 is a Sunday; May 4 and 5 are already holidays
        let cal = Japan;
        assert!(cal.is_public_holiday(date(2026, 5, 6)));
        assert_eq!(Japan::holiday_name(date(2026, 5, 6)), Some(SUBSTITUTE_HOLIDAY));
        assert!(cal.is_business_day(date(2026, 5, 7)));
    }

    #[test]
    fn silver_week_2026() {
        // Respect for the Aged Day (Mon 21) and the equinox (Wed 23)
        // squeeze Tuesday 22 into a citizen's holiday.
        let cal = Japan;
        assert!(cal.is_public_holiday(date(2026, 9, 21)));
        assert_eq!(Japan::holiday_name(date(2026, 9, 22)), Some(CITIZENS_HOLIDAY));
        assert!(cal.is_public_holiday(date(2026, 9, 23)));
    }

    #[test]
    fn no_emperors_birthday_in_2019() {
        assert!(!Japan.is_public_holiday(date(2019, 12, 23)));
        assert!(!Japan.is_public_holiday(date(2019, 2, 23)));
        assert!(Japan.is_public_holiday(date(2018, 12, 24))); // substitute for Sun 23rd
    }

    #[test]
    fn pre_2007_monday_substitute() {
        // Nov 23, 2003 was a Sunday → Monday 24 off
        assert_eq!(
            Japan::holiday_name(date(2003, 11, 24)),
            Some(SUBSTITUTE_HOLIDAY)
        );
        // May 4 before 2007 was a citizen's holiday
        assert_eq!(Japan::holiday_name(date(2005, 5, 4)), Some(CITIZENS_HOLIDAY));
    }

    #[test]
    fn outside_table_is_empty() {
        assert!(Japan::holidays_in(1940).is_empty());
        assert!(!Japan.is_public_holiday(date(1940, 1, 1)));
    }

    #[test]
    fn normal_business_day() {
        let cal = Japan;
        // 2026-10-22 is a Thursday
        assert!(cal.is_business_day(date(2026, 10, 22)));
    }
}
