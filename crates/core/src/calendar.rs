//! Business-day date arithmetic. Weekends are Saturday and Sunday; there is
//! no holiday calendar.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// True if the date falls Monday through Friday.
pub fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The next business day strictly after `date`.
pub fn next_workday(date: NaiveDate) -> NaiveDate {
    let mut d = date + Days::new(1);
    while !is_workday(d) {
        d = d + Days::new(1);
    }
    d
}

/// Advance `date` forward by `n` business days.
///
/// An advance of 0 returns the date unchanged.
pub fn add_workdays(date: NaiveDate, n: u32) -> NaiveDate {
    let mut d = date;
    for _ in 0..n {
        d = next_workday(d);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_are_workdays() {
        // 2024-01-01 is a Monday
        assert!(is_workday(date(2024, 1, 1)));
        assert!(is_workday(date(2024, 1, 5))); // Friday
        assert!(!is_workday(date(2024, 1, 6))); // Saturday
        assert!(!is_workday(date(2024, 1, 7))); // Sunday
    }

    #[test]
    fn zero_advance_is_identity() {
        let monday = date(2024, 1, 1);
        assert_eq!(add_workdays(monday, 0), monday);
    }

    #[test]
    fn advance_within_week() {
        let monday = date(2024, 1, 1);
        assert_eq!(add_workdays(monday, 1), date(2024, 1, 2));
        assert_eq!(add_workdays(monday, 4), date(2024, 1, 5));
    }

    #[test]
    fn advance_skips_weekend() {
        let friday = date(2024, 1, 5);
        assert_eq!(add_workdays(friday, 1), date(2024, 1, 8)); // Monday
        assert_eq!(add_workdays(friday, 2), date(2024, 1, 9));
    }

    #[test]
    fn next_workday_from_friday_is_monday() {
        assert_eq!(next_workday(date(2024, 1, 5)), date(2024, 1, 8));
    }

    #[test]
    fn next_workday_from_saturday_is_monday() {
        assert_eq!(next_workday(date(2024, 1, 6)), date(2024, 1, 8));
    }

    #[test]
    fn advance_over_two_weekends() {
        let monday = date(2024, 1, 1);
        // 10 business days = two full weeks
        assert_eq!(add_workdays(monday, 10), date(2024, 1, 15));
    }
}
