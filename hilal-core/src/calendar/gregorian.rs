//! Proleptic Gregorian rules, backed by chrono.

use chrono::{Datelike, NaiveDate};

/// Length of `month`, or 0 when the month does not exist.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, u32::from(month) + 1)
    };
    NaiveDate::from_ymd_opt(year, u32::from(month), 1)
        .and_then(|_| NaiveDate::from_ymd_opt(next_year, next_month, 1))
        .and_then(|first| first.pred_opt())
        .map_or(0, |last| last.day() as u8)
}

pub(crate) fn to_naive(year: i32, month: u8, day: u8) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
}

pub(crate) fn from_naive(date: NaiveDate) -> (i32, u8, u8) {
    // month() and day() are bounded by 12 and 31
    (date.year(), date.month() as u8, date.day() as u8)
}

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_follow_century_rule() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn february_length_depends_on_leap_year() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn month_lengths_agree_with_chrono() {
        for year in [1999, 2000, 2023, 2024] {
            for month in 1..=12u8 {
                let last = days_in_month(year, month);
                assert!(to_naive(year, month, last).is_some());
                assert!(to_naive(year, month, last + 1).is_none());
            }
        }
    }

    #[test]
    fn december_and_invalid_months() {
        assert_eq!(days_in_month(9999, 12), 31);
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn naive_round_trip() {
        let date = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let (y, m, d) = from_naive(date);
        assert_eq!((y, m, d), (2000, 6, 15));
        assert_eq!(to_naive(y, m, d), Some(date));
    }
}
