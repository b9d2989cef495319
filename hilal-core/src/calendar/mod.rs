//! Calendar dates in the Gregorian and Hijri (Umm al-Qura) calendars.
//!
//! A [`CalendarDate`] is always valid for its calendar: construction checks
//! the month and day against that calendar's own month lengths. Dates are
//! immutable values; conversion and arithmetic produce new dates.
//!
//! Both calendars are mapped onto chrono's proleptic Gregorian day numbering,
//! so two dates in different calendars can be compared by absolute day.

pub mod gregorian;
pub mod hijri;

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HilalError, HilalResult};

pub use hijri::{HIJRI_MONTHS, HijriMonth};

/// Years accepted in either calendar.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// The two calendar systems a birthday is tracked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    Gregorian,
    Hijri,
}

impl CalendarKind {
    pub const ALL: [CalendarKind; 2] = [CalendarKind::Gregorian, CalendarKind::Hijri];

    /// Short tag used in event ids and filters.
    pub fn tag(&self) -> &'static str {
        match self {
            CalendarKind::Gregorian => "gregorian",
            CalendarKind::Hijri => "hijri",
        }
    }

    /// CLDR calendar identifier.
    pub fn calendar_id(&self) -> &'static str {
        match self {
            CalendarKind::Gregorian => "gregory",
            CalendarKind::Hijri => "islamic-umalqura",
        }
    }

    /// Badge label shown next to an event.
    pub fn badge(&self) -> &'static str {
        match self {
            CalendarKind::Gregorian => "Greg",
            CalendarKind::Hijri => "Hijri",
        }
    }

    /// Number of days in `month` of `year`.
    ///
    /// Both calendars have 12 months; a month outside 1..=12 is an
    /// [`HilalError::InvalidDate`].
    pub fn days_in_month(&self, year: i32, month: u8) -> HilalResult<u8> {
        check_year(*self, year)?;
        if !(1..=12).contains(&month) {
            return Err(HilalError::InvalidDate {
                calendar: *self,
                year,
                month,
                day: 1,
            });
        }
        match self {
            CalendarKind::Gregorian => Ok(gregorian::days_in_month(year, month)),
            CalendarKind::Hijri => hijri::days_in_month(year, month),
        }
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CalendarKind {
    type Err = HilalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gregorian" | "gregory" | "greg" => Ok(CalendarKind::Gregorian),
            "hijri" | "islamic" | "islamic-umalqura" => Ok(CalendarKind::Hijri),
            other => Err(HilalError::Parse(format!(
                "Unknown calendar '{other}'. Expected gregorian or hijri"
            ))),
        }
    }
}

fn check_year(calendar: CalendarKind, year: i32) -> HilalResult<()> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(HilalError::UnsupportedYear { calendar, year })
    }
}

/// A valid date in one calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    calendar: CalendarKind,
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date, validating month and day against the calendar.
    ///
    /// # Errors
    ///
    /// [`HilalError::UnsupportedYear`] when the year is outside
    /// [`SUPPORTED_YEARS`], [`HilalError::InvalidDate`] when the month or day
    /// does not exist in that year.
    pub fn new(calendar: CalendarKind, year: i32, month: u8, day: u8) -> HilalResult<Self> {
        let invalid = || HilalError::InvalidDate {
            calendar,
            year,
            month,
            day,
        };
        let max_day = calendar.days_in_month(year, month).map_err(|e| match e {
            HilalError::InvalidDate { .. } => invalid(),
            other => other,
        })?;
        if day == 0 || day > max_day {
            return Err(invalid());
        }
        Ok(Self {
            calendar,
            year,
            month,
            day,
        })
    }

    pub fn gregorian(year: i32, month: u8, day: u8) -> HilalResult<Self> {
        Self::new(CalendarKind::Gregorian, year, month, day)
    }

    pub fn hijri(year: i32, month: u8, day: u8) -> HilalResult<Self> {
        Self::new(CalendarKind::Hijri, year, month, day)
    }

    /// Creates a date in `calendar` whose day is clamped to the month length.
    ///
    /// Used for anniversaries: Feb 29 becomes Feb 28 in common years and a
    /// Hijri day 30 becomes day 29 in a 29-day month.
    pub fn new_clamped(calendar: CalendarKind, year: i32, month: u8, day: u8) -> HilalResult<Self> {
        let max_day = calendar.days_in_month(year, month)?;
        Self::new(calendar, year, month, day.clamp(1, max_day))
    }

    /// Parses `YYYY-MM-DD` as a date in `calendar`.
    pub fn parse(calendar: CalendarKind, s: &str) -> HilalResult<Self> {
        let bad = || HilalError::Parse(format!("Invalid date format '{s}'. Expected YYYY-MM-DD"));
        let mut parts = s.trim().splitn(3, '-');
        let year = parts.next().and_then(|p| p.parse::<i32>().ok()).ok_or_else(bad)?;
        let month = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(bad)?;
        let day = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(bad)?;
        Self::new(calendar, year, month, day)
    }

    pub fn calendar(&self) -> CalendarKind {
        self.calendar
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn days_in_month(&self) -> HilalResult<u8> {
        self.calendar.days_in_month(self.year, self.month)
    }

    /// The same absolute day as a chrono date.
    pub fn to_naive(&self) -> HilalResult<NaiveDate> {
        match self.calendar {
            CalendarKind::Gregorian => gregorian::to_naive(self.year, self.month, self.day)
                .ok_or_else(|| self.invalid()),
            CalendarKind::Hijri => hijri::to_naive(self.year, self.month, self.day),
        }
    }

    /// The absolute day `date` expressed in `calendar`.
    pub fn from_naive(calendar: CalendarKind, date: NaiveDate) -> HilalResult<Self> {
        let (year, month, day) = match calendar {
            CalendarKind::Gregorian => gregorian::from_naive(date),
            CalendarKind::Hijri => hijri::from_naive(date)?,
        };
        Self::new(calendar, year, month, day)
    }

    /// Reinterprets the same absolute day in `calendar`.
    pub fn to_calendar(&self, calendar: CalendarKind) -> HilalResult<Self> {
        if self.calendar == calendar {
            return Ok(*self);
        }
        Self::from_naive(calendar, self.to_naive()?)
    }

    pub fn to_hijri(&self) -> HilalResult<Self> {
        self.to_calendar(CalendarKind::Hijri)
    }

    pub fn to_gregorian(&self) -> HilalResult<Self> {
        self.to_calendar(CalendarKind::Gregorian)
    }

    /// Days from `self` to `other`; negative when `other` is earlier.
    pub fn days_until(&self, other: &CalendarDate) -> HilalResult<i64> {
        Ok(other
            .to_naive()?
            .signed_duration_since(self.to_naive()?)
            .num_days())
    }

    /// The anniversary of this date in `year`, with the day clamped.
    pub fn with_year_clamped(&self, year: i32) -> HilalResult<Self> {
        Self::new_clamped(self.calendar, year, self.month, self.day)
    }

    /// Adds whole months, clamping the day to the target month length.
    pub fn add_months_clamped(&self, months: i32) -> HilalResult<Self> {
        let index = self.year * 12 + i32::from(self.month) - 1 + months;
        let year = index.div_euclid(12);
        let month = (index.rem_euclid(12) + 1) as u8;
        Self::new_clamped(self.calendar, year, month, self.day)
    }

    fn invalid(&self) -> HilalError {
        HilalError::InvalidDate {
            calendar: self.calendar,
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

/// Dates only compare within the same calendar.
impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.calendar != other.calendar {
            return None;
        }
        Some((self.year, self.month, self.day).cmp(&(other.year, other.month, other.day)))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.calendar == CalendarKind::Hijri {
            f.write_str(" AH")?;
        }
        Ok(())
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = HilalError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_naive(CalendarKind::Gregorian, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::gregorian(y, m, d).unwrap()
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(matches!(
            CalendarDate::gregorian(2023, 2, 29),
            Err(HilalError::InvalidDate { day: 29, .. })
        ));
        assert!(CalendarDate::gregorian(2024, 2, 29).is_ok());
        assert!(CalendarDate::gregorian(2024, 13, 1).is_err());
        assert!(CalendarDate::gregorian(2024, 4, 0).is_err());
        assert!(CalendarDate::hijri(1446, 1, 31).is_err());
        assert!(CalendarDate::hijri(1446, 0, 1).is_err());
    }

    #[test]
    fn rejects_years_outside_range() {
        assert!(matches!(
            CalendarDate::gregorian(0, 1, 1),
            Err(HilalError::UnsupportedYear { year: 0, .. })
        ));
        assert!(matches!(
            CalendarDate::hijri(10_000, 1, 1),
            Err(HilalError::UnsupportedYear { .. })
        ));
    }

    #[test]
    fn converts_known_date_both_ways() {
        let g = greg(2024, 7, 17);
        let h = g.to_hijri().unwrap();
        assert_eq!(h.calendar(), CalendarKind::Hijri);
        assert_eq!((h.year(), h.month(), h.day()), (1446, 1, 11));
        assert_eq!(h.to_gregorian().unwrap(), g);
    }

    #[test]
    fn gregorian_round_trip_over_decades() {
        let mut date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2030, 12, 31).unwrap();
        while date <= end {
            let g = CalendarDate::try_from(date).unwrap();
            let back = g.to_hijri().unwrap().to_gregorian().unwrap();
            assert_eq!(back, g, "round trip failed for {date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn hijri_round_trip_for_every_day_of_a_year() {
        for month in 1..=12u8 {
            let len = CalendarKind::Hijri.days_in_month(1445, month).unwrap();
            for day in 1..=len {
                let h = CalendarDate::hijri(1445, month, day).unwrap();
                assert_eq!(h.to_gregorian().unwrap().to_hijri().unwrap(), h);
            }
        }
    }

    #[test]
    fn converting_to_own_calendar_is_identity() {
        let g = greg(2000, 6, 15);
        assert_eq!(g.to_gregorian().unwrap(), g);
    }

    #[test]
    fn early_gregorian_dates_have_no_hijri_form() {
        let g = greg(500, 1, 1);
        assert!(matches!(
            g.to_hijri(),
            Err(HilalError::UnsupportedYear { calendar: CalendarKind::Hijri, .. })
        ));
    }

    #[test]
    fn clamps_leap_day_in_common_year() {
        let birth = greg(2000, 2, 29);
        assert_eq!(birth.with_year_clamped(2001).unwrap(), greg(2001, 2, 28));
        assert_eq!(birth.with_year_clamped(2004).unwrap(), greg(2004, 2, 29));
    }

    #[test]
    fn clamps_hijri_day_30_in_short_month() {
        // Find a 30-day month and a 29-day month in neighbouring years.
        let long = (1440..1450)
            .flat_map(|y| (1..=12u8).map(move |m| (y, m)))
            .find(|&(y, m)| CalendarKind::Hijri.days_in_month(y, m).unwrap() == 30)
            .unwrap();
        let birth = CalendarDate::hijri(long.0, long.1, 30).unwrap();
        let short_year = (1400..1460)
            .find(|&y| CalendarKind::Hijri.days_in_month(y, long.1).unwrap() == 29)
            .unwrap();
        let anniversary = birth.with_year_clamped(short_year).unwrap();
        assert_eq!(anniversary.month(), long.1);
        assert_eq!(anniversary.day(), 29);
    }

    #[test]
    fn add_months_crosses_year_and_clamps() {
        assert_eq!(greg(2024, 1, 31).add_months_clamped(1).unwrap(), greg(2024, 2, 29));
        assert_eq!(greg(2024, 11, 15).add_months_clamped(3).unwrap(), greg(2025, 2, 15));
        assert_eq!(greg(2024, 3, 31).add_months_clamped(-1).unwrap(), greg(2024, 2, 29));
    }

    #[test]
    fn ordering_is_only_defined_within_one_calendar() {
        let a = greg(2024, 7, 17);
        let b = greg(2024, 7, 18);
        assert!(a < b);
        let h = a.to_hijri().unwrap();
        assert_eq!(a.partial_cmp(&h), None);
    }

    #[test]
    fn days_until_spans_calendars() {
        let g = greg(2024, 7, 17);
        let h = CalendarDate::hijri(1446, 1, 12).unwrap();
        assert_eq!(g.days_until(&h).unwrap(), 1);
        assert_eq!(h.days_until(&g).unwrap(), -1);
    }

    #[test]
    fn parses_iso_dates() {
        let d = CalendarDate::parse(CalendarKind::Hijri, "1446-01-11").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1446, 1, 11));
        assert!(CalendarDate::parse(CalendarKind::Gregorian, "2024/07/17").is_err());
        assert!(CalendarDate::parse(CalendarKind::Gregorian, "2023-02-29").is_err());
    }

    #[test]
    fn display_marks_hijri_dates() {
        assert_eq!(greg(2024, 7, 1).to_string(), "2024-07-01");
        assert_eq!(CalendarDate::hijri(1446, 1, 11).unwrap().to_string(), "1446-01-11 AH");
    }

    #[test]
    fn calendar_kind_parsing() {
        assert_eq!("Gregorian".parse::<CalendarKind>().unwrap(), CalendarKind::Gregorian);
        assert_eq!("islamic-umalqura".parse::<CalendarKind>().unwrap(), CalendarKind::Hijri);
        assert!("julian".parse::<CalendarKind>().is_err());
    }
}
