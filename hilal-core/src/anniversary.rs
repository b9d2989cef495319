//! Age, next anniversary and countdown for a birth date.
//!
//! Every operation takes `today` explicitly as a local wall-clock date and
//! first re-expresses it in the birth date's own calendar, so a Hijri birth
//! date is aged and counted down in Hijri years and months.
//!
//! Anniversaries that fall on a day missing from the target month (Feb 29 in
//! a common year, day 30 of a 29-day Hijri month) are clamped to the last
//! day of that month. Each year's anniversary is derived from the original
//! birth month and day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{CalendarDate, CalendarKind};
use crate::error::{HilalError, HilalResult};

/// Calendar-aware distance to the next anniversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeUntil {
    /// Whole months.
    pub months: u32,
    /// Days remaining after the whole months.
    pub days: u32,
    /// Total day count; zero when the anniversary is today.
    pub total_days: u32,
}

impl TimeUntil {
    /// Decomposes the span `from..=to` into whole months plus days.
    ///
    /// Both dates must be in the same calendar and `to` must not precede
    /// `from`.
    pub fn between(from: &CalendarDate, to: &CalendarDate) -> HilalResult<Self> {
        let to = to.to_calendar(from.calendar())?;
        let total = from.days_until(&to)?;
        if total < 0 {
            return Err(HilalError::Conversion(format!("{to} precedes {from}")));
        }

        let mut months = (to.year() - from.year()) * 12 + i32::from(to.month())
            - i32::from(from.month());
        if to.day() < from.day() {
            months -= 1;
        }
        let months = months.max(0);
        let days = from.add_months_clamped(months)?.days_until(&to)?;

        Ok(Self {
            months: months as u32,
            days: days as u32,
            total_days: total as u32,
        })
    }

    pub fn is_today(&self) -> bool {
        self.total_days == 0
    }
}

/// `today` expressed in `calendar`.
pub fn today_in(calendar: CalendarKind, today: NaiveDate) -> HilalResult<CalendarDate> {
    CalendarDate::from_naive(calendar, today)
}

/// Whole years elapsed from `birth` to `on`, in the birth date's calendar.
///
/// A year only counts once its (clamped) anniversary has been reached. Dates
/// before the birth date give zero.
pub fn age_on(birth: &CalendarDate, on: &CalendarDate) -> HilalResult<u32> {
    let on = on.to_calendar(birth.calendar())?;
    if on < *birth {
        return Ok(0);
    }
    let mut years = on.year() - birth.year();
    if on < birth.with_year_clamped(on.year())? {
        years -= 1;
    }
    Ok(years.max(0) as u32)
}

/// Age on `today`.
pub fn age(birth: &CalendarDate, today: NaiveDate) -> HilalResult<u32> {
    age_on(birth, &today_in(birth.calendar(), today)?)
}

/// The first anniversary of `birth` on or after `today`.
///
/// When the anniversary is today, today is returned.
pub fn next_occurrence(birth: &CalendarDate, today: NaiveDate) -> HilalResult<CalendarDate> {
    let today = today_in(birth.calendar(), today)?;
    let candidate = birth.with_year_clamped(today.year())?;
    if candidate < today {
        birth.with_year_clamped(today.year() + 1)
    } else {
        Ok(candidate)
    }
}

/// Months, days and total days from `today` to the next anniversary.
pub fn time_until(birth: &CalendarDate, today: NaiveDate) -> HilalResult<TimeUntil> {
    let next = next_occurrence(birth, today)?;
    TimeUntil::between(&today_in(birth.calendar(), today)?, &next)
}
