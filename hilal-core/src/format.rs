//! Display strings for dates and countdowns.

use chrono::NaiveDate;

use crate::anniversary::TimeUntil;
use crate::calendar::{CalendarDate, CalendarKind, gregorian, hijri};
use crate::error::HilalResult;

fn month_name(date: &CalendarDate) -> &'static str {
    let index = usize::from(date.month()) - 1;
    match date.calendar() {
        CalendarKind::Gregorian => gregorian::MONTH_NAMES[index],
        CalendarKind::Hijri => hijri::MONTH_NAMES[index],
    }
}

/// `"July 18, 2024"`
pub fn display_gregorian_date(date: &CalendarDate) -> HilalResult<String> {
    let date = date.to_gregorian()?;
    Ok(format!("{} {}, {}", month_name(&date), date.day(), date.year()))
}

/// `"Muharram 11, 1446 AH"`
pub fn display_hijri_date(date: &CalendarDate) -> HilalResult<String> {
    let date = date.to_hijri()?;
    Ok(format!("{} {}, {} AH", month_name(&date), date.day(), date.year()))
}

/// Formats a date using the display rules of its own calendar.
pub fn display_date(date: &CalendarDate) -> HilalResult<String> {
    match date.calendar() {
        CalendarKind::Gregorian => display_gregorian_date(date),
        CalendarKind::Hijri => display_hijri_date(date),
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Human-readable countdown: `"Today!"`, `"1 Day"`, `"2 Months"`,
/// `"1 Month, 3 Days"`.
pub fn format_countdown(time: &TimeUntil) -> String {
    if time.is_today() {
        return "Today!".to_string();
    }
    match (time.months, time.days) {
        (0, days) => plural(days, "Day"),
        (months, 0) => plural(months, "Month"),
        (months, days) => format!("{}, {}", plural(months, "Month"), plural(days, "Day")),
    }
}

/// Today's date in both calendars, as shown at the top of the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayHeader {
    /// `"Muharram 11, 1446 AH"`
    pub hijri: String,
    /// `"Wednesday, July 17, 2024"`
    pub gregorian: String,
    /// `"1446 AH"`
    pub hijri_year: String,
}

impl TodayHeader {
    pub fn new(today: NaiveDate) -> HilalResult<Self> {
        let gregorian = CalendarDate::try_from(today)?;
        let hijri = gregorian.to_hijri()?;
        Ok(Self {
            hijri: display_hijri_date(&hijri)?,
            gregorian: format!(
                "{}, {}",
                today.format("%A"),
                display_gregorian_date(&gregorian)?
            ),
            hijri_year: format!("{} AH", hijri.year()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn until(months: u32, days: u32, total_days: u32) -> TimeUntil {
        TimeUntil {
            months,
            days,
            total_days,
        }
    }

    #[test]
    fn countdown_today() {
        assert_eq!(format_countdown(&until(0, 0, 0)), "Today!");
    }

    #[test]
    fn countdown_days_only() {
        assert_eq!(format_countdown(&until(0, 1, 1)), "1 Day");
        assert_eq!(format_countdown(&until(0, 12, 12)), "12 Days");
    }

    #[test]
    fn countdown_whole_months() {
        assert_eq!(format_countdown(&until(1, 0, 31)), "1 Month");
        assert_eq!(format_countdown(&until(2, 0, 62)), "2 Months");
    }

    #[test]
    fn countdown_months_and_days() {
        assert_eq!(format_countdown(&until(1, 1, 32)), "1 Month, 1 Day");
        assert_eq!(format_countdown(&until(3, 5, 97)), "3 Months, 5 Days");
    }

    #[test]
    fn gregorian_display() {
        let date = CalendarDate::gregorian(2024, 7, 18).unwrap();
        assert_eq!(display_gregorian_date(&date).unwrap(), "July 18, 2024");
        assert_eq!(display_date(&date).unwrap(), "July 18, 2024");
    }

    #[test]
    fn hijri_display_uses_umm_al_qura_names() {
        let date = CalendarDate::hijri(1446, 1, 11).unwrap();
        assert_eq!(display_hijri_date(&date).unwrap(), "Muharram 11, 1446 AH");
        let ramadan = CalendarDate::hijri(1445, 9, 1).unwrap();
        assert_eq!(display_date(&ramadan).unwrap(), "Ramadan 1, 1445 AH");
    }

    #[test]
    fn hijri_display_converts_gregorian_input() {
        let date = CalendarDate::gregorian(2024, 7, 17).unwrap();
        assert_eq!(display_hijri_date(&date).unwrap(), "Muharram 11, 1446 AH");
    }

    #[test]
    fn today_header() {
        let header = TodayHeader::new(NaiveDate::from_ymd_opt(2024, 7, 17).unwrap()).unwrap();
        assert_eq!(header.hijri, "Muharram 11, 1446 AH");
        assert_eq!(header.gregorian, "Wednesday, July 17, 2024");
        assert_eq!(header.hijri_year, "1446 AH");
    }
}
