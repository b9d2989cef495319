//! Hijri calendar, Umm al-Qura variant.
//!
//! Month lengths and the mapping to absolute days come from the Umm al-Qura
//! data shipped with `icu_calendar`. Every Hijri month has 29 or 30 days and
//! every year has 12 months.

use chrono::{Datelike, NaiveDate};
use icu_calendar::islamic::IslamicUmmAlQura;
use icu_calendar::Date;

use crate::error::{HilalError, HilalResult};

fn umm_al_qura() -> IslamicUmmAlQura {
    IslamicUmmAlQura::new()
}

fn ummalqura_date(year: i32, month: u8, day: u8) -> HilalResult<Date<IslamicUmmAlQura>> {
    Date::try_new_ummalqura_date(year, month, day, umm_al_qura())
        .map_err(|e| HilalError::Conversion(format!("{year}-{month}-{day} AH: {e}")))
}

pub(crate) fn days_in_month(year: i32, month: u8) -> HilalResult<u8> {
    Ok(ummalqura_date(year, month, 1)?.days_in_month())
}

pub(crate) fn to_naive(year: i32, month: u8, day: u8) -> HilalResult<NaiveDate> {
    let iso = ummalqura_date(year, month, day)?.to_iso();
    NaiveDate::from_ymd_opt(
        iso.year().number,
        iso.month().ordinal,
        iso.day_of_month().0,
    )
    .ok_or_else(|| HilalError::Conversion(format!("{year}-{month}-{day} AH has no ISO equivalent")))
}

pub(crate) fn from_naive(date: NaiveDate) -> HilalResult<(i32, u8, u8)> {
    let iso = Date::try_new_iso_date(date.year(), date.month() as u8, date.day() as u8)
        .map_err(|e| HilalError::Conversion(format!("{date}: {e}")))?;
    let hijri = iso.to_calendar(umm_al_qura());
    let year = hijri.year().number;
    let month = hijri.month().ordinal as u8;
    let day = hijri.day_of_month().0 as u8;

    // icu 1.5 reports the 30th of some months as day 0 of the following one
    if day == 0 {
        return last_day_of_previous_month(year, month);
    }
    Ok((year, month, day))
}

fn last_day_of_previous_month(year: i32, month: u8) -> HilalResult<(i32, u8, u8)> {
    let (year, month) = if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    Ok((year, month, days_in_month(year, month)?))
}

/// English Umm al-Qura month names used for display, Muharram first.
pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiʻ I",
    "Rabiʻ II",
    "Jumada I",
    "Jumada II",
    "Rajab",
    "Shaʻban",
    "Ramadan",
    "Shawwal",
    "Dhuʻl-Qiʻdah",
    "Dhuʻl-Hijjah",
];

/// One entry of the Hijri month reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct HijriMonth {
    pub number: u8,
    pub name: &'static str,
    pub name_arabic: &'static str,
}

impl HijriMonth {
    /// Muharram, Rajab, Dhu al-Qi'dah and Dhu al-Hijjah.
    pub fn is_sacred(&self) -> bool {
        matches!(self.number, 1 | 7 | 11 | 12)
    }

    /// Short notes shown next to the month in the reference listing.
    pub fn notes(&self) -> Vec<&'static str> {
        let mut notes = Vec::new();
        match self.number {
            1 => notes.push("New Year"),
            9 => notes.push("Month of fasting"),
            12 => notes.push("Hajj month"),
            _ => {}
        }
        if self.is_sacred() {
            notes.push("Sacred month");
        }
        notes
    }
}

/// The twelve Hijri months in order.
pub const HIJRI_MONTHS: [HijriMonth; 12] = [
    HijriMonth { number: 1, name: "Muharram", name_arabic: "مُحَرَّم" },
    HijriMonth { number: 2, name: "Safar", name_arabic: "صَفَر" },
    HijriMonth { number: 3, name: "Rabi' al-Awwal", name_arabic: "رَبِيع الأَوَّل" },
    HijriMonth { number: 4, name: "Rabi' al-Thani", name_arabic: "رَبِيع الثَّانِي" },
    HijriMonth { number: 5, name: "Jumada al-Awwal", name_arabic: "جُمَادَىٰ الأُولَىٰ" },
    HijriMonth { number: 6, name: "Jumada al-Thani", name_arabic: "جُمَادَىٰ الثَّانِيَة" },
    HijriMonth { number: 7, name: "Rajab", name_arabic: "رَجَب" },
    HijriMonth { number: 8, name: "Sha'ban", name_arabic: "شَعْبَان" },
    HijriMonth { number: 9, name: "Ramadan", name_arabic: "رَمَضَان" },
    HijriMonth { number: 10, name: "Shawwal", name_arabic: "شَوَّال" },
    HijriMonth { number: 11, name: "Dhu al-Qi'dah", name_arabic: "ذُو القِعْدَة" },
    HijriMonth { number: 12, name: "Dhu al-Hijjah", name_arabic: "ذُو الحِجَّة" },
];
