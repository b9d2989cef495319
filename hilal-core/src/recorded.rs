//! The "recorded dates" listing: every stored person with both calendar
//! dates and both ages, searchable and sortable.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::anniversary;
use crate::calendar::CalendarDate;
use crate::error::{HilalError, HilalResult};
use crate::person::{Person, PersonId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Name,
    NameDesc,
    /// Oldest birth date first.
    DateAsc,
    /// Most recent birth date first.
    DateDesc,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Name => "name",
            SortOption::NameDesc => "name-desc",
            SortOption::DateAsc => "date-asc",
            SortOption::DateDesc => "date-desc",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = HilalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortOption::Name),
            "name-desc" => Ok(SortOption::NameDesc),
            "date-asc" => Ok(SortOption::DateAsc),
            "date-desc" => Ok(SortOption::DateDesc),
            other => Err(HilalError::Parse(format!(
                "Unknown sort option '{other}'. Expected name, name-desc, date-asc or date-desc"
            ))),
        }
    }
}

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedEntry {
    pub id: PersonId,
    pub name: String,
    pub gregorian_date: CalendarDate,
    pub hijri_date: CalendarDate,
    pub gregorian_age: u32,
    pub hijri_age: u32,
    pub relationship: Option<String>,
}

impl RecordedEntry {
    pub fn new(person: &Person, today: NaiveDate) -> HilalResult<Self> {
        let gregorian_date = person.birth_date()?;
        let hijri_date = gregorian_date.to_hijri()?;
        Ok(Self {
            id: person.id,
            name: person.name.clone(),
            gregorian_date,
            hijri_date,
            gregorian_age: anniversary::age(&gregorian_date, today)?,
            hijri_age: anniversary::age(&hijri_date, today)?,
            relationship: person.relationship.clone(),
        })
    }
}

/// Builds the listing. `query` matches names case-insensitively; a blank
/// query matches everyone. People whose dates cannot be converted are
/// skipped with a warning.
pub fn recorded_dates(
    persons: &[Person],
    query: Option<&str>,
    sort: SortOption,
    today: NaiveDate,
) -> Vec<RecordedEntry> {
    let query = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    let mut entries: Vec<RecordedEntry> = persons
        .iter()
        .filter(|p| match &query {
            Some(q) => p.name.to_lowercase().contains(q.as_str()),
            None => true,
        })
        .filter_map(|p| match RecordedEntry::new(p, today) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(person_id = %p.id, error = %e, "skipping person in listing");
                None
            }
        })
        .collect();

    match sort {
        SortOption::Name => entries.sort_by_key(|e| e.name.to_lowercase()),
        SortOption::NameDesc => {
            entries.sort_by_key(|e| std::cmp::Reverse(e.name.to_lowercase()))
        }
        SortOption::DateAsc => entries.sort_by_key(|e| date_key(&e.gregorian_date)),
        SortOption::DateDesc => {
            entries.sort_by_key(|e| std::cmp::Reverse(date_key(&e.gregorian_date)))
        }
    }
    entries
}

fn date_key(date: &CalendarDate) -> (i32, u8, u8) {
    (date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::NewPerson;
    use uuid::Uuid;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn people() -> Vec<Person> {
        [
            ("zainab", day(1992, 3, 4)),
            ("Ahmed", day(1980, 11, 30)),
            ("Bilal", day(2005, 1, 1)),
            ("Amina", day(1999, 7, 17)),
        ]
        .into_iter()
        .map(|(name, date)| NewPerson::new(name, date).into_person(Uuid::new_v4()).unwrap())
        .collect()
    }

    fn names(entries: &[RecordedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn sorts_by_name_case_insensitively() {
        let entries = recorded_dates(&people(), None, SortOption::Name, day(2024, 7, 17));
        assert_eq!(names(&entries), ["Ahmed", "Amina", "Bilal", "zainab"]);
        let entries = recorded_dates(&people(), None, SortOption::NameDesc, day(2024, 7, 17));
        assert_eq!(names(&entries), ["zainab", "Bilal", "Amina", "Ahmed"]);
    }

    #[test]
    fn sorts_by_birth_date() {
        let entries = recorded_dates(&people(), None, SortOption::DateAsc, day(2024, 7, 17));
        assert_eq!(names(&entries), ["Ahmed", "zainab", "Amina", "Bilal"]);
        let entries = recorded_dates(&people(), None, SortOption::DateDesc, day(2024, 7, 17));
        assert_eq!(names(&entries), ["Bilal", "Amina", "zainab", "Ahmed"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let entries = recorded_dates(&people(), Some(" AM "), SortOption::Name, day(2024, 7, 17));
        assert_eq!(names(&entries), ["Amina"]);
        let entries = recorded_dates(&people(), Some("a"), SortOption::Name, day(2024, 7, 17));
        assert_eq!(names(&entries), ["Ahmed", "Amina", "Bilal", "zainab"]);
        let entries = recorded_dates(&people(), Some("   "), SortOption::Name, day(2024, 7, 17));
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn entries_carry_both_ages() {
        let entries = recorded_dates(&people(), Some("amina"), SortOption::Name, day(2024, 7, 17));
        let amina = &entries[0];
        assert_eq!(amina.gregorian_age, 25);
        assert!(amina.hijri_age >= amina.gregorian_age);
        assert_eq!(amina.hijri_date, amina.gregorian_date.to_hijri().unwrap());
    }

    #[test]
    fn sort_option_parsing() {
        assert_eq!("date-desc".parse::<SortOption>().unwrap(), SortOption::DateDesc);
        assert!("age".parse::<SortOption>().is_err());
        assert_eq!(SortOption::NameDesc.to_string(), "name-desc");
    }
}
