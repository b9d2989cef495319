//! Tracked people.
//!
//! # Invariants
//! - `name` is trimmed and non-empty.
//! - `relationship`, when present, is trimmed and non-empty.
//! - Only the Gregorian birth date is stored; the Hijri form is recomputed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::CalendarDate;
use crate::error::{HilalError, HilalResult};

/// Stable identifier of a tracked person.
pub type PersonId = Uuid;

/// A tracked person as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(rename = "gregorianDate")]
    pub gregorian_birth_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

impl Person {
    /// The stored birth date as a Gregorian [`CalendarDate`].
    pub fn birth_date(&self) -> HilalResult<CalendarDate> {
        CalendarDate::try_from(self.gregorian_birth_date)
    }

    /// The birth date in the Hijri calendar, derived on every call.
    pub fn hijri_birth_date(&self) -> HilalResult<CalendarDate> {
        self.birth_date()?.to_hijri()
    }

    /// Checks the shape of a record read from storage.
    pub fn validate(&self) -> HilalResult<()> {
        if self.name.trim().is_empty() {
            return Err(HilalError::InvalidPerson(format!("record {} has an empty name", self.id)));
        }
        Ok(())
    }
}

/// Input for creating a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub gregorian_birth_date: NaiveDate,
    pub relationship: Option<String>,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, gregorian_birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            gregorian_birth_date,
            relationship: None,
        }
    }

    pub fn with_relationship(mut self, relationship: impl Into<String>) -> Self {
        self.relationship = Some(relationship.into());
        self
    }

    /// Validates the input and assigns `id`.
    pub fn into_person(self, id: PersonId) -> HilalResult<Person> {
        let person = Person {
            id,
            name: normalize_name(&self.name)?,
            gregorian_birth_date: check_birth_date(self.gregorian_birth_date)?,
            relationship: normalize_relationship(self.relationship),
        };
        Ok(person)
    }
}

/// A partial edit. `None` leaves a field unchanged; `relationship:
/// Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub gregorian_birth_date: Option<NaiveDate>,
    pub relationship: Option<Option<String>>,
}

impl PersonUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.gregorian_birth_date.is_none() && self.relationship.is_none()
    }

    /// Applies the edit to a copy of `person`; the original is untouched on error.
    pub fn apply(&self, person: &Person) -> HilalResult<Person> {
        let mut updated = person.clone();
        if let Some(name) = &self.name {
            updated.name = normalize_name(name)?;
        }
        if let Some(date) = self.gregorian_birth_date {
            updated.gregorian_birth_date = check_birth_date(date)?;
        }
        if let Some(relationship) = &self.relationship {
            updated.relationship = normalize_relationship(relationship.clone());
        }
        Ok(updated)
    }
}

fn normalize_name(name: &str) -> HilalResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(HilalError::InvalidPerson("name must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

fn normalize_relationship(relationship: Option<String>) -> Option<String> {
    relationship
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
}

/// A birth date is accepted only if it also has a Hijri form.
fn check_birth_date(date: NaiveDate) -> HilalResult<NaiveDate> {
    CalendarDate::try_from(date)?
        .to_hijri()
        .map_err(|e| HilalError::InvalidPerson(format!("birth date {date} is out of range: {e}")))?;
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_person_is_trimmed() {
        let person = NewPerson::new("  Aisha ", day(2000, 6, 15))
            .with_relationship(" sister ")
            .into_person(Uuid::new_v4())
            .unwrap();
        assert_eq!(person.name, "Aisha");
        assert_eq!(person.relationship.as_deref(), Some("sister"));
    }

    #[test]
    fn blank_relationship_is_dropped() {
        let person = NewPerson::new("Omar", day(2000, 6, 15))
            .with_relationship("   ")
            .into_person(Uuid::new_v4())
            .unwrap();
        assert_eq!(person.relationship, None);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = NewPerson::new("  ", day(2000, 6, 15))
            .into_person(Uuid::new_v4())
            .unwrap_err();
        assert!(matches!(err, HilalError::InvalidPerson(_)));
    }

    #[test]
    fn birth_date_without_hijri_form_is_rejected() {
        let err = NewPerson::new("Ancient", day(500, 1, 1))
            .into_person(Uuid::new_v4())
            .unwrap_err();
        assert!(matches!(err, HilalError::InvalidPerson(_)));
    }

    #[test]
    fn hijri_birth_date_is_derived() {
        let person = NewPerson::new("Yusuf", day(2024, 7, 17))
            .into_person(Uuid::new_v4())
            .unwrap();
        assert_eq!(
            person.hijri_birth_date().unwrap(),
            CalendarDate::hijri(1446, 1, 11).unwrap()
        );
    }

    #[test]
    fn update_changes_only_given_fields() {
        let person = NewPerson::new("Maryam", day(1995, 3, 2))
            .with_relationship("cousin")
            .into_person(Uuid::new_v4())
            .unwrap();

        let update = PersonUpdate {
            gregorian_birth_date: Some(day(1995, 3, 3)),
            ..Default::default()
        };
        let updated = update.apply(&person).unwrap();
        assert_eq!(updated.name, "Maryam");
        assert_eq!(updated.gregorian_birth_date, day(1995, 3, 3));
        assert_eq!(updated.relationship.as_deref(), Some("cousin"));
        assert_eq!(updated.id, person.id);
    }

    #[test]
    fn update_can_clear_relationship() {
        let person = NewPerson::new("Maryam", day(1995, 3, 2))
            .with_relationship("cousin")
            .into_person(Uuid::new_v4())
            .unwrap();
        let update = PersonUpdate {
            relationship: Some(None),
            ..Default::default()
        };
        assert_eq!(update.apply(&person).unwrap().relationship, None);
    }

    #[test]
    fn invalid_update_leaves_person_untouched() {
        let person = NewPerson::new("Maryam", day(1995, 3, 2))
            .into_person(Uuid::new_v4())
            .unwrap();
        let update = PersonUpdate {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(update.apply(&person).is_err());
        assert_eq!(person.name, "Maryam");
    }

    #[test]
    fn serializes_with_storage_field_names() {
        let id = Uuid::nil();
        let person = NewPerson::new("Ali", day(2000, 6, 15))
            .into_person(id)
            .unwrap();
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "name": "Ali",
                "gregorianDate": "2000-06-15",
            })
        );
        let back: Person = serde_json::from_value(json).unwrap();
        assert_eq!(back, person);
    }
}
