//! Local key-value store backed by a single JSON document.
//!
//! Layout of the file:
//!
//! ```json
//! {
//!   "birthdayEvents": [{ "id": "…", "name": "…", "gregorianDate": "2000-06-15" }],
//!   "timeline-filter-preference": "both"
//! }
//! ```
//!
//! Keys this module does not know about are kept and written back unchanged.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{HilalError, HilalResult};
use crate::person::{NewPerson, Person, PersonId, PersonUpdate};
use crate::timeline::CalendarFilter;

pub const PERSONS_KEY: &str = "birthdayEvents";
pub const FILTER_KEY: &str = "timeline-filter-preference";

pub struct Store {
    path: PathBuf,
    persons: Vec<Person>,
    filter: Option<CalendarFilter>,
    other: Map<String, Value>,
}

impl Store {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> HilalResult<Self> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "store file missing, starting empty");
            return Ok(Store {
                path,
                persons: Vec::new(),
                filter: None,
                other: Map::new(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let mut other: Map<String, Value> = serde_json::from_str(&content)
            .map_err(|e| HilalError::Serialization(format!("{}: {e}", path.display())))?;

        let persons: Vec<Person> = match other.remove(PERSONS_KEY) {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| HilalError::Serialization(format!("{PERSONS_KEY}: {e}")))?,
            None => Vec::new(),
        };
        for person in &persons {
            person.validate()?;
        }

        let filter = match other.remove(FILTER_KEY) {
            Some(value) => Some(
                serde_json::from_value(value)
                    .map_err(|e| HilalError::Serialization(format!("{FILTER_KEY}: {e}")))?,
            ),
            None => None,
        };

        tracing::debug!(path = %path.display(), persons = persons.len(), "store loaded");
        Ok(Store {
            path,
            persons,
            filter,
            other,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn person(&self, id: PersonId) -> HilalResult<&Person> {
        self.persons
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| HilalError::PersonNotFound(id.to_string()))
    }

    /// Finds a person by full id or by a unique id prefix.
    pub fn find(&self, id_or_prefix: &str) -> HilalResult<&Person> {
        let needle = id_or_prefix.trim().to_lowercase();
        if let Ok(id) = Uuid::parse_str(&needle) {
            return self.person(id);
        }

        let mut matches = self
            .persons
            .iter()
            .filter(|p| !needle.is_empty() && p.id.to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(person), None) => Ok(person),
            (Some(_), Some(_)) => Err(HilalError::Store(format!(
                "Id prefix '{id_or_prefix}' is ambiguous"
            ))),
            (None, _) => Err(HilalError::PersonNotFound(id_or_prefix.to_string())),
        }
    }

    /// Adds a person under a freshly generated id.
    pub fn add_person(&mut self, new: NewPerson) -> HilalResult<Person> {
        let person = new.into_person(Uuid::new_v4())?;
        self.persons.push(person.clone());
        tracing::debug!(person_id = %person.id, "person added");
        Ok(person)
    }

    pub fn update_person(&mut self, id: PersonId, update: &PersonUpdate) -> HilalResult<Person> {
        let slot = self
            .persons
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| HilalError::PersonNotFound(id.to_string()))?;
        *slot = update.apply(slot)?;
        tracing::debug!(person_id = %id, "person updated");
        Ok(slot.clone())
    }

    pub fn delete_person(&mut self, id: PersonId) -> HilalResult<Person> {
        let index = self
            .persons
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| HilalError::PersonNotFound(id.to_string()))?;
        tracing::debug!(person_id = %id, "person deleted");
        Ok(self.persons.remove(index))
    }

    /// The last explicitly chosen timeline filter, if any.
    pub fn filter_preference(&self) -> Option<CalendarFilter> {
        self.filter
    }

    pub fn set_filter_preference(&mut self, filter: CalendarFilter) {
        self.filter = Some(filter);
    }

    /// Writes the store atomically (temp file + rename).
    pub fn save(&self) -> HilalResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut document = self.other.clone();
        document.insert(
            PERSONS_KEY.to_string(),
            serde_json::to_value(&self.persons)
                .map_err(|e| HilalError::Serialization(e.to_string()))?,
        );
        if let Some(filter) = self.filter {
            document.insert(FILTER_KEY.to_string(), Value::String(filter.to_string()));
        }

        let content = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| HilalError::Serialization(e.to_string()))?;

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        tracing::debug!(path = %self.path.display(), persons = self.persons.len(), "store saved");
        Ok(())
    }
}
