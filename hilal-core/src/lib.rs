//! Core library for hilal.
//!
//! Tracks birthdays in two calendars at once, Gregorian and Hijri
//! (Umm al-Qura):
//! - `calendar`: validated dates in either calendar and conversion between them
//! - `anniversary`: age, next occurrence and countdown against an explicit `today`
//! - `timeline`: per-calendar events grouped into relative-time sections
//! - `store` and `config`: the on-disk collaborators used by the CLI

pub mod anniversary;
pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod person;
pub mod recorded;
pub mod store;
pub mod timeline;

pub use anniversary::{TimeUntil, age, age_on, next_occurrence, time_until};
pub use calendar::{CalendarDate, CalendarKind};
pub use error::{HilalError, HilalResult};
pub use person::{NewPerson, Person, PersonId, PersonUpdate};
pub use timeline::{
    Bucket, CalendarFilter, EventCounts, TimelineEvent, TimelineSection, bucket_label,
    build_timeline, event_counts, project_person,
};
