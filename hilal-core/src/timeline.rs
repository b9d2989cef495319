//! Timeline projection: people → per-calendar events → relative-time sections.
//!
//! Each person yields exactly two events, one per calendar. Events are
//! filtered by calendar first, then grouped into mutually exclusive buckets
//! by days until their next occurrence. Nothing here is persisted; the whole
//! timeline is recomputed for a given `today`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::anniversary::{self, TimeUntil};
use crate::calendar::{CalendarDate, CalendarKind};
use crate::error::{HilalError, HilalResult};
use crate::format;
use crate::person::{Person, PersonId};

/// Relative-time bucket, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Bucket {
    ThisWeek,
    ThisMonth,
    NextThreeMonths,
    RestOfYear,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::ThisWeek,
        Bucket::ThisMonth,
        Bucket::NextThreeMonths,
        Bucket::RestOfYear,
    ];

    /// Inclusive upper bounds: 7, 30 and 90 days.
    pub fn for_days(total_days: u32) -> Self {
        match total_days {
            0..=7 => Bucket::ThisWeek,
            8..=30 => Bucket::ThisMonth,
            31..=90 => Bucket::NextThreeMonths,
            _ => Bucket::RestOfYear,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Bucket::ThisWeek => "This Week",
            Bucket::ThisMonth => "This Month",
            Bucket::NextThreeMonths => "Next 3 Months",
            Bucket::RestOfYear => "Rest of Year",
        }
    }

    /// Lowercased title with spaces replaced by dashes.
    pub fn slug(&self) -> &'static str {
        match self {
            Bucket::ThisWeek => "this-week",
            Bucket::ThisMonth => "this-month",
            Bucket::NextThreeMonths => "next-3-months",
            Bucket::RestOfYear => "rest-of-year",
        }
    }
}

/// Title of the bucket `total_days` falls into.
pub fn bucket_label(total_days: u32) -> &'static str {
    Bucket::for_days(total_days).title()
}

/// Which calendar's events a timeline shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarFilter {
    Gregorian,
    Hijri,
    #[default]
    Both,
}

impl CalendarFilter {
    pub fn matches(&self, calendar: CalendarKind) -> bool {
        match self {
            CalendarFilter::Both => true,
            CalendarFilter::Gregorian => calendar == CalendarKind::Gregorian,
            CalendarFilter::Hijri => calendar == CalendarKind::Hijri,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarFilter::Gregorian => "gregorian",
            CalendarFilter::Hijri => "hijri",
            CalendarFilter::Both => "both",
        }
    }
}

impl fmt::Display for CalendarFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarFilter {
    type Err = HilalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gregorian" => Ok(CalendarFilter::Gregorian),
            "hijri" => Ok(CalendarFilter::Hijri),
            "both" => Ok(CalendarFilter::Both),
            other => Err(HilalError::Parse(format!(
                "Unknown calendar filter '{other}'. Expected gregorian, hijri or both"
            ))),
        }
    }
}

/// A person's birthday projected into one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    /// `<person id>-<calendar tag>`
    pub id: String,
    pub person_id: PersonId,
    pub name: String,
    pub calendar: CalendarKind,
    pub birth_date: CalendarDate,
    pub next_occurrence: CalendarDate,
    pub time_until: TimeUntil,
    /// Age reached on `next_occurrence`.
    pub age_on_next: u32,
    pub relationship: Option<String>,
}

impl TimelineEvent {
    fn project(person: &Person, birth_date: CalendarDate, today: NaiveDate) -> HilalResult<Self> {
        let next_occurrence = anniversary::next_occurrence(&birth_date, today)?;
        let time_until = anniversary::time_until(&birth_date, today)?;
        let age_on_next = anniversary::age_on(&birth_date, &next_occurrence)?;
        let calendar = birth_date.calendar();

        Ok(Self {
            id: format!("{}-{}", person.id, calendar.tag()),
            person_id: person.id,
            name: person.name.clone(),
            calendar,
            birth_date,
            next_occurrence,
            time_until,
            age_on_next,
            relationship: person.relationship.clone(),
        })
    }

    pub fn days_until(&self) -> u32 {
        self.time_until.total_days
    }

    pub fn bucket(&self) -> Bucket {
        Bucket::for_days(self.days_until())
    }

    pub fn countdown(&self) -> String {
        format::format_countdown(&self.time_until)
    }

    /// Next occurrence formatted by its own calendar's rules.
    pub fn display_next_occurrence(&self) -> HilalResult<String> {
        format::display_date(&self.next_occurrence)
    }
}

/// The two events derived from one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonEvents {
    pub gregorian: TimelineEvent,
    pub hijri: TimelineEvent,
}

impl PersonEvents {
    pub fn into_vec(self) -> Vec<TimelineEvent> {
        vec![self.gregorian, self.hijri]
    }
}

/// Projects `person` into one event per calendar.
pub fn project_person(person: &Person, today: NaiveDate) -> HilalResult<PersonEvents> {
    let gregorian_birth = person.birth_date()?;
    let hijri_birth = gregorian_birth.to_hijri()?;
    Ok(PersonEvents {
        gregorian: TimelineEvent::project(person, gregorian_birth, today)?,
        hijri: TimelineEvent::project(person, hijri_birth, today)?,
    })
}

/// Projects every person, skipping (and logging) those that fail.
fn project_all(persons: &[Person], today: NaiveDate) -> Vec<TimelineEvent> {
    persons
        .iter()
        .filter_map(|person| match project_person(person, today) {
            Ok(events) => Some(events.into_vec()),
            Err(e) => {
                tracing::warn!(person_id = %person.id, name = %person.name, error = %e, "skipping person in timeline");
                None
            }
        })
        .flatten()
        .collect()
}

/// One non-empty bucket of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineSection {
    pub bucket: Bucket,
    pub title: &'static str,
    pub time_range: &'static str,
    pub gregorian_events: Vec<TimelineEvent>,
    pub hijri_events: Vec<TimelineEvent>,
    /// All events of the bucket, ascending by days until next occurrence.
    pub combined_events: Vec<TimelineEvent>,
}

impl TimelineSection {
    fn new(bucket: Bucket, mut events: Vec<TimelineEvent>) -> Self {
        events.sort_by_key(TimelineEvent::days_until);
        let (gregorian_events, hijri_events) = events
            .iter()
            .cloned()
            .partition(|e| e.calendar == CalendarKind::Gregorian);

        Self {
            bucket,
            title: bucket.title(),
            time_range: bucket.slug(),
            gregorian_events,
            hijri_events,
            combined_events: events,
        }
    }

    pub fn len(&self) -> usize {
        self.combined_events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combined_events.is_empty()
    }
}

/// Builds the filtered, bucketed timeline for `today`.
///
/// A person whose dates cannot be projected is skipped with a warning; the
/// rest of the timeline is still built. Empty buckets are omitted.
pub fn build_timeline(
    persons: &[Person],
    filter: CalendarFilter,
    today: NaiveDate,
) -> Vec<TimelineSection> {
    let events: Vec<TimelineEvent> = project_all(persons, today)
        .into_iter()
        .filter(|e| filter.matches(e.calendar))
        .collect();

    Bucket::ALL
        .iter()
        .map(|bucket| {
            let in_bucket = events
                .iter()
                .filter(|e| e.bucket() == *bucket)
                .cloned()
                .collect();
            TimelineSection::new(*bucket, in_bucket)
        })
        .filter(|section| !section.is_empty())
        .collect()
}

/// Event totals per filter tab, independent of the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EventCounts {
    pub gregorian: usize,
    pub hijri: usize,
    pub both: usize,
}

impl EventCounts {
    pub fn for_filter(&self, filter: CalendarFilter) -> usize {
        match filter {
            CalendarFilter::Gregorian => self.gregorian,
            CalendarFilter::Hijri => self.hijri,
            CalendarFilter::Both => self.both,
        }
    }
}

pub fn event_counts(persons: &[Person], today: NaiveDate) -> EventCounts {
    let events = project_all(persons, today);
    let gregorian = events
        .iter()
        .filter(|e| e.calendar == CalendarKind::Gregorian)
        .count();
    EventCounts {
        gregorian,
        hijri: events.len() - gregorian,
        both: events.len(),
    }
}
