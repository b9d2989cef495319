use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use hilal_core::format::TodayHeader;
use hilal_core::{CalendarFilter, EventCounts, TimelineSection, build_timeline, event_counts};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::open_store;
use crate::render::{Render, render_filter_tabs};

#[derive(Serialize)]
struct TimelineOutput<'a> {
    today: NaiveDate,
    filter: CalendarFilter,
    counts: EventCounts,
    sections: &'a [TimelineSection],
}

pub fn run(
    store_path: &Path,
    filter: Option<CalendarFilter>,
    default_filter: CalendarFilter,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let mut store = open_store(store_path)?;

    // Remember an explicit choice for next time
    if let Some(filter) = filter {
        if store.filter_preference() != Some(filter) {
            store.set_filter_preference(filter);
            store.save()?;
        }
    }
    let filter = resolve_filter(filter, store.filter_preference(), default_filter);
    tracing::debug!(%filter, %today, "building timeline");

    let counts = event_counts(store.persons(), today);
    let sections = build_timeline(store.persons(), filter, today);

    if json {
        let output = TimelineOutput {
            today,
            filter,
            counts,
            sections: &sections,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let header = TodayHeader::new(today)?;
    println!("{}", header.hijri.bold());
    println!("{}", header.gregorian.dimmed());
    println!();
    println!("{}", render_filter_tabs(&counts, filter));
    println!();

    if sections.is_empty() {
        if store.persons().is_empty() {
            println!("No birthdays recorded yet. Add one with `hilal add`.");
        } else {
            println!("No upcoming birthdays for this filter");
        }
        return Ok(());
    }

    for (i, section) in sections.iter().enumerate() {
        println!("{}", section.render());
        if i < sections.len() - 1 {
            println!();
        }
    }

    Ok(())
}

/// An explicit filter wins, then the remembered one, then the configured default.
fn resolve_filter(
    explicit: Option<CalendarFilter>,
    stored: Option<CalendarFilter>,
    default: CalendarFilter,
) -> CalendarFilter {
    explicit.or(stored).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let filter = resolve_filter(
            Some(CalendarFilter::Hijri),
            Some(CalendarFilter::Gregorian),
            CalendarFilter::Both,
        );
        assert_eq!(filter, CalendarFilter::Hijri);
    }

    #[test]
    fn stored_filter_beats_default() {
        let filter = resolve_filter(None, Some(CalendarFilter::Gregorian), CalendarFilter::Both);
        assert_eq!(filter, CalendarFilter::Gregorian);
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(
            resolve_filter(None, None, CalendarFilter::Hijri),
            CalendarFilter::Hijri
        );
    }
}
