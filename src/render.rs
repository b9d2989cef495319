//! Terminal rendering for hilal-core types.
//!
//! Extension traits that add colored output to core types using owo_colors.

use hilal_core::calendar::HijriMonth;
use hilal_core::format::display_date;
use hilal_core::recorded::RecordedEntry;
use hilal_core::{Bucket, CalendarFilter, CalendarKind, EventCounts, TimelineEvent, TimelineSection};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarKind {
    fn render(&self) -> String {
        let badge = format!("[{}]", self.badge());
        match self {
            CalendarKind::Gregorian => badge.blue().to_string(),
            CalendarKind::Hijri => badge.green().to_string(),
        }
    }
}

/// Colorize text according to the bucket's urgency
fn colorize_bucket(bucket: Bucket, text: &str) -> String {
    match bucket {
        Bucket::ThisWeek => text.yellow().to_string(),
        Bucket::ThisMonth => text.cyan().to_string(),
        Bucket::NextThreeMonths => text.blue().to_string(),
        Bucket::RestOfYear => text.dimmed().to_string(),
    }
}

impl Render for TimelineEvent {
    fn render(&self) -> String {
        let when = self
            .display_next_occurrence()
            .unwrap_or_else(|_| self.next_occurrence.to_string());
        let countdown = colorize_bucket(self.bucket(), &self.countdown());
        let relationship = self
            .relationship
            .as_deref()
            .map(|r| format!(" ({r})"))
            .unwrap_or_default();

        format!(
            "{} {}{} turns {} {} {}",
            self.calendar.render(),
            self.name.bold(),
            relationship.dimmed(),
            self.age_on_next,
            countdown,
            format!("on {when}").dimmed()
        )
    }
}

impl Render for TimelineSection {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "{} {}",
            colorize_bucket(self.bucket, self.title).bold(),
            format!("({})", self.len()).dimmed()
        )];
        lines.extend(
            self.combined_events
                .iter()
                .map(|e| format!("   {}", e.render())),
        );
        lines.join("\n")
    }
}

impl Render for RecordedEntry {
    fn render(&self) -> String {
        let gregorian =
            display_date(&self.gregorian_date).unwrap_or_else(|_| self.gregorian_date.to_string());
        let hijri = display_date(&self.hijri_date).unwrap_or_else(|_| self.hijri_date.to_string());
        let short_id: String = self.id.to_string().chars().take(8).collect();
        let relationship = self
            .relationship
            .as_deref()
            .map(|r| format!(" ({r})"))
            .unwrap_or_default();

        format!(
            "{} {}{}\n   {} {} {}\n   {} {} {}",
            short_id.dimmed(),
            self.name.bold(),
            relationship.dimmed(),
            CalendarKind::Gregorian.render(),
            gregorian,
            format!("age {}", self.gregorian_age).dimmed(),
            CalendarKind::Hijri.render(),
            hijri,
            format!("age {}", self.hijri_age).dimmed(),
        )
    }
}

impl Render for HijriMonth {
    fn render(&self) -> String {
        let notes = self.notes();
        let notes = if notes.is_empty() {
            String::new()
        } else {
            format!("  {}", notes.join(", ").dimmed())
        };
        let name = if self.is_sacred() {
            self.name.green().bold().to_string()
        } else {
            self.name.to_string()
        };

        format!("{:>2}. {} {}{}", self.number, name, self.name_arabic, notes)
    }
}

/// Renders the filter tabs with their event counts, highlighting the active one.
pub fn render_filter_tabs(counts: &EventCounts, active: CalendarFilter) -> String {
    [
        (CalendarFilter::Both, "All"),
        (CalendarFilter::Gregorian, "Gregorian"),
        (CalendarFilter::Hijri, "Hijri"),
    ]
    .iter()
    .map(|(filter, label)| {
        let tab = format!("{label} ({})", counts.for_filter(*filter));
        if *filter == active {
            tab.bold().underline().to_string()
        } else {
            tab.dimmed().to_string()
        }
    })
    .collect::<Vec<_>>()
    .join("  ")
}

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_words() {
        assert_eq!(pluralize("person", 1), "person");
        assert_eq!(pluralize("birthday", 0), "birthdays");
        assert_eq!(pluralize("birthday", 3), "birthdays");
    }

    #[test]
    fn tabs_show_every_count() {
        let counts = EventCounts {
            gregorian: 2,
            hijri: 2,
            both: 4,
        };
        let tabs = render_filter_tabs(&counts, CalendarFilter::Hijri);
        assert!(tabs.contains("All (4)"));
        assert!(tabs.contains("Gregorian (2)"));
        assert!(tabs.contains("Hijri (2)"));
    }

    #[test]
    fn sacred_months_are_annotated() {
        let muharram = hilal_core::calendar::HIJRI_MONTHS[0].render();
        assert!(muharram.contains("Muharram"));
        assert!(muharram.contains("New Year"));
        assert!(muharram.contains("Sacred month"));
    }
}
