use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use hilal_core::recorded::{SortOption, recorded_dates};
use owo_colors::OwoColorize;

use super::open_store;
use crate::render::{Render, pluralize};

pub fn run(
    store_path: &Path,
    search: Option<&str>,
    sort: SortOption,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let store = open_store(store_path)?;
    let entries = recorded_dates(store.persons(), search, sort, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        match search {
            Some(q) if !q.trim().is_empty() => println!("No one matches '{}'", q),
            _ => println!("No birthdays recorded yet. Add one with `hilal add`."),
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.render());
    }
    println!(
        "\n{}",
        format!("{} {}", entries.len(), pluralize("person", entries.len())).dimmed()
    );

    Ok(())
}
