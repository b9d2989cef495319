use std::path::Path;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use hilal_core::PersonUpdate;
use hilal_core::format::display_date;
use owo_colors::OwoColorize;

use super::open_store;

pub fn run(
    store_path: &Path,
    id: &str,
    name: Option<String>,
    date: Option<NaiveDate>,
    relationship: Option<Option<String>>,
) -> Result<()> {
    let update = PersonUpdate {
        name,
        gregorian_birth_date: date,
        relationship,
    };
    if update.is_empty() {
        bail!("Nothing to change. Pass --name, --date, --relationship or --clear-relationship");
    }

    let mut store = open_store(store_path)?;
    let person_id = store.find(id)?.id;
    let person = store.update_person(person_id, &update)?;
    store.save()?;

    println!("{} {}", "Updated".yellow(), person.name.bold());
    println!("   {}", display_date(&person.birth_date()?)?);
    println!("   {}", display_date(&person.hijri_birth_date()?)?);
    if let Some(relationship) = &person.relationship {
        println!("   {}", relationship.dimmed());
    }

    Ok(())
}
