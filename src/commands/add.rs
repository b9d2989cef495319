use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use hilal_core::NewPerson;
use hilal_core::format::display_date;
use owo_colors::OwoColorize;

use super::open_store;

pub fn run(
    store_path: &Path,
    name: String,
    date: NaiveDate,
    relationship: Option<String>,
) -> Result<()> {
    let mut store = open_store(store_path)?;

    let mut new = NewPerson::new(name, date);
    if let Some(relationship) = relationship {
        new = new.with_relationship(relationship);
    }
    let person = store.add_person(new)?;
    store.save()?;

    let gregorian = person.birth_date()?;
    let hijri = person.hijri_birth_date()?;
    println!("{} {}", "Added".green(), person.name.bold());
    println!("   {}", display_date(&gregorian)?);
    println!("   {}", display_date(&hijri)?);
    println!("   {}", person.id.to_string().dimmed());

    Ok(())
}
