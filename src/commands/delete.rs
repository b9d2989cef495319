use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use super::open_store;

pub fn run(store_path: &Path, id: &str, yes: bool) -> Result<()> {
    let mut store = open_store(store_path)?;
    let person = store.find(id)?.clone();

    // Confirm unless --yes
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {}?", person.name))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    store.delete_person(person.id)?;
    store.save()?;

    println!("{} {}", "Deleted".red(), person.name.bold());
    Ok(())
}
