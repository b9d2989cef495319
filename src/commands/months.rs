use anyhow::Result;
use hilal_core::calendar::HIJRI_MONTHS;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run() -> Result<()> {
    println!("{}", "Hijri months".bold());
    for month in &HIJRI_MONTHS {
        println!("{}", month.render());
    }
    println!(
        "\n{}",
        "Months alternate between 29 and 30 days following the Umm al-Qura calendar.".dimmed()
    );
    Ok(())
}
