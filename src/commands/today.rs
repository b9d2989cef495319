use anyhow::Result;
use chrono::NaiveDate;
use hilal_core::format::TodayHeader;
use owo_colors::OwoColorize;

pub fn run(today: NaiveDate) -> Result<()> {
    let header = TodayHeader::new(today)?;
    println!("{}", header.hijri.bold());
    println!("{}", header.gregorian);
    println!("{}", header.hijri_year.dimmed());
    Ok(())
}
