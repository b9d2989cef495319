use anyhow::{Context, Result};
use hilal_core::format::display_date;
use hilal_core::{CalendarDate, CalendarKind, HilalResult};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(input: &str, from: CalendarKind) -> Result<()> {
    let (source, target) =
        convert(input, from).with_context(|| format!("Cannot convert '{input}' from {from}"))?;

    println!("{} {}", source.calendar().render(), display_date(&source)?);
    println!(
        "{} {}",
        target.calendar().render(),
        display_date(&target)?.bold()
    );
    Ok(())
}

/// Parses `input` in `from` and converts it to the other calendar.
fn convert(input: &str, from: CalendarKind) -> HilalResult<(CalendarDate, CalendarDate)> {
    let source = CalendarDate::parse(from, input)?;
    let target = match from {
        CalendarKind::Gregorian => source.to_hijri()?,
        CalendarKind::Hijri => source.to_gregorian()?,
    };
    Ok((source, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_to_hijri() {
        let (_, hijri) = convert("2024-07-17", CalendarKind::Gregorian).unwrap();
        assert_eq!(hijri, CalendarDate::hijri(1446, 1, 11).unwrap());
    }

    #[test]
    fn hijri_to_gregorian() {
        let (_, gregorian) = convert("1446-01-11", CalendarKind::Hijri).unwrap();
        assert_eq!(gregorian, CalendarDate::gregorian(2024, 7, 17).unwrap());
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(convert("2024-02-30", CalendarKind::Gregorian).is_err());
        assert!(convert("1446-13-01", CalendarKind::Hijri).is_err());
        assert!(convert("yesterday", CalendarKind::Gregorian).is_err());
    }
}
