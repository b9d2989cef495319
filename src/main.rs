mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use hilal_core::{CalendarFilter, CalendarKind};
use hilal_core::config::HilalConfig;
use hilal_core::recorded::SortOption;

#[derive(Parser)]
#[command(name = "hilal")]
#[command(about = "Track birthdays in the Gregorian and Hijri (Umm al-Qura) calendars")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Store file to use instead of the configured one
    #[arg(long, global = true, env = "HILAL_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new person
    Add {
        name: String,

        /// Gregorian birth date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// How you know them (e.g. "sister")
        #[arg(short, long)]
        relationship: Option<String>,
    },
    /// List recorded people with both calendar dates and ages
    List {
        /// Only show names containing this text
        #[arg(short, long)]
        search: Option<String>,

        /// name, name-desc, date-asc or date-desc
        #[arg(long, default_value = "name")]
        sort: SortOption,

        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Change a recorded person (by id or id prefix)
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// New Gregorian birth date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        #[arg(short, long, conflicts_with = "clear_relationship")]
        relationship: Option<String>,

        /// Remove the relationship label
        #[arg(long)]
        clear_relationship: bool,
    },
    /// Delete a recorded person (by id or id prefix)
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show upcoming birthdays grouped by time range
    Timeline {
        /// gregorian, hijri or both (remembered for next time)
        #[arg(short, long)]
        filter: Option<CalendarFilter>,

        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the Hijri months reference
    Months,
    /// Convert a date between calendars
    Convert {
        /// Date to convert (YYYY-MM-DD)
        date: String,

        /// Calendar the date is written in
        #[arg(long, default_value = "gregorian")]
        from: CalendarKind,
    },
    /// Show today's date in both calendars
    Today {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Add {
            name,
            date,
            relationship,
        } => commands::add::run(&store_path(cli.store)?, name, date, relationship),
        Commands::List {
            search,
            sort,
            today,
            json,
        } => commands::list::run(
            &store_path(cli.store)?,
            search.as_deref(),
            sort,
            today_or_local(today),
            json,
        ),
        Commands::Edit {
            id,
            name,
            date,
            relationship,
            clear_relationship,
        } => {
            let relationship = if clear_relationship {
                Some(None)
            } else {
                relationship.map(Some)
            };
            commands::edit::run(&store_path(cli.store)?, &id, name, date, relationship)
        }
        Commands::Delete { id, yes } => commands::delete::run(&store_path(cli.store)?, &id, yes),
        Commands::Timeline {
            filter,
            today,
            json,
        } => {
            let config = load_config()?;
            let store = cli.store.unwrap_or_else(|| config.store_path());
            let default_filter = config.default_filter()?;
            commands::timeline::run(&store, filter, default_filter, today_or_local(today), json)
        }
        Commands::Months => commands::months::run(),
        Commands::Convert { date, from } => commands::convert::run(&date, from),
        Commands::Today { today } => commands::today::run(today_or_local(today)),
    }
}

fn load_config() -> Result<HilalConfig> {
    HilalConfig::load().context("Failed to load hilal config")
}

fn store_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => Ok(load_config()?.store_path()),
    }
}

/// The local wall-clock date unless one was given.
fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}
