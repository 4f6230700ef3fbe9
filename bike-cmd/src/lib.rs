//! Command implementations for the bike sharing CLI.
//!
//! Provides subcommands for summarizing rentals over a date range and for
//! exporting the records a date range selects.

use bike_data::{DateSelection, Dimension};
use bike_core::dates::parse_optional_date;
use anyhow::Context;
use clap::Subcommand;

pub mod export;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Summarize rentals per dimension over a date range
    Summary {
        /// Path to the day table CSV
        #[arg(short = 'd', long, default_value = "dataset/data.csv")]
        day_csv: String,

        /// Path to the hour table CSV
        #[arg(short = 'H', long, default_value = "dataset/hour.csv")]
        hour_csv: String,

        /// First day of the range (YYYY-MM-DD), inclusive
        #[arg(short, long)]
        start: Option<String>,

        /// Last day of the range (YYYY-MM-DD), inclusive
        #[arg(short, long)]
        end: Option<String>,

        /// Only print this dimension (year, month, hour, weekday, holiday,
        /// working_day, weather, season)
        #[arg(long)]
        dimension: Option<Dimension>,

        /// Print JSON instead of text tables
        #[arg(long)]
        json: bool,
    },

    /// Write the records of one table that fall in a date range
    Filter {
        /// Path to the input CSV (day or hour table)
        #[arg(short, long)]
        csv: String,

        /// First day of the range (YYYY-MM-DD), inclusive
        #[arg(short, long)]
        start: Option<String>,

        /// Last day of the range (YYYY-MM-DD), inclusive
        #[arg(short, long)]
        end: Option<String>,

        /// Output path for the filtered CSV
        #[arg(short, long)]
        output: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary {
            day_csv,
            hour_csv,
            start,
            end,
            dimension,
            json,
        } => {
            let selection = parse_selection(start.as_deref(), end.as_deref())?;
            let text = summary::run_summary(&day_csv, &hour_csv, selection, dimension, json)?;
            println!("{}", text);
            Ok(())
        }
        Command::Filter {
            csv,
            start,
            end,
            output,
        } => {
            let selection = parse_selection(start.as_deref(), end.as_deref())?;
            export::run_filter(&csv, selection, &output)
        }
    }
}

/// Turn the `--start` / `--end` arguments into a selection.
///
/// Missing or blank bounds are allowed; malformed dates are errors.
pub fn parse_selection(start: Option<&str>, end: Option<&str>) -> anyhow::Result<DateSelection> {
    let start = match start {
        Some(s) => parse_optional_date(s).context("invalid --start")?,
        None => None,
    };
    let end = match end {
        Some(s) => parse_optional_date(s).context("invalid --end")?,
        None => None,
    };
    Ok(DateSelection::new(start, end))
}
