//! `summary`: aggregate both tables over a date range and print the result.

use bike_core::dates::format_date;
use bike_core::loader::read_records;
use bike_data::{DateSelection, Dimension, RangeSession, Report, SummaryTable};
use log::info;
use std::fmt::{self, Write};

/// Load both tables, resolve `selection` and render the report.
///
/// An incomplete selection falls back to the span of the day table.
/// Returns the text (or JSON) to print.
pub fn run_summary(
    day_csv: &str,
    hour_csv: &str,
    selection: DateSelection,
    dimension: Option<Dimension>,
    json: bool,
) -> anyhow::Result<String> {
    let days = read_records(day_csv)?;
    let hours = read_records(hour_csv)?;
    info!("Loaded {} day and {} hour records", days.len(), hours.len());

    let range = RangeSession::new().resolve(selection, &days);
    let report = Report::build(&days, &hours, range);

    match (dimension, json) {
        (Some(dimension), true) => Ok(serde_json::to_string_pretty(&report.summary(dimension))?),
        (None, true) => Ok(serde_json::to_string_pretty(&report)?),
        (Some(dimension), false) => match report.summary(dimension) {
            Some(table) => Ok(format_table(table)?),
            None => Ok(String::new()),
        },
        (None, false) => Ok(format_report(&report)?),
    }
}

/// Render the whole report: range, headline metrics, busiest month, then
/// every table.
pub fn format_report(report: &Report) -> Result<String, fmt::Error> {
    let mut out = String::new();
    match report.range {
        Some(range) => writeln!(
            out,
            "Range: {} to {} ({} days)",
            format_date(&range.start),
            format_date(&range.end),
            range.num_days()
        )?,
        None => writeln!(out, "Range: no data")?,
    }
    let m = &report.metrics;
    writeln!(
        out,
        "Rentals: {} total, {} casual, {} registered, {:.1} per day over {} days",
        m.total, m.casual, m.registered, m.average_per_day, m.days
    )?;
    writeln!(out, "Registered share: {:.1}%", m.registered_share() * 100.0)?;
    if let Some(peak) = report.summary(Dimension::Month).and_then(|t| t.peak()) {
        writeln!(out, "Busiest month: {} ({} rentals)", peak.category, peak.value)?;
    }
    for table in &report.summaries {
        writeln!(out)?;
        out.push_str(&format_table(table)?);
    }
    Ok(out)
}

/// Render one table with right-aligned values.
///
/// ```text
/// Rentals by Season
///   Spring      12   casual 5   registered 7
/// ```
pub fn format_table(table: &SummaryTable) -> Result<String, fmt::Error> {
    let label_width = table
        .rows
        .iter()
        .map(|r| r.category.len())
        .max()
        .unwrap_or(0);
    let value_width = table
        .rows
        .iter()
        .map(|r| r.value.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    writeln!(out, "{}", table.title)?;
    if table.rows.is_empty() {
        writeln!(out, "  (no records)")?;
    }
    for row in &table.rows {
        write!(
            out,
            "  {:<lw$}  {:>vw$}",
            row.category,
            row.value,
            lw = label_width,
            vw = value_width
        )?;
        if let (Some(casual), Some(registered)) = (row.casual, row.registered) {
            write!(out, "   casual {}   registered {}", casual, registered)?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_data::aggregate;
    use bike_core::loader::parse_records;

    const DAYS: &str = "\
instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,casual,registered,cnt
1,2011-01-01,Spring,0,Jan,Not Holiday,Sat,Not Working Day,Misty/Cloudy,2,3,5
2,2011-06-15,Summer,0,Jun,Not Holiday,Wed,Working Day,Clear,1,2,3
3,2012-01-01,Spring,1,Jan,Not Holiday,Sun,Not Working Day,Clear,3,4,7
";

    #[test]
    fn month_table_lists_every_month() {
        let records = parse_records(DAYS).unwrap();
        let text = format_table(&aggregate(&records, &Dimension::Month.descriptor())).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Rentals by Month");
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[1], "  Jan  12");
        assert_eq!(lines[2], "  Feb   0");
    }

    #[test]
    fn season_table_shows_riders() {
        let records = parse_records(DAYS).unwrap();
        let text = format_table(&aggregate(&records, &Dimension::Season.descriptor())).unwrap();
        assert!(text.contains("Spring  12   casual 5   registered 7"), "got:\n{}", text);
    }

    #[test]
    fn empty_year_table_says_so() {
        let text = format_table(&aggregate(&[], &Dimension::Year.descriptor())).unwrap();
        assert_eq!(text, "Rentals by Year\n  (no records)\n");
    }

    #[test]
    fn report_header_names_range_and_totals() {
        let records = parse_records(DAYS).unwrap();
        let range = RangeSession::new().resolve(DateSelection::default(), &records);
        let text = format_report(&Report::build(&records, &[], range)).unwrap();
        assert!(text.starts_with("Range: 2011-01-01 to 2012-01-01"), "got:\n{}", text);
        assert!(text.contains("Rentals: 15 total, 6 casual, 9 registered"));
        assert!(text.contains("Registered share: 60.0%"), "got:\n{}", text);
        assert!(text.contains("Busiest month: Jan (12 rentals)"), "got:\n{}", text);
    }

    #[test]
    fn report_without_data() {
        let text = format_report(&Report::build(&[], &[], None)).unwrap();
        assert!(text.starts_with("Range: no data\n"));
        assert!(!text.contains("Busiest month"));
    }
}
