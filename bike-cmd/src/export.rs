//! `filter`: write the records of one table that fall in a date range.

use bike_core::loader::{read_records, write_records};
use bike_data::{DateSelection, RangeSession};
use anyhow::Context;
use log::info;
use std::fs::File;
use std::io::BufWriter;

/// Filter the table at `csv` by `selection` and write the result to `output`.
///
/// An incomplete selection falls back to the span of the table, so the
/// whole table is written back out.
pub fn run_filter(csv: &str, selection: DateSelection, output: &str) -> anyhow::Result<()> {
    let records = read_records(csv)?;
    let filtered = RangeSession::new().filter(selection, &records);
    info!(
        "Keeping {} of {} records from {}",
        filtered.len(),
        records.len(),
        csv
    );

    let file = File::create(output).with_context(|| format!("failed to create {}", output))?;
    write_records(&filtered, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", output))?;
    info!("Filter complete. Output: {}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_core::loader::parse_records;
    use chrono::NaiveDate;
    use std::path::Path;
    use tempfile::TempDir;

    const HOURS: &str = "\
instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,casual,registered,cnt
1,2011-01-01,1,0,1,0,0,6,0,1,3,13,16
2,2011-01-01,1,0,1,1,0,6,0,1,8,32,40
3,2011-01-02,1,0,1,0,0,0,0,2,4,13,17
";

    /// A temp dir holding `hours.csv`; removed when the dir is dropped.
    fn hours_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hours.csv"), HOURS).unwrap();
        dir
    }

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn writes_only_records_in_range() {
        let dir = hours_dir();
        let output = dir.path().join("filtered.csv");

        let day = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        run_filter(
            path_str(&dir.path().join("hours.csv")),
            DateSelection::between(day, day),
            path_str(&output),
        )
        .unwrap();

        let written = parse_records(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written.iter().all(|r| r.date == day));
        assert_eq!(written[1].hour, Some(1));
    }

    #[test]
    fn open_selection_keeps_everything() {
        let dir = hours_dir();
        let output = dir.path().join("all.csv");

        run_filter(
            path_str(&dir.path().join("hours.csv")),
            DateSelection::default(),
            path_str(&output),
        )
        .unwrap();

        let written = parse_records(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, parse_records(HOURS).unwrap());
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("no-such-table.csv");
        let output = dir.path().join("never-written.csv");
        let err = run_filter(path_str(&input), DateSelection::default(), path_str(&output))
            .unwrap_err();
        assert!(err.to_string().contains("no-such-table.csv"));
        assert!(!output.exists());
    }
}
