//! CSV loading for the day and hour tables.
//!
//! Both tables share one layout (with headers), the hour table adding an
//! `hr` column:
//!
//! ```text
//! instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,casual,registered,cnt
//! 1,2011-01-01,Spring,0,Jan,Not Holiday,Sat,Not Working Day,Misty/Cloudy,331,654,985
//! ```
//!
//! A malformed row fails the whole load; the error names the row's line.

use crate::record::{csv_fields, csv_header, CsvRow, Record};
use anyhow::Context;
use std::{fs, io, path::Path};

/// Parse records from CSV text.
pub fn parse_records(csv_data: &str) -> anyhow::Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<CsvRow>().enumerate() {
        // header is line 1
        let line = idx + 2;
        let row = result.with_context(|| format!("malformed CSV row at line {}", line))?;
        let record =
            Record::try_from(row).with_context(|| format!("invalid record at line {}", line))?;
        records.push(record);
    }
    log::info!("[bike] loader: parsed {} records", records.len());
    Ok(records)
}

/// Read and parse records from a CSV file on disk.
pub fn read_records(path: impl AsRef<Path>) -> anyhow::Result<Vec<Record>> {
    let path = path.as_ref();
    let csv_data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_records(&csv_data).with_context(|| format!("failed to parse {}", path.display()))
}

/// Write records back out as CSV, categories as labels.
///
/// The `hr` column is written when any record carries an hour.
pub fn write_records<W: io::Write>(records: &[Record], writer: W) -> anyhow::Result<()> {
    let with_hour = records.iter().any(|r| r.hour.is_some());
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(csv_header(with_hour))?;
    for record in records {
        wtr.write_record(csv_fields(record, with_hour))?;
    }
    wtr.flush()?;
    Ok(())
}
