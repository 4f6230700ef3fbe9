use crate::category::{Category, Holiday, Month, Season, WeatherCondition, Weekday, WorkingDay};
use crate::dates::{format_date, parse_date};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar year of dataset year index 0.
pub const DATASET_BASE_YEAR: i32 = 2011;

/// Latest calendar year a record may carry.
pub const MAX_CALENDAR_YEAR: i32 = 9999;

/// A single row of the day table (`hour == None`) or the hour table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Row identifier, unique within its table.
    pub instant: u64,
    pub date: NaiveDate,
    pub hour: Option<u8>,
    /// 0 for the first dataset year, 1 for the second.
    pub year_index: u32,
    pub month: Month,
    pub weekday: Weekday,
    pub season: Season,
    pub holiday: Holiday,
    pub working_day: WorkingDay,
    pub weather_condition: WeatherCondition,
    pub casual_count: u64,
    pub registered_count: u64,
    pub total_count: u64,
}

impl Record {
    /// Calendar year this record belongs to.
    ///
    /// Loaded records never exceed [`MAX_CALENDAR_YEAR`]; hand-built ones
    /// with a larger index clamp to it.
    pub fn calendar_year(&self) -> i32 {
        calendar_year_of(self.year_index).unwrap_or(MAX_CALENDAR_YEAR)
    }
}

fn calendar_year_of(year_index: u32) -> Option<i32> {
    i32::try_from(year_index)
        .ok()
        .and_then(|idx| DATASET_BASE_YEAR.checked_add(idx))
        .filter(|year| *year <= MAX_CALENDAR_YEAR)
}

/// Raw CSV row as it appears in `data.csv` / `hour.csv`.
///
/// Columns are matched by header name; extra columns such as `temp` or
/// `hum` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CsvRow {
    pub instant: u64,
    pub dteday: String,
    pub season: String,
    pub yr: u32,
    pub mnth: String,
    #[serde(default)]
    pub hr: Option<u8>,
    pub holiday: String,
    pub weekday: String,
    pub workingday: String,
    pub weathersit: String,
    pub casual: u64,
    pub registered: u64,
    pub cnt: u64,
}

impl TryFrom<CsvRow> for Record {
    type Error = anyhow::Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        if let Some(hour) = row.hr {
            if hour > 23 {
                bail!("hour {} out of range 0-23", hour);
            }
        }
        // cleaned exports sometimes store the calendar year instead of the index
        let year_index = if row.yr >= DATASET_BASE_YEAR as u32 {
            row.yr - DATASET_BASE_YEAR as u32
        } else {
            row.yr
        };
        if calendar_year_of(year_index).is_none() {
            bail!("year {} out of range", row.yr);
        }
        Ok(Record {
            instant: row.instant,
            date: parse_date(&row.dteday)?,
            hour: row.hr,
            year_index,
            month: row.mnth.parse().context("column mnth")?,
            weekday: row.weekday.parse().context("column weekday")?,
            season: row.season.parse().context("column season")?,
            holiday: row.holiday.parse().context("column holiday")?,
            working_day: row.workingday.parse().context("column workingday")?,
            weather_condition: row.weathersit.parse().context("column weathersit")?,
            casual_count: row.casual,
            registered_count: row.registered,
            total_count: row.cnt,
        })
    }
}

/// Header written for exported rows; `hr` only appears for hourly data.
pub(crate) fn csv_header(with_hour: bool) -> Vec<&'static str> {
    let mut header = vec!["instant", "dteday", "season", "yr", "mnth"];
    if with_hour {
        header.push("hr");
    }
    header.extend([
        "holiday",
        "weekday",
        "workingday",
        "weathersit",
        "casual",
        "registered",
        "cnt",
    ]);
    header
}

/// Record fields in [`csv_header`] order, categories written as labels.
pub(crate) fn csv_fields(record: &Record, with_hour: bool) -> Vec<String> {
    let mut fields = vec![
        record.instant.to_string(),
        format_date(&record.date),
        record.season.label().to_string(),
        record.year_index.to_string(),
        record.month.label().to_string(),
    ];
    if with_hour {
        fields.push(record.hour.map(|h| h.to_string()).unwrap_or_default());
    }
    fields.extend([
        record.holiday.label().to_string(),
        record.weekday.label().to_string(),
        record.working_day.label().to_string(),
        record.weather_condition.label().to_string(),
        record.casual_count.to_string(),
        record.registered_count.to_string(),
        record.total_count.to_string(),
    ]);
    fields
}
