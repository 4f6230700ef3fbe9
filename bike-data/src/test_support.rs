use bike_core::category::{
    Category, Holiday, Month, Season, WeatherCondition, Weekday, WorkingDay,
};
use bike_core::record::{Record, DATASET_BASE_YEAR};
use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn season_of(month: Month) -> Season {
    match month {
        Month::Jan | Month::Feb | Month::Mar => Season::Spring,
        Month::Apr | Month::May | Month::Jun => Season::Summer,
        Month::Jul | Month::Aug | Month::Sep => Season::Fall,
        Month::Oct | Month::Nov | Month::Dec => Season::Winter,
    }
}

/// A clear-weather, non-holiday day record with attributes derived from `date`.
pub fn day_record(instant: u64, date: NaiveDate, total: u64) -> Record {
    let month = Month::from_number(date.month()).unwrap();
    let weekday: Weekday = date
        .weekday()
        .num_days_from_sunday()
        .to_string()
        .parse()
        .unwrap();
    let working_day = match weekday {
        Weekday::Sat | Weekday::Sun => WorkingDay::NotWorkingDay,
        _ => WorkingDay::WorkingDay,
    };
    let casual = total / 2;
    Record {
        instant,
        date,
        hour: None,
        year_index: (date.year() - DATASET_BASE_YEAR) as u32,
        month,
        weekday,
        season: season_of(month),
        holiday: Holiday::NotHoliday,
        working_day,
        weather_condition: WeatherCondition::Clear,
        casual_count: casual,
        registered_count: total - casual,
        total_count: total,
    }
}

pub fn hour_record(instant: u64, date: NaiveDate, hour: u8, total: u64) -> Record {
    Record {
        hour: Some(hour),
        ..day_record(instant, date, total)
    }
}

/// Any date in the two dataset years.
pub fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..731).prop_map(|offset| ymd(2011, 1, 1) + Days::new(offset))
}

/// Up to `max` records with unique instants, a mix of day and hour rows,
/// holidays and weather conditions.
pub fn arb_records(max: usize) -> impl Strategy<Value = Vec<Record>> {
    let row = (
        arb_date(),
        0u64..10_000,
        prop::option::of(0u8..24),
        any::<bool>(),
        0..WeatherCondition::ALL.len(),
    );
    prop::collection::vec(row, 0..max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (date, total, hour, holiday, weather))| {
                let mut record = day_record(idx as u64 + 1, date, total);
                record.hour = hour;
                if holiday {
                    record.holiday = Holiday::Holiday;
                    record.working_day = WorkingDay::NotWorkingDay;
                }
                record.weather_condition = WeatherCondition::ALL[weather];
                record
            })
            .collect()
    })
}
