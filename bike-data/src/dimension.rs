//! Reporting dimensions and the descriptors that drive aggregation.

use bike_core::category::{
    Category, Holiday, Month, ParseCategoryError, Season, WeatherCondition, Weekday, WorkingDay,
};
use bike_core::record::Record;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// How the records of one group collapse into a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reduction {
    /// Sum of `total_count`.
    SumTotal,
    /// Number of distinct record identifiers, regardless of counts.
    DistinctRecords,
}

/// One group-by key value: a label for display plus a sort position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CategoryKey {
    pub ordinal: i64,
    pub label: String,
}

impl CategoryKey {
    pub fn new(ordinal: i64, label: impl Into<String>) -> Self {
        Self {
            ordinal,
            label: label.into(),
        }
    }

    fn of<C: Category>(value: C) -> Self {
        Self::new(value.ordinal() as i64, value.label())
    }

    fn all<C: Category>() -> Vec<Self> {
        C::ALL.iter().map(|c| Self::of(*c)).collect()
    }
}

/// The eight attributes the report groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Year,
    Month,
    Hour,
    Weekday,
    Holiday,
    WorkingDay,
    Weather,
    Season,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::Year,
        Dimension::Month,
        Dimension::Hour,
        Dimension::Weekday,
        Dimension::Holiday,
        Dimension::WorkingDay,
        Dimension::Weather,
        Dimension::Season,
    ];

    /// Command-line / JSON name.
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Year => "year",
            Dimension::Month => "month",
            Dimension::Hour => "hour",
            Dimension::Weekday => "weekday",
            Dimension::Holiday => "holiday",
            Dimension::WorkingDay => "working_day",
            Dimension::Weather => "weather",
            Dimension::Season => "season",
        }
    }

    /// Whether this dimension reads the hour table rather than the day table.
    pub fn uses_hourly_records(&self) -> bool {
        matches!(self, Dimension::Hour)
    }

    pub fn descriptor(&self) -> DimensionDescriptor {
        match self {
            Dimension::Year => DimensionDescriptor {
                dimension: *self,
                title: "Rentals by Year",
                key: year_key,
                reduction: Reduction::DistinctRecords,
                domain: None,
                rider_split: false,
            },
            Dimension::Month => DimensionDescriptor {
                dimension: *self,
                title: "Rentals by Month",
                key: |r| Some(CategoryKey::of(r.month)),
                reduction: Reduction::SumTotal,
                domain: Some(CategoryKey::all::<Month>),
                rider_split: false,
            },
            Dimension::Hour => DimensionDescriptor {
                dimension: *self,
                title: "Rentals by Hour",
                key: |r| r.hour.map(hour_key),
                reduction: Reduction::SumTotal,
                domain: Some(hour_domain),
                rider_split: false,
            },
            Dimension::Weekday => DimensionDescriptor {
                dimension: *self,
                title: "Rentals by Weekday",
                key: |r| Some(CategoryKey::of(r.weekday)),
                reduction: Reduction::SumTotal,
                domain: Some(CategoryKey::all::<Weekday>),
                rider_split: false,
            },
            Dimension::Holiday => DimensionDescriptor {
                dimension: *self,
                title: "Rentals on Holidays",
                key: |r| Some(CategoryKey::of(r.holiday)),
                reduction: Reduction::SumTotal,
                domain: Some(CategoryKey::all::<Holiday>),
                rider_split: false,
            },
            Dimension::WorkingDay => DimensionDescriptor {
                dimension: *self,
                title: "Rentals on Working Days",
                key: |r| Some(CategoryKey::of(r.working_day)),
                reduction: Reduction::SumTotal,
                domain: Some(CategoryKey::all::<WorkingDay>),
                rider_split: false,
            },
            Dimension::Weather => DimensionDescriptor {
                dimension: *self,
                title: "Rentals by Weather Condition",
                key: |r| Some(CategoryKey::of(r.weather_condition)),
                reduction: Reduction::SumTotal,
                domain: Some(CategoryKey::all::<WeatherCondition>),
                rider_split: false,
            },
            Dimension::Season => DimensionDescriptor {
                dimension: *self,
                title: "Rentals by Season",
                key: |r| Some(CategoryKey::of(r.season)),
                reduction: Reduction::SumTotal,
                domain: Some(CategoryKey::all::<Season>),
                rider_split: true,
            },
        }
    }
}

fn year_key(record: &Record) -> Option<CategoryKey> {
    let year = record.calendar_year();
    Some(CategoryKey::new(year as i64, year.to_string()))
}

fn hour_key(hour: u8) -> CategoryKey {
    CategoryKey::new(hour as i64, format!("{:02}:00", hour))
}

fn hour_domain() -> Vec<CategoryKey> {
    (0..24).map(hour_key).collect()
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase().replace('-', "_");
        Dimension::ALL
            .iter()
            .find(|d| d.name() == value)
            .copied()
            .ok_or_else(|| ParseCategoryError {
                kind: "dimension",
                value: s.to_string(),
            })
    }
}

/// Everything the aggregator needs to know about one dimension.
#[derive(Debug, Clone, Copy)]
pub struct DimensionDescriptor {
    pub dimension: Dimension,
    /// Chart panel title.
    pub title: &'static str,
    /// Grouping column. `None` skips the record (e.g. a day record has no hour).
    pub key: fn(&Record) -> Option<CategoryKey>,
    pub reduction: Reduction,
    /// Fixed category order. Every listed category appears in the summary,
    /// zero-filled when absent from the input.
    pub domain: Option<fn() -> Vec<CategoryKey>>,
    /// Also report casual and registered sums per category.
    pub rider_split: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_year_counts_distinct_records() {
        for dimension in Dimension::ALL {
            let expected = if dimension == Dimension::Year {
                Reduction::DistinctRecords
            } else {
                Reduction::SumTotal
            };
            assert_eq!(dimension.descriptor().reduction, expected, "{}", dimension);
        }
    }

    #[test]
    fn month_domain_is_calendar_order() {
        let domain = (Dimension::Month.descriptor().domain.unwrap())();
        let labels: Vec<&str> = domain.iter().map(|k| k.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
    }

    #[test]
    fn hour_domain_covers_the_day() {
        let domain = (Dimension::Hour.descriptor().domain.unwrap())();
        assert_eq!(domain.len(), 24);
        assert_eq!(domain[0].label, "00:00");
        assert_eq!(domain[23].label, "23:00");
    }

    #[test]
    fn year_has_no_fixed_domain() {
        assert!(Dimension::Year.descriptor().domain.is_none());
    }

    #[test]
    fn dimension_names_round_trip() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.name().parse::<Dimension>().unwrap(), dimension);
        }
        assert_eq!("working-day".parse::<Dimension>().unwrap(), Dimension::WorkingDay);
        assert!("temperature".parse::<Dimension>().is_err());
    }

    #[test]
    fn only_season_splits_riders() {
        let split: Vec<Dimension> = Dimension::ALL
            .into_iter()
            .filter(|d| d.descriptor().rider_split)
            .collect();
        assert_eq!(split, vec![Dimension::Season]);
    }
}
