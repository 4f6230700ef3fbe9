//! Categorical attributes of a rental record.
//!
//! Each category parses from either its cleaned label (`"Jan"`, `"Working Day"`)
//! or the numeric code used by the raw public dataset (`"1"`, `"0"`), so both
//! flavours of the CSV load into the same types.

use serde::Serialize;
use std::{fmt, str::FromStr};

/// Error returned when a CSV value matches no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseCategoryError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ParseCategoryError {}

/// A closed set of values with a canonical display order.
pub trait Category: Copy + Sized + 'static {
    /// Every value, in display order.
    const ALL: &'static [Self];

    /// Short label shown on chart axes.
    fn label(&self) -> &'static str;

    /// Position of this value within [`Category::ALL`].
    fn ordinal(&self) -> usize;
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

/// Calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Month for a calendar number, 1 = January.
    pub fn from_number(n: u32) -> Option<Month> {
        n.checked_sub(1)
            .and_then(|idx| Month::ALL.get(idx as usize))
            .copied()
    }
}

impl Category for Month {
    const ALL: &'static [Month] = &[
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    fn label(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Month {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = normalize(s);
        if let Ok(n) = value.parse::<u32>() {
            return Month::from_number(n).ok_or_else(|| ParseCategoryError::new("month", s));
        }
        // "sep" and "september" both match on the three-letter prefix
        Month::ALL
            .iter()
            .find(|m| value.get(..3).is_some_and(|p| p.eq_ignore_ascii_case(m.label())))
            .copied()
            .ok_or_else(|| ParseCategoryError::new("month", s))
    }
}

/// Day of the week. Code 0 is Sunday, as in the public dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Category for Weekday {
    const ALL: &'static [Weekday] = &[
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    fn label(&self) -> &'static str {
        match self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Weekday {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = normalize(s);
        if let Ok(n) = value.parse::<usize>() {
            return Weekday::ALL
                .get(n)
                .copied()
                .ok_or_else(|| ParseCategoryError::new("weekday", s));
        }
        Weekday::ALL
            .iter()
            .find(|d| value.get(..3).is_some_and(|p| p.eq_ignore_ascii_case(d.label())))
            .copied()
            .ok_or_else(|| ParseCategoryError::new("weekday", s))
    }
}

/// Season, coded 1 (Spring) to 4 (Winter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Category for Season {
    const ALL: &'static [Season] = &[Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Season {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "1" | "spring" | "springer" => Ok(Season::Spring),
            "2" | "summer" => Ok(Season::Summer),
            "3" | "fall" | "autumn" => Ok(Season::Fall),
            "4" | "winter" => Ok(Season::Winter),
            _ => Err(ParseCategoryError::new("season", s)),
        }
    }
}

/// Whether the day is a public holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Holiday {
    Holiday,
    NotHoliday,
}

impl Category for Holiday {
    const ALL: &'static [Holiday] = &[Holiday::Holiday, Holiday::NotHoliday];

    fn label(&self) -> &'static str {
        match self {
            Holiday::Holiday => "Holiday",
            Holiday::NotHoliday => "Not Holiday",
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Holiday {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "1" | "holiday" => Ok(Holiday::Holiday),
            "0" | "not holiday" => Ok(Holiday::NotHoliday),
            _ => Err(ParseCategoryError::new("holiday", s)),
        }
    }
}

/// Whether the day is neither a weekend nor a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum WorkingDay {
    WorkingDay,
    NotWorkingDay,
}

impl Category for WorkingDay {
    const ALL: &'static [WorkingDay] = &[WorkingDay::WorkingDay, WorkingDay::NotWorkingDay];

    fn label(&self) -> &'static str {
        match self {
            WorkingDay::WorkingDay => "Working Day",
            WorkingDay::NotWorkingDay => "Not Working Day",
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl FromStr for WorkingDay {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // some cleaned exports label every non-working day "Holiday"
        match normalize(s).as_str() {
            "1" | "working day" => Ok(WorkingDay::WorkingDay),
            "0" | "not working day" | "holiday" | "weekend" => Ok(WorkingDay::NotWorkingDay),
            _ => Err(ParseCategoryError::new("working day", s)),
        }
    }
}

/// Weather situation, coded 1 (clear) to 4 (severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum WeatherCondition {
    Clear,
    MistyCloudy,
    LightSnowRain,
    SevereWeather,
}

impl Category for WeatherCondition {
    const ALL: &'static [WeatherCondition] = &[
        WeatherCondition::Clear,
        WeatherCondition::MistyCloudy,
        WeatherCondition::LightSnowRain,
        WeatherCondition::SevereWeather,
    ];

    fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::MistyCloudy => "Misty/Cloudy",
            WeatherCondition::LightSnowRain => "Light Snow/Rain",
            WeatherCondition::SevereWeather => "Severe Weather",
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl FromStr for WeatherCondition {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "1" | "clear" => Ok(WeatherCondition::Clear),
            "2" | "misty/cloudy" | "mist + cloudy" | "misty" | "cloudy" => {
                Ok(WeatherCondition::MistyCloudy)
            }
            "3" | "light snow/rain" | "light snow" | "light rain" => {
                Ok(WeatherCondition::LightSnowRain)
            }
            "4" | "severe weather" | "heavy rain" | "heavy snow" => {
                Ok(WeatherCondition::SevereWeather)
            }
            _ => Err(ParseCategoryError::new("weather condition", s)),
        }
    }
}
