//! Filter-then-aggregate pipeline behind the bike sharing dashboard.
//!
//! Records pass through the range filter, then the aggregator runs once per
//! [`Dimension`], each driven by its [`DimensionDescriptor`] (grouping column,
//! reduction, optional fixed category order).
//!
//! # Usage
//!
//! ```rust
//! use bike_data::{Dimension, DateSelection, RangeSession, Report};
//!
//! let csv = "\
//! instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,casual,registered,cnt
//! 1,2011-01-01,Spring,0,Jan,Not Holiday,Sat,Not Working Day,Clear,2,3,5
//! 2,2011-06-15,Summer,0,Jun,Not Holiday,Wed,Working Day,Clear,1,2,3
//! 3,2012-01-01,Spring,1,Jan,Not Holiday,Sun,Not Working Day,Clear,3,4,7
//! ";
//! let days = bike_core::loader::parse_records(csv).unwrap();
//!
//! let mut session = RangeSession::new();
//! let start = chrono::NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
//! let end = chrono::NaiveDate::from_ymd_opt(2011, 12, 31).unwrap();
//! let range = session.resolve(DateSelection::between(start, end), &days);
//!
//! let report = Report::build(&days, &[], range);
//! let months = report.summary(Dimension::Month).unwrap();
//! assert_eq!(months.rows.len(), 12);
//! assert_eq!(months.value("Jan"), 5);
//! assert_eq!(months.value("Jun"), 3);
//! assert_eq!(report.summary(Dimension::Year).unwrap().value("2011"), 2);
//! ```

pub mod aggregate;
pub mod dimension;
pub mod filter;
pub mod metrics;
pub mod report;

#[cfg(test)]
mod test_support;

pub use aggregate::{aggregate, SummaryRow, SummaryTable};
pub use dimension::{CategoryKey, Dimension, DimensionDescriptor, Reduction};
pub use filter::{filter_records, DateSelection, RangeSession};
pub use metrics::RentalMetrics;
pub use report::Report;
