//! One full render pass: filter both tables, aggregate every dimension.

use crate::aggregate::{aggregate, SummaryTable};
use crate::dimension::Dimension;
use crate::filter::filter_records;
use crate::metrics::RentalMetrics;
use bike_core::date_range::DateRange;
use bike_core::record::Record;
use serde::Serialize;

/// Everything the dashboard draws for one date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Range the tables were filtered by; `None` when there was no data at all.
    pub range: Option<DateRange>,
    /// Metrics over the filtered day records.
    pub metrics: RentalMetrics,
    /// One table per dimension, in [`Dimension::ALL`] order.
    pub summaries: Vec<SummaryTable>,
}

impl Report {
    /// Filter `day_records` and `hour_records` by `range` and aggregate.
    ///
    /// The hour dimension reads the hour table; every other dimension reads
    /// the day table. With `range == None` both tables filter to nothing.
    pub fn build(day_records: &[Record], hour_records: &[Record], range: Option<DateRange>) -> Self {
        let (days, hours) = match &range {
            Some(range) => (
                filter_records(day_records, range),
                filter_records(hour_records, range),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let summaries = Dimension::ALL
            .iter()
            .map(|dimension| {
                let records = if dimension.uses_hourly_records() {
                    &hours
                } else {
                    &days
                };
                aggregate(records, &dimension.descriptor())
            })
            .collect();

        log::info!(
            "[bike] report: {} day and {} hour records in range {:?}",
            days.len(),
            hours.len(),
            range
        );

        Report {
            range,
            metrics: RentalMetrics::from_records(&days),
            summaries,
        }
    }

    pub fn summary(&self, dimension: Dimension) -> Option<&SummaryTable> {
        self.summaries.iter().find(|s| s.dimension == dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{day_record, hour_record, ymd};

    fn tables() -> (Vec<Record>, Vec<Record>) {
        let days = vec![
            day_record(1, ymd(2011, 1, 1), 985),
            day_record(2, ymd(2011, 1, 2), 801),
            day_record(3, ymd(2012, 1, 1), 2294),
        ];
        let hours = vec![
            hour_record(1, ymd(2011, 1, 1), 8, 500),
            hour_record(2, ymd(2011, 1, 1), 17, 485),
            hour_record(3, ymd(2011, 1, 2), 8, 801),
            hour_record(4, ymd(2012, 1, 1), 8, 2294),
        ];
        (days, hours)
    }

    #[test]
    fn builds_every_dimension_over_the_same_range() {
        let (days, hours) = tables();
        let range = DateRange::new(ymd(2011, 1, 1), ymd(2011, 12, 31));
        let report = Report::build(&days, &hours, Some(range));

        assert_eq!(report.summaries.len(), Dimension::ALL.len());
        assert_eq!(report.metrics.total, 1786);
        assert_eq!(report.metrics.days, 2);

        let hour = report.summary(Dimension::Hour).unwrap();
        assert_eq!(hour.value("08:00"), 1301);
        assert_eq!(hour.value("17:00"), 485);

        let year = report.summary(Dimension::Year).unwrap();
        assert_eq!(year.value("2011"), 2);
        assert_eq!(year.value("2012"), 0);
    }

    #[test]
    fn range_without_records_gives_zero_everywhere() {
        let (days, hours) = tables();
        let range = DateRange::new(ymd(2013, 1, 1), ymd(2013, 1, 31));
        let report = Report::build(&days, &hours, Some(range));
        assert!(report.summaries.iter().all(|s| s.total() == 0));
        assert_eq!(report.summary(Dimension::Month).unwrap().rows.len(), 12);
        assert_eq!(report.metrics.total, 0);
    }

    #[test]
    fn missing_range_filters_to_nothing() {
        let (days, hours) = tables();
        let report = Report::build(&days, &hours, None);
        assert_eq!(report.range, None);
        assert!(report.summaries.iter().all(|s| s.total() == 0));
    }
}
