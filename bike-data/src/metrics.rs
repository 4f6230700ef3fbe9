use bike_core::record::Record;
use serde::Serialize;
use std::collections::BTreeSet;

/// Headline numbers shown as metric tiles above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalMetrics {
    pub total: u64,
    pub casual: u64,
    pub registered: u64,
    /// Distinct dates present in the records.
    pub days: usize,
    /// `total / days`, 0 when there are no days.
    pub average_per_day: f64,
}

impl RentalMetrics {
    pub fn from_records(records: &[Record]) -> Self {
        let total: u64 = records.iter().map(|r| r.total_count).sum();
        let casual = records.iter().map(|r| r.casual_count).sum();
        let registered = records.iter().map(|r| r.registered_count).sum();
        let days = records.iter().map(|r| r.date).collect::<BTreeSet<_>>().len();
        let average_per_day = if days == 0 {
            0.0
        } else {
            total as f64 / days as f64
        };
        RentalMetrics {
            total,
            casual,
            registered,
            days,
            average_per_day,
        }
    }

    /// Share of rentals made by registered riders, 0.0 to 1.0.
    pub fn registered_share(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.registered as f64 / self.total as f64
        }
    }
}
