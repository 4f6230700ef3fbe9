//! Group-by aggregation driven by a [`DimensionDescriptor`].

use crate::dimension::{CategoryKey, Dimension, DimensionDescriptor, Reduction};
use bike_core::record::Record;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One category of a summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub category: String,
    pub ordinal: i64,
    /// The dimension's reduction: rental sum or distinct record count.
    pub value: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub casual: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered: Option<u64>,
}

/// Aggregated result for one dimension, rows in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTable {
    pub dimension: Dimension,
    pub title: String,
    pub reduction: Reduction,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Sum of `value` over every row.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.value).sum()
    }

    pub fn row(&self, category: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.category == category)
    }

    /// Value for `category`, 0 when the category has no row.
    pub fn value(&self, category: &str) -> u64 {
        self.row(category).map_or(0, |r| r.value)
    }

    /// The row with the largest value; ties keep the first in display order.
    pub fn peak(&self) -> Option<&SummaryRow> {
        self.rows
            .iter()
            .filter(|r| r.value > 0)
            .fold(None, |best: Option<&SummaryRow>, row| match best {
                Some(b) if b.value >= row.value => Some(b),
                _ => Some(row),
            })
    }
}

#[derive(Default)]
struct Group {
    total: u64,
    casual: u64,
    registered: u64,
    instants: BTreeSet<u64>,
}

/// Aggregate `records` along one dimension.
///
/// Categories listed in `descriptor.domain` always appear, in domain order, with
/// zero measures when no record falls in them. Categories outside the domain
/// (or all categories, when there is no domain) follow in natural order.
pub fn aggregate(records: &[Record], descriptor: &DimensionDescriptor) -> SummaryTable {
    let mut groups: BTreeMap<CategoryKey, Group> = BTreeMap::new();
    for record in records {
        let Some(key) = (descriptor.key)(record) else {
            continue;
        };
        let group = groups.entry(key).or_default();
        group.total += record.total_count;
        group.casual += record.casual_count;
        group.registered += record.registered_count;
        group.instants.insert(record.instant);
    }

    let mut ordered: Vec<(CategoryKey, Group)> = Vec::with_capacity(groups.len());
    if let Some(domain) = descriptor.domain {
        for key in domain() {
            let group = groups.remove(&key).unwrap_or_default();
            ordered.push((key, group));
        }
    }
    ordered.extend(groups);

    let rows = ordered
        .into_iter()
        .map(|(key, group)| {
            let value = match descriptor.reduction {
                Reduction::SumTotal => group.total,
                Reduction::DistinctRecords => group.instants.len() as u64,
            };
            SummaryRow {
                category: key.label,
                ordinal: key.ordinal,
                value,
                casual: descriptor.rider_split.then_some(group.casual),
                registered: descriptor.rider_split.then_some(group.registered),
            }
        })
        .collect::<Vec<_>>();

    log::debug!(
        "[bike] aggregate: {} -> {} rows from {} records",
        descriptor.dimension,
        rows.len(),
        records.len()
    );

    SummaryTable {
        dimension: descriptor.dimension,
        title: descriptor.title.to_string(),
        reduction: descriptor.reduction,
        rows,
    }
}
