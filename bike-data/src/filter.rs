//! Date range filtering with a remembered fallback range.

use bike_core::date_range::DateRange;
use bike_core::record::Record;
use chrono::NaiveDate;

/// What the date picker produced: zero, one or two bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateSelection {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// The range this selection names, if both bounds are present.
    pub fn complete(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }
}

/// Per-session filter state: the last complete range the user picked.
///
/// Starts unset and is replaced on every complete two-bound selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSession {
    remembered: Option<DateRange>,
}

impl RangeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remembered(&self) -> Option<DateRange> {
        self.remembered
    }

    /// Decide which range to filter by.
    ///
    /// A complete selection is used as-is and remembered. A degenerate one
    /// falls back to the remembered range, then to the span of `records`.
    /// Returns `None` only when there is nothing to fall back to.
    pub fn resolve(&mut self, selection: DateSelection, records: &[Record]) -> Option<DateRange> {
        if let Some(range) = selection.complete() {
            self.remembered = Some(range);
            return Some(range);
        }
        if let Some(range) = self.remembered {
            log::debug!("[bike] filter: degenerate selection, reusing {:?}", range);
            return Some(range);
        }
        let span = DateRange::spanning(records.iter().map(|r| r.date));
        log::debug!("[bike] filter: degenerate selection, using data span {:?}", span);
        span
    }

    /// Resolve `selection` and filter `records` by the result.
    pub fn filter(&mut self, selection: DateSelection, records: &[Record]) -> Vec<Record> {
        match self.resolve(selection, records) {
            Some(range) => filter_records(records, &range),
            None => Vec::new(),
        }
    }
}

/// Records dated within `range` (both ends inclusive), in input order.
pub fn filter_records(records: &[Record], range: &DateRange) -> Vec<Record> {
    let filtered: Vec<Record> = records
        .iter()
        .filter(|r| range.contains(&r.date))
        .cloned()
        .collect();
    log::debug!(
        "[bike] filter: {} of {} records within {} to {}",
        filtered.len(),
        records.len(),
        range.start,
        range.end
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{arb_date, arb_records, day_record, ymd};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn filter_selects_exactly_the_dates_in_range(
            records in arb_records(60),
            a in arb_date(),
            b in arb_date(),
        ) {
            let range = DateRange::new(a, b);
            let filtered = filter_records(&records, &range);
            prop_assert!(filtered.iter().all(|r| range.start <= r.date && r.date <= range.end));
            let expected: Vec<Record> = records
                .iter()
                .filter(|r| range.start <= r.date && r.date <= range.end)
                .cloned()
                .collect();
            prop_assert_eq!(filtered, expected);
        }

        #[test]
        fn filtering_twice_changes_nothing(
            records in arb_records(60),
            a in arb_date(),
            b in arb_date(),
        ) {
            let range = DateRange::new(a, b);
            let once = filter_records(&records, &range);
            prop_assert_eq!(filter_records(&once, &range), once.clone());
        }

        #[test]
        fn data_span_keeps_every_record(records in arb_records(60)) {
            match DateRange::spanning(records.iter().map(|r| r.date)) {
                Some(span) => prop_assert_eq!(filter_records(&records, &span), records.clone()),
                None => prop_assert!(records.is_empty()),
            }
        }

        #[test]
        fn open_selection_without_history_keeps_every_record(records in arb_records(60)) {
            let mut session = RangeSession::new();
            prop_assert_eq!(session.filter(DateSelection::default(), &records), records.clone());
            prop_assert_eq!(session.remembered(), None);
        }

        #[test]
        fn complete_selection_is_always_remembered(
            records in arb_records(20),
            a in arb_date(),
            b in arb_date(),
        ) {
            let mut session = RangeSession::new();
            let range = session.resolve(DateSelection::between(a, b), &records);
            prop_assert_eq!(range, Some(DateRange::new(a, b)));
            prop_assert_eq!(session.remembered(), range);
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            day_record(1, ymd(2011, 1, 1), 5),
            day_record(2, ymd(2011, 6, 15), 3),
            day_record(3, ymd(2012, 1, 1), 7),
            day_record(4, ymd(2011, 3, 2), 11),
        ]
    }

    #[test]
    fn filter_keeps_exactly_the_records_in_range() {
        let records = sample();
        let range = DateRange::new(ymd(2011, 1, 1), ymd(2011, 12, 31));
        let filtered = filter_records(&records, &range);
        let ids: Vec<u64> = filtered.iter().map(|r| r.instant).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert!(filtered.iter().all(|r| range.contains(&r.date)));
        for record in &records {
            if range.contains(&record.date) {
                assert!(filtered.contains(record));
            }
        }
    }

    #[test]
    fn filter_bounds_are_inclusive() {
        let records = sample();
        let range = DateRange::new(ymd(2011, 6, 15), ymd(2012, 1, 1));
        let ids: Vec<u64> = filter_records(&records, &range)
            .iter()
            .map(|r| r.instant)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn filter_is_idempotent() {
        let records = sample();
        let range = DateRange::new(ymd(2011, 2, 1), ymd(2011, 7, 1));
        let once = filter_records(&records, &range);
        let twice = filter_records(&once, &range);
        assert_eq!(once, twice);
    }

    #[test]
    fn full_span_returns_input_unchanged() {
        let records = sample();
        let span = DateRange::spanning(records.iter().map(|r| r.date)).unwrap();
        assert_eq!(filter_records(&records, &span), records);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let records = sample();
        let range = DateRange::new(ymd(2015, 1, 1), ymd(2015, 1, 31));
        assert!(filter_records(&records, &range).is_empty());
    }

    #[test]
    fn complete_selection_is_remembered() {
        let records = sample();
        let mut session = RangeSession::new();
        assert_eq!(session.remembered(), None);

        let picked = DateSelection::between(ymd(2011, 1, 1), ymd(2011, 3, 31));
        let range = session.resolve(picked, &records).unwrap();
        assert_eq!(range, DateRange::new(ymd(2011, 1, 1), ymd(2011, 3, 31)));
        assert_eq!(session.remembered(), Some(range));
    }

    #[test]
    fn degenerate_selection_reuses_last_complete_range() {
        let records = sample();
        let mut session = RangeSession::new();
        session.resolve(DateSelection::between(ymd(2011, 6, 1), ymd(2011, 6, 30)), &records);

        let single = DateSelection::new(Some(ymd(2012, 1, 1)), None);
        let filtered = session.filter(single, &records);
        let ids: Vec<u64> = filtered.iter().map(|r| r.instant).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(
            session.remembered(),
            Some(DateRange::new(ymd(2011, 6, 1), ymd(2011, 6, 30)))
        );
    }

    #[test]
    fn degenerate_selection_without_history_uses_data_span() {
        let records = sample();
        let mut session = RangeSession::new();
        let range = session
            .resolve(DateSelection::new(None, Some(ymd(2011, 2, 1))), &records)
            .unwrap();
        assert_eq!(range, DateRange::new(ymd(2011, 1, 1), ymd(2012, 1, 1)));
        // the data span is a fallback, not a user choice
        assert_eq!(session.remembered(), None);
        assert_eq!(session.filter(DateSelection::default(), &records), records);
    }

    #[test]
    fn nothing_to_fall_back_to_yields_empty() {
        let mut session = RangeSession::new();
        assert_eq!(session.resolve(DateSelection::default(), &[]), None);
        assert!(session.filter(DateSelection::default(), &[]).is_empty());
    }

    #[test]
    fn reversed_bounds_are_reordered() {
        let selection = DateSelection::between(ymd(2011, 12, 31), ymd(2011, 1, 1));
        assert_eq!(
            selection.complete(),
            Some(DateRange::new(ymd(2011, 1, 1), ymd(2011, 12, 31)))
        );
    }
}
