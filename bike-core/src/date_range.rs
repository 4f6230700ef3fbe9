use chrono::NaiveDate;
use serde::Serialize;

/// An inclusive calendar date range, `start <= end`.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range from two bounds given in either order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            DateRange { start: a, end: b }
        } else {
            DateRange { start: b, end: a }
        }
    }

    /// The smallest range covering every date, or `None` for no dates.
    pub fn spanning<I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates.into_iter().fold(None, |acc, date| match acc {
            None => Some(DateRange::new(date, date)),
            Some(DateRange { start, end }) => Some(DateRange {
                start: start.min(date),
                end: end.max(date),
            }),
        })
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_orders_bounds() {
        let range = DateRange::new(ymd(2011, 3, 15), ymd(2011, 3, 14));
        assert_eq!(range.start, ymd(2011, 3, 14));
        assert_eq!(range.end, ymd(2011, 3, 15));
    }

    #[test]
    fn test_date_range_contains_is_inclusive() {
        let range = DateRange::new(ymd(2011, 1, 1), ymd(2011, 1, 5));
        assert!(range.contains(&ymd(2011, 1, 1)));
        assert!(range.contains(&ymd(2011, 1, 5)));
        assert!(!range.contains(&ymd(2010, 12, 31)));
        assert!(!range.contains(&ymd(2011, 1, 6)));
        assert_eq!(range.num_days(), 5);
    }

    #[test]
    fn test_date_range_single_day() {
        let day = ymd(2012, 2, 29);
        let range = DateRange::new(day, day);
        assert!(range.contains(&day));
        assert_eq!(range.num_days(), 1);
    }

    #[test]
    fn test_date_range_spanning() {
        let dates = vec![ymd(2011, 6, 15), ymd(2011, 1, 1), ymd(2012, 1, 1)];
        let range = DateRange::spanning(dates).unwrap();
        assert_eq!(range, DateRange::new(ymd(2011, 1, 1), ymd(2012, 1, 1)));
        assert_eq!(DateRange::spanning(Vec::new()), None);
    }
}
