// Export window: which raw records are recent enough to export.
use crate::utils::parse_date;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

const RANGE_START_KEY: &str = "election_range_start_date";

#[derive(Debug)]
pub struct WindowSelection<'a> {
    pub selected: Vec<&'a Value>,
    pub total: usize,
    pub before_window: usize,
    /// Records without a parseable range start date.
    pub undated: usize,
}

/// First calendar day inside the export window. Saturates at the earliest
/// representable date instead of overflowing.
pub fn window_start(today: NaiveDate, window_days: i64) -> NaiveDate {
    Duration::try_days(window_days)
        .and_then(|span| today.checked_sub_signed(span))
        .unwrap_or(NaiveDate::MIN)
}

/// Keeps the records whose range start date is on or after `start`, in input order.
pub fn select_in_window(records: &[Value], start: NaiveDate) -> WindowSelection<'_> {
    let mut selection = WindowSelection {
        selected: Vec::new(),
        total: records.len(),
        before_window: 0,
        undated: 0,
    };

    for record in records {
        match range_start_date(record) {
            Some(date) if date >= start => selection.selected.push(record),
            Some(_) => selection.before_window += 1,
            None => selection.undated += 1,
        }
    }

    selection
}

fn range_start_date(record: &Value) -> Option<NaiveDate> {
    let raw = record.get(RANGE_START_KEY)?.as_str()?;
    parse_date(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::election_json;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_starts_a_week_back() {
        assert_eq!(window_start(day(2024, 5, 10), 7), day(2024, 5, 3));
        assert_eq!(window_start(day(2024, 3, 2), 7), day(2024, 2, 24));
    }

    #[test]
    fn huge_window_saturates() {
        assert_eq!(window_start(day(2024, 5, 10), 1_000_000_000), NaiveDate::MIN);
        assert_eq!(window_start(day(2024, 5, 10), i64::MAX), NaiveDate::MIN);
    }

    #[test]
    fn selects_records_on_or_after_window_start() {
        let records = vec![
            election_json(1, Some("2024-05-03")),
            election_json(2, Some("2024-05-02")),
            election_json(3, Some("2025-01-01")),
            election_json(4, None),
            election_json(5, Some("not a date")),
        ];
        let selection = select_in_window(&records, day(2024, 5, 3));

        let ids: Vec<_> = selection.selected.iter().map(|r| r["election_id"].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(3)]);
        assert_eq!(selection.total, 5);
        assert_eq!(selection.before_window, 1);
        assert_eq!(selection.undated, 2);
    }

    #[test]
    fn non_string_dates_are_undated() {
        let mut record = election_json(1, None);
        record[RANGE_START_KEY] = json!(20240510);
        let records = vec![record, json!(null)];
        let selection = select_in_window(&records, day(2024, 5, 3));
        assert!(selection.selected.is_empty());
        assert_eq!(selection.undated, 2);
    }
}
