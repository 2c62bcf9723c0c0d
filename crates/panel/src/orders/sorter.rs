//! Pure ordering of display records.

use orderdesk_core::OrderRecord;

/// Order records newest first and truncate to the display limit.
///
/// The sort is stable: records sharing a placement date keep their original
/// relative order. The input slice is left untouched.
#[must_use]
pub fn sort(records: &[OrderRecord], limit: usize) -> Vec<OrderRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date_placed.cmp(&a.date_placed));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;

    fn record(order_id: &str, date: NaiveDate) -> OrderRecord {
        OrderRecord {
            order_id: order_id.to_string(),
            customer_external_id: None,
            customer_email: None,
            date_placed: date,
            status: "Delivered".to_string(),
            total_amount: Decimal::new(1000, 2),
            currency: "USD".to_string(),
            summary_items: "1x Widget".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_newest_first() {
        let records = vec![
            record("SE-1", date(2024, 2, 10)),
            record("SE-2", date(2024, 5, 12)),
            record("SE-3", date(2024, 3, 28)),
        ];

        let sorted = sort(&records, 10);
        let ids: Vec<_> = sorted.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, ["SE-2", "SE-3", "SE-1"]);
    }

    #[test]
    fn test_ties_keep_original_relative_order() {
        let records = vec![
            record("SE-1", date(2024, 5, 12)),
            record("SE-2", date(2024, 5, 12)),
            record("SE-3", date(2024, 5, 12)),
        ];

        let sorted = sort(&records, 10);
        let ids: Vec<_> = sorted.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, ["SE-1", "SE-2", "SE-3"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let records: Vec<_> = (1..=5)
            .map(|day| record(&format!("SE-{day}"), date(2024, 6, day)))
            .collect();

        let sorted = sort(&records, 3);
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[0].order_id, "SE-5");
    }

    #[test]
    fn test_limit_beyond_len_returns_everything() {
        let records = vec![record("SE-1", date(2024, 6, 1))];
        assert_eq!(sort(&records, 10).len(), 1);
    }

    #[test]
    fn test_input_is_untouched() {
        let records = vec![
            record("SE-1", date(2024, 2, 10)),
            record("SE-2", date(2024, 5, 12)),
        ];

        let _ = sort(&records, 1);
        assert_eq!(records[0].order_id, "SE-1");
        assert_eq!(records.len(), 2);
    }
}
