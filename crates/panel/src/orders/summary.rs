//! Pure reduction producing the panel's stat tiles.

use chrono::{Days, NaiveDate};

use orderdesk_core::{OrderRecord, OrderSummary};

/// Length of the trailing recency window, in days.
pub const RECENCY_WINDOW_DAYS: u64 = 30;

/// Summarize `records` as of `today`.
///
/// `today` is an explicit parameter rather than a clock read so the reduction
/// stays deterministic; the load cycle passes the current date once at its
/// start. The recency boundary is inclusive: an order placed exactly 30 days
/// ago counts as recent.
#[must_use]
pub fn summarize(records: &[OrderRecord], today: NaiveDate) -> OrderSummary {
    let window_start = today
        .checked_sub_days(Days::new(RECENCY_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);

    OrderSummary {
        total_orders: records.len() as u64,
        total_spent: records.iter().map(|r| r.total_amount).sum(),
        recent_orders: records
            .iter()
            .filter(|r| r.date_placed >= window_start)
            .count() as u64,
    }
}
