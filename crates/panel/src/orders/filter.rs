//! Pure filter of decoded records by customer email.

use orderdesk_core::{Email, OrderRecord};

/// Keep the records placed under `email`.
///
/// The comparison is case-insensitive ([`Email`] equality). Records without a
/// customer email are silently excluded - by this point they are valid
/// records that simply cannot be attributed to any customer.
#[must_use]
pub fn filter(records: &[OrderRecord], email: &Email) -> Vec<OrderRecord> {
    records
        .iter()
        .filter(|record| {
            record
                .customer_email
                .as_ref()
                .is_some_and(|candidate| candidate == email)
        })
        .cloned()
        .collect()
}
