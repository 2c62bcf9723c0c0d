//! Decoded order record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::email::Email;

/// One order from the remote order collection.
///
/// Immutable once decoded. Records only exist inside a load cycle; they are
/// discarded as soon as the view model is built.
///
/// Field names mirror the wire format of the order endpoint. `customer_email`
/// is optional on the wire - records without it survive decoding and are
/// excluded later by the filter stage rather than treated as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order reference, e.g. `SE-100199`.
    pub order_id: String,
    /// Identifier of the customer in the commerce system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_external_id: Option<String>,
    /// Email the order was placed under, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<Email>,
    /// Calendar date the order was placed.
    pub date_placed: NaiveDate,
    /// Free-form status label, e.g. `Delivered`, `Processing Return`.
    pub status: String,
    /// Order total; never negative.
    pub total_amount: Decimal,
    /// ISO 4217 currency code as sent by the endpoint.
    pub currency: String,
    /// Human-readable line-item summary, e.g. `1x DSLR Camera`.
    pub summary_items: String,
}
