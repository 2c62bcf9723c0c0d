//! Render-ready view model.

use serde::{Deserialize, Serialize};

use crate::types::contact::Contact;
use crate::types::order::OrderRecord;
use crate::types::summary::OrderSummary;

/// Everything the external renderer needs to paint the panel.
///
/// Composed once per load cycle from the outputs of the pipeline stages and
/// never partially mutated - a new cycle replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    /// The resolved customer.
    pub contact: Contact,
    /// Aggregate statistics over the customer's orders.
    pub summary: OrderSummary,
    /// Orders to display, newest first, truncated to the display limit.
    pub orders: Vec<OrderRecord>,
}

impl ViewModel {
    /// Compose a view model from the pipeline stage outputs.
    ///
    /// Pure composition: every field passes through unchanged.
    #[must_use]
    pub const fn compose(
        contact: Contact,
        summary: OrderSummary,
        orders: Vec<OrderRecord>,
    ) -> Self {
        Self {
            contact,
            summary,
            orders,
        }
    }
}
