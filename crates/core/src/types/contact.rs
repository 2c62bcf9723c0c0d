//! Resolved customer contact.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;

/// A customer identity resolved from the host desk context.
///
/// Resolved once per load cycle and never cached across cycles. The `name` is
/// always populated - the identity resolver derives it from the candidate's
/// name fields or, failing those, from the local part of the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Identity key; comparisons are case-insensitive.
    pub email: Email,
    /// Display name derived during resolution.
    pub name: String,
    /// Host-side identifier, when the providing source exposed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Contact {
    /// Create a contact from a resolved email and derived name.
    #[must_use]
    pub const fn new(email: Email, name: String, id: Option<String>) -> Self {
        Self { email, name, id }
    }
}
