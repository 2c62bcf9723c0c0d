//! Customer identity resolution.
//!
//! The host desk exposes the customer through several inconsistent sources -
//! the agent-view contact, the portal requester, the logged-in user, the
//! ticket's embedded requester - any of which may be missing, partial, or
//! junk. Resolution probes an ordered provider list and short-circuits on the
//! first candidate carrying a usable email. Providers are never probed
//! concurrently; priority order is the contract.

pub mod providers;

pub use providers::HostContext;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use orderdesk_core::{Contact, Email};

use crate::error::PanelError;

/// Errors a single provider lookup can produce.
///
/// Any of these moves resolution on to the next provider; none of them is
/// fatal on its own.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The source is not present in this host context.
    #[error("source not available in this host context")]
    Unavailable,
    /// The host desk rejected or failed the lookup.
    #[error("host lookup failed: {0}")]
    Lookup(String),
}

/// Unvalidated identity-shaped data returned by a single provider lookup.
///
/// Decoded leniently: every field is optional, camelCase spellings are
/// accepted, and numeric host ids are coerced to strings. Validation happens
/// in [`resolve`], not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(alias = "displayName")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<String>,
}

/// One named source capable of supplying identity data.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Name used in logs when the provider is probed or skipped.
    fn name(&self) -> &str;

    /// Attempt to produce a candidate identity from this source.
    async fn lookup(&self) -> Result<Candidate, ProviderError>;
}

/// Probe `providers` strictly in order and return the first usable identity.
///
/// A provider failure or a candidate without a parseable, non-empty email is
/// logged and skipped; there is no retry within a provider. Exhausting the
/// list yields [`PanelError::IdentityUnresolved`] - never a synthesized
/// identity.
///
/// # Errors
///
/// Returns [`PanelError::IdentityUnresolved`] when no provider yields a
/// usable email.
pub async fn resolve(providers: &[Box<dyn IdentityProvider>]) -> Result<Contact, PanelError> {
    for provider in providers {
        match provider.lookup().await {
            Ok(candidate) => {
                if let Some(contact) = contact_from(candidate) {
                    tracing::debug!(
                        provider = provider.name(),
                        email = %contact.email,
                        "identity resolved"
                    );
                    return Ok(contact);
                }
                tracing::debug!(provider = provider.name(), "candidate has no usable email");
            }
            Err(err) => {
                tracing::debug!(provider = provider.name(), error = %err, "provider lookup failed");
            }
        }
    }

    Err(PanelError::IdentityUnresolved)
}

/// Normalize a raw candidate into a contact, if it carries a usable email.
///
/// The display name falls back through: explicit name, first name, display
/// name, and finally the local part of the email.
fn contact_from(candidate: Candidate) -> Option<Contact> {
    let email = candidate
        .email
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| Email::parse(raw).ok())?;

    let name = non_blank(candidate.name)
        .or_else(|| non_blank(candidate.first_name))
        .or_else(|| non_blank(candidate.display_name))
        .unwrap_or_else(|| email.local_part().to_string());

    Some(Contact::new(email, name, non_blank(candidate.id)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accept host ids that arrive as either JSON strings or numbers.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    }))
}
