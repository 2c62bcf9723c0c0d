//! Identity providers backed by the host desk's context snapshot.
//!
//! The desk delivers a snapshot with the activation; whichever sections it
//! could populate become providers, probed in a fixed priority order.

use async_trait::async_trait;
use serde::Deserialize;

use super::{Candidate, IdentityProvider, ProviderError};

/// Snapshot of the host desk context delivered with an activation.
///
/// Every section is optional; the desk populates whichever its current view
/// can supply. An agent view typically carries `contact` and `ticket`, the
/// customer portal carries `requester` or `logged_in_user`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostContext {
    pub contact: Option<Candidate>,
    pub requester: Option<Candidate>,
    #[serde(alias = "loggedInUser")]
    pub logged_in_user: Option<Candidate>,
    pub ticket: Option<TicketContext>,
}

/// The ticket section of the host context.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TicketContext {
    pub requester: Option<Candidate>,
}

impl HostContext {
    /// Build the ordered provider chain for this snapshot.
    ///
    /// Priority mirrors the desk's own precedence: the agent-view contact
    /// first, then the portal requester, then the logged-in user, and last
    /// the requester embedded in the ticket.
    #[must_use]
    pub fn providers(&self) -> Vec<Box<dyn IdentityProvider>> {
        vec![
            Box::new(SectionProvider::new("contact", self.contact.clone())),
            Box::new(SectionProvider::new("requester", self.requester.clone())),
            Box::new(SectionProvider::new(
                "logged-in-user",
                self.logged_in_user.clone(),
            )),
            Box::new(SectionProvider::new(
                "ticket-requester",
                self.ticket.as_ref().and_then(|t| t.requester.clone()),
            )),
        ]
    }
}

/// Provider over one optional section of the host context snapshot.
struct SectionProvider {
    name: &'static str,
    candidate: Option<Candidate>,
}

impl SectionProvider {
    const fn new(name: &'static str, candidate: Option<Candidate>) -> Self {
        Self { name, candidate }
    }
}

#[async_trait]
impl IdentityProvider for SectionProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn lookup(&self) -> Result<Candidate, ProviderError> {
        self.candidate.clone().ok_or(ProviderError::Unavailable)
    }
}
