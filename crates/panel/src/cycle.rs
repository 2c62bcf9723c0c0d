//! Load-cycle orchestration and the duplicate-trigger guard.
//!
//! The desk may activate the panel more than once per view-open (the
//! activation event plus a timer-based fallback). Cycles are never cancelled;
//! instead every trigger takes a generation token and a completion whose
//! token has gone stale is discarded, so the newest trigger always decides
//! what is displayed regardless of completion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;

use orderdesk_core::{Contact, ViewModel};

use crate::error::PanelError;
use crate::identity::{self, IdentityProvider};
use crate::orders::{self, OrderSource};

/// What the renderer currently sees.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    /// No activation has been received yet.
    Idle,
    /// The newest cycle is still running.
    Loading,
    /// The customer's order history is ready to render.
    Ready { view: ViewModel },
    /// The customer resolved but has no matching orders. A success terminal,
    /// distinct from every error.
    Empty { contact: Contact },
    /// The cycle surfaced an error; `message` is the fixed user-facing text.
    Failed { kind: String, message: String },
}

/// One panel session: the displayed state plus the generation guard.
///
/// Cheaply cloneable; clones share the same displayed slot.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    /// Latest issued generation token.
    generation: AtomicU64,
    displayed: RwLock<Displayed>,
}

struct Displayed {
    /// Token of the cycle that produced `state`.
    generation: u64,
    state: ViewState,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SessionInner {
                generation: AtomicU64::new(0),
                displayed: RwLock::new(Displayed {
                    generation: 0,
                    state: ViewState::Idle,
                }),
            }),
        }
    }

    /// The state the renderer should currently display.
    pub async fn current(&self) -> ViewState {
        self.inner.displayed.read().await.state.clone()
    }

    /// Run one load cycle against the supplied providers and order source.
    ///
    /// The cycle always terminates in exactly one committed outcome: `Ready`,
    /// `Empty`, or `Failed`. The returned value is this trigger's outcome
    /// (also surfaced as `Err` for failures so HTTP callers can map it);
    /// if a newer trigger superseded this one, the newer displayed state is
    /// returned instead.
    ///
    /// # Errors
    ///
    /// Propagates the `PanelError` that failed this cycle, after committing
    /// the corresponding `Failed` state.
    pub async fn run(
        &self,
        providers: &[Box<dyn IdentityProvider>],
        source: &OrderSource,
        display_limit: usize,
    ) -> Result<ViewState, PanelError> {
        let token = self.begin();
        self.commit(token, ViewState::Loading).await;

        match Self::execute(providers, source, display_limit).await {
            Ok(state) => {
                if self.commit(token, state.clone()).await {
                    Ok(state)
                } else {
                    tracing::debug!(token, "discarded stale load cycle completion");
                    Ok(self.current().await)
                }
            }
            Err(err) => {
                let failed = ViewState::Failed {
                    kind: err.kind().to_string(),
                    message: err.user_message(),
                };
                if !self.commit(token, failed).await {
                    tracing::debug!(token, "discarded stale load cycle failure");
                }
                Err(err)
            }
        }
    }

    /// The pipeline itself: resolve, fetch, decode, filter, summarize, sort,
    /// compose. Pure except for the provider probes and the fetch.
    async fn execute(
        providers: &[Box<dyn IdentityProvider>],
        source: &OrderSource,
        display_limit: usize,
    ) -> Result<ViewState, PanelError> {
        let contact = identity::resolve(providers).await?;

        let raw = source.fetch().await?;
        let records = orders::decode_records(raw);
        let matching = orders::filter(&records, &contact.email);

        if matching.is_empty() {
            tracing::debug!(email = %contact.email, "no orders for resolved customer");
            return Ok(ViewState::Empty { contact });
        }

        let today = Utc::now().date_naive();
        let summary = orders::summarize(&matching, today);
        let display = orders::sort(&matching, display_limit);

        Ok(ViewState::Ready {
            view: ViewModel::compose(contact, summary, display),
        })
    }

    /// Allocate the next generation token. Called before the first await of a
    /// cycle so that trigger order and token order agree.
    fn begin(&self) -> u64 {
        self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Store `state` unless this cycle has been superseded.
    ///
    /// Returns whether the commit landed.
    async fn commit(&self, token: u64, state: ViewState) -> bool {
        if self.inner.generation.load(Ordering::SeqCst) != token {
            return false;
        }

        let mut displayed = self.inner.displayed.write().await;
        // A newer cycle may have committed between the check and the lock
        if displayed.generation > token {
            return false;
        }

        *displayed = Displayed {
            generation: token,
            state,
        };
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
