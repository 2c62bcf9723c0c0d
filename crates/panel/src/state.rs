//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::PanelConfig;
use crate::cycle::Session;
use crate::error::PanelError;
use crate::orders::OrderSource;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the panel session, and the order endpoint client. There is
/// deliberately no ambient global: every pipeline stage receives what it
/// needs from here explicitly.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PanelConfig,
    session: Session,
    source: OrderSource,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the order endpoint client cannot be built.
    pub fn new(config: PanelConfig) -> Result<Self, PanelError> {
        let source = OrderSource::new(&config)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                session: Session::new(),
                source,
            }),
        })
    }

    /// Get a reference to the panel configuration.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.inner.config
    }

    /// Get a reference to the panel session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get a reference to the order endpoint client.
    #[must_use]
    pub fn source(&self) -> &OrderSource {
        &self.inner.source
    }
}
