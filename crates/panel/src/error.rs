//! Unified error handling with Sentry integration.
//!
//! One load cycle fails fast with exactly one [`PanelError`] kind; no stage
//! substitutes fabricated or cached data to mask a failure. The HTTP layer
//! maps each kind to one fixed user-facing message and captures server-side
//! kinds to Sentry before responding.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application-level error type for the panel.
#[derive(Debug, Error)]
pub enum PanelError {
    /// Every identity provider was exhausted without a usable email.
    #[error("no identity provider yielded a usable email")]
    IdentityUnresolved,

    /// No order endpoint could be resolved, including the default.
    #[error("no order endpoint is configured")]
    ConfigurationMissing,

    /// Transport failure or non-2xx response from the order endpoint.
    /// `status` is `None` when no response was received at all.
    #[error("order endpoint request {}", .status.map_or_else(|| "failed before a response was received".to_string(), |s| format!("returned status {s}")))]
    Network { status: Option<u16> },

    /// The order endpoint body was not JSON, or not an array at the top level.
    #[error("order endpoint returned a malformed response: {0}")]
    MalformedResponse(String),

    /// Unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl PanelError {
    /// Stable machine-readable kind label, used in the wire contract and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::IdentityUnresolved => "identity_unresolved",
            Self::ConfigurationMissing => "configuration_missing",
            Self::Network { .. } => "network_error",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Internal(_) => "internal",
        }
    }

    /// The one fixed user-facing message for this kind.
    ///
    /// Unrecognized failures (`Internal`) pass their raw message through
    /// unchanged.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::IdentityUnresolved => {
                "Could not identify the customer for this view.".to_string()
            }
            Self::ConfigurationMissing => "The order service is not configured.".to_string(),
            Self::Network { .. } => "Could not reach the order service.".to_string(),
            Self::MalformedResponse(_) => {
                "The order service returned an unexpected response.".to_string()
            }
            Self::Internal(message) => message.clone(),
        }
    }

    /// Whether this kind indicates a server-side fault worth tracking.
    const fn is_server_side(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissing | Self::Network { .. } | Self::MalformedResponse(_) | Self::Internal(_)
        )
    }
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        // Capture server-side faults to Sentry
        if self.is_server_side() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                kind = self.kind(),
                error = %self,
                sentry_event_id = %event_id,
                "Load cycle error"
            );
        } else {
            tracing::debug!(kind = self.kind(), error = %self, "Load cycle error");
        }

        let status = match &self {
            Self::IdentityUnresolved => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ConfigurationMissing | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Network { .. } | Self::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(serde_json::json!({
            "error": self.kind(),
            "message": self.user_message(),
        }));

        (status, body).into_response()
    }
}

/// Result type alias for `PanelError`.
pub type Result<T> = std::result::Result<T, PanelError>;
