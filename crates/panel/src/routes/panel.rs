//! Panel route handlers.

use axum::Json;
use axum::extract::State;

use crate::cycle::ViewState;
use crate::error::Result;
use crate::identity::HostContext;
use crate::state::AppState;

/// Activation trigger: run one load cycle against the supplied host context.
///
/// The desk may fire this more than once per view-open; the session's
/// generation guard keeps the newest activation's result on screen. Failures
/// are committed to the session (so the renderer's pull sees them) and also
/// surfaced here with the error-to-message mapping.
pub async fn activate(
    State(state): State<AppState>,
    Json(context): Json<HostContext>,
) -> Result<Json<ViewState>> {
    let providers = context.providers();
    let view = state
        .session()
        .run(&providers, state.source(), state.config().display_limit)
        .await?;

    Ok(Json(view))
}

/// Currently displayed state, for the renderer's pull.
pub async fn view(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.session().current().await)
}
