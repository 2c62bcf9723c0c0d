//! Run one load cycle from the command line.
//!
//! Useful when wiring up a new order endpoint or debugging a host-context
//! snapshot: the same pipeline the server runs, without the server.

use std::path::Path;

use orderdesk_panel::config::PanelConfig;
use orderdesk_panel::cycle::Session;
use orderdesk_panel::identity::HostContext;
use orderdesk_panel::orders::OrderSource;

/// Run one load cycle and print the resulting view state as JSON.
///
/// # Errors
///
/// Returns an error if the context file cannot be read or parsed, or if the
/// load cycle fails (the error kind is reported via the exit path).
#[allow(clippy::print_stdout)] // the view state JSON is this command's output
pub async fn run(
    context_path: &Path,
    api_url: Option<String>,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(context_path)?;
    let context: HostContext = serde_json::from_str(&raw)?;

    let mut config = PanelConfig::from_env()?;
    if let Some(url) = api_url {
        config.api_url = url;
    }
    if let Some(limit) = limit {
        config.display_limit = limit;
    }

    let source = OrderSource::new(&config)?;
    let session = Session::new();
    let providers = context.providers();

    let state = session
        .run(&providers, &source, config.display_limit)
        .await?;

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
