//! The dashboard page.

use samovar_client::ApiClient;
use samovar_client::resources::Dashboard;

use super::CommandResult;
use crate::render;

/// Load and render today's counters.
///
/// # Errors
///
/// Propagates the underlying client error.
pub async fn show(api: &ApiClient) -> CommandResult {
    let dashboard = Dashboard::new(api.clone());
    let stats = {
        let _spinner = render::Spinner::show();
        dashboard.load_stats().await?
    };
    render::stats(&stats);
    Ok(())
}
