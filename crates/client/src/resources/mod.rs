//! Per-resource snapshot managers.
//!
//! Each manager owns exactly one in-memory snapshot of its collection,
//! replaced (never merged) on every successful load; staleness is bounded
//! by the last load time. Concurrent loads on the same manager are
//! last-write-wins - no ordering guarantee is provided or required.
//!
//! Errors propagate unchanged; presentation is the caller's job.

mod dashboard;
mod orders;
mod products;
mod users;

pub use dashboard::Dashboard;
pub use orders::OrderBook;
pub use products::ProductCatalog;
pub use users::UserDirectory;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::ServerInfo;

/// Fetch public server information (no authentication required).
///
/// # Errors
///
/// Propagates the underlying [`ApiError`].
pub async fn server_info(api: &ApiClient) -> Result<ServerInfo, ApiError> {
    api.get("/api/server/info").await
}
