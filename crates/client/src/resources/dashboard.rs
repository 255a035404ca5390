//! Dashboard statistics manager.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::DashboardStats;

const STATS_PATH: &str = "/api/dashboard/stats";

/// Snapshot-owning manager for the dashboard counters.
#[derive(Clone)]
pub struct Dashboard {
    api: ApiClient,
    snapshot: Arc<Mutex<Option<DashboardStats>>>,
}

impl Dashboard {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            snapshot: Arc::new(Mutex::new(None)),
        }
    }

    /// Fetch the aggregate counters, replacing the snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`]; the old snapshot stays in
    /// place on failure.
    pub async fn load_stats(&self) -> Result<DashboardStats, ApiError> {
        let stats: DashboardStats = self.api.get(STATS_PATH).await?;
        *self.snapshot.lock() = Some(stats.clone());
        Ok(stats)
    }

    /// The last loaded counters, if any.
    #[must_use]
    pub fn stats(&self) -> Option<DashboardStats> {
        self.snapshot.lock().clone()
    }
}
