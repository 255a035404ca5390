//! Order manager.

use std::sync::Arc;

use parking_lot::Mutex;

use samovar_core::{OrderId, OrderStatus};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{NewOrder, Order, OrderStatusUpdate};

const ORDERS_PATH: &str = "/api/orders";

/// How many orders a listing fetches at most.
const PAGE_LIMIT: u32 = 100;

/// Snapshot-owning manager for the order family.
///
/// Status is the only field the client mutates; everything else is
/// server-authoritative and picked up by the next load.
#[derive(Clone)]
pub struct OrderBook {
    api: ApiClient,
    snapshot: Arc<Mutex<Vec<Order>>>,
}

impl OrderBook {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            snapshot: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fetch orders, optionally narrowed to one status, replacing the
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`]; the old snapshot stays in
    /// place on failure.
    pub async fn load(&self, status_filter: Option<&OrderStatus>) -> Result<Vec<Order>, ApiError> {
        let mut path = format!("{ORDERS_PATH}?limit={PAGE_LIMIT}");
        if let Some(status) = status_filter {
            path.push_str("&status_filter=");
            path.push_str(status.as_str());
        }

        let orders: Vec<Order> = self.api.get(&path).await?;
        self.snapshot.lock().clone_from(&orders);
        Ok(orders)
    }

    /// The current snapshot.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.snapshot.lock().clone()
    }

    /// Place a new order.
    ///
    /// The snapshot is not updated; the next load returns the server's
    /// authoritative listing.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn create(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.api.post(ORDERS_PATH, order).await
    }

    /// Move an order to a new status.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<(), ApiError> {
        let body = OrderStatusUpdate { status };
        let _: serde_json::Value = self
            .api
            .patch(&format!("{ORDERS_PATH}/{id}/status"), &body)
            .await?;
        Ok(())
    }

    /// Fetch a single order directly from the server.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn fetch(&self, id: OrderId) -> Result<Order, ApiError> {
        self.api.get(&format!("{ORDERS_PATH}/{id}")).await
    }
}
