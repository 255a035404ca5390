//! Typed records for every endpoint the client consumes.
//!
//! Field names are the server's wire names. Deserialization doubles as
//! field-presence validation: a success response that does not fit its
//! record fails at the client boundary instead of surfacing as missing
//! data somewhere downstream.
//!
//! Timestamps arrive as naive ISO-8601 strings; the server produces them
//! in UTC, so they are converted with `and_utc()` at display time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use samovar_core::{OrderId, OrderItemId, OrderStatus, ProductId, Role, Toman, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

/// Credentials sent to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub user: UserProfile,
}

/// The profile cached alongside the bearer token.
///
/// Replaced wholesale on login and refresh, never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    pub role: Role,
}

/// An authenticated session: token plus cached profile.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

// ─────────────────────────────────────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────────────────────────────────────

/// A menu item. Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Toman,
    pub category: String,
    pub is_active: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Orders
// ─────────────────────────────────────────────────────────────────────────────

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_name: String,
    pub unit_price: Toman,
    pub quantity: u32,
    pub total: Toman,
}

/// A placed order. All fields except `status` are server-authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub table_number: Option<u32>,
    pub status: OrderStatus,
    pub discount: Toman,
    pub created_at: NaiveDateTime,
    pub items: Vec<OrderItem>,
    pub subtotal: Toman,
    pub total: Toman,
}

/// One line of a new order.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Payload for creating an order.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    pub items: Vec<NewOrderItem>,
    pub discount: Toman,
}

/// Payload for the status-update endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

// ─────────────────────────────────────────────────────────────────────────────
// Admin users
// ─────────────────────────────────────────────────────────────────────────────

/// A user account as the admin endpoints see it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub last_login: Option<NaiveDateTime>,
}

/// Payload for creating a user account.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

/// Payload for replacing a user account (PUT).
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
    /// Set to change the password; omitted otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Acknowledgement from the toggle-active endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleActiveAck {
    #[serde(default)]
    pub message: String,
    pub is_active: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard & server info
// ─────────────────────────────────────────────────────────────────────────────

/// Aggregate counters for the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardStats {
    pub total_orders_today: u32,
    pub total_revenue_today: Toman,
    pub pending_orders: u32,
    pub total_products: u32,
    pub total_users: u32,
}

/// Public server information.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub status: String,
}
