//! Integration tests for Samovar.
//!
//! These tests exercise the real client stack against a live café API
//! server, so they are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Point the suite at a running server
//! export SAMOVAR_BASE_URL=http://127.0.0.1:8080
//! export SAMOVAR_TEST_USERNAME=admin
//! export SAMOVAR_TEST_PASSWORD=admin
//!
//! cargo test -p samovar-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - login/refresh/logout lifecycle
//! - `orders` - product catalog and order round-trips
//! - `admin_users` - admin user management

use std::sync::Arc;

use samovar_client::{ApiClient, NoopNavigator, SessionStore};
use url::Url;

/// Base URL for the café API (configurable via environment).
#[must_use]
pub fn base_url() -> Url {
    let raw = std::env::var("SAMOVAR_BASE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8080".to_owned());
    Url::parse(&raw).expect("SAMOVAR_BASE_URL is a valid URL")
}

/// Test credentials (configurable via environment).
#[must_use]
pub fn credentials() -> (String, String) {
    let username = std::env::var("SAMOVAR_TEST_USERNAME").unwrap_or_else(|_| "admin".to_owned());
    let password = std::env::var("SAMOVAR_TEST_PASSWORD").unwrap_or_else(|_| "admin".to_owned());
    (username, password)
}

/// A client with a throwaway session file, so test runs never touch a
/// real session.
#[must_use]
pub fn test_client(dir: &std::path::Path) -> ApiClient {
    let session = SessionStore::open(dir.join("session.json"));
    ApiClient::new(base_url(), session, Arc::new(NoopNavigator))
}
