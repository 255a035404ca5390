//! Samovar Client - REST client and session management for the café API.
//!
//! # Architecture
//!
//! - [`SessionStore`] persists the bearer token and cached profile in a
//!   JSON file with two fixed keys; all reads are served from memory.
//! - [`ApiClient`] issues authenticated JSON requests and is the sole
//!   place transport/HTTP outcomes become [`ApiError`] values.
//! - [`AuthService`] owns the session lifecycle: login, logout, refresh.
//! - [`resources`] holds one snapshot-owning manager per REST family.
//!
//! Managers never present errors; they propagate [`ApiError`] unchanged
//! and the frontend decides how to show it.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use samovar_client::{ApiClient, AuthService, ClientConfig, NoopNavigator, SessionStore};
//! use samovar_client::resources::ProductCatalog;
//!
//! let config = ClientConfig::from_env()?;
//! let session = SessionStore::open(&config.session_file);
//! let api = ApiClient::new(config.base_url, session, Arc::new(NoopNavigator));
//!
//! let auth = AuthService::new(api.clone());
//! auth.login("morteza", "hunter2").await?;
//!
//! let catalog = ProductCatalog::new(api);
//! let products = catalog.load().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod resources;
pub mod session;

pub use auth::AuthService;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{ApiClient, Navigator, NoopNavigator};
pub use session::SessionStore;
