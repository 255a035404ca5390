//! Admin user directory manager.

use std::sync::Arc;

use parking_lot::Mutex;

use samovar_core::UserId;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{NewUser, ToggleActiveAck, UserAccount, UserUpdate};

const USERS_PATH: &str = "/api/admin/users";

/// Snapshot-owning manager for the admin user family.
///
/// Every endpoint here requires the admin role server-side; the client
/// just relays and lets a 403 speak for itself.
#[derive(Clone)]
pub struct UserDirectory {
    api: ApiClient,
    snapshot: Arc<Mutex<Vec<UserAccount>>>,
}

impl UserDirectory {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            snapshot: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fetch all user accounts, replacing the snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`]; the old snapshot stays in
    /// place on failure.
    pub async fn load(&self) -> Result<Vec<UserAccount>, ApiError> {
        let users: Vec<UserAccount> = self.api.get(USERS_PATH).await?;
        self.snapshot.lock().clone_from(&users);
        Ok(users)
    }

    /// The current snapshot.
    #[must_use]
    pub fn users(&self) -> Vec<UserAccount> {
        self.snapshot.lock().clone()
    }

    /// Create a user account.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn create(&self, user: &NewUser) -> Result<UserAccount, ApiError> {
        self.api.post(USERS_PATH, user).await
    }

    /// Replace a user account wholesale.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn replace(&self, id: UserId, update: &UserUpdate) -> Result<UserAccount, ApiError> {
        self.api.put(&format!("{USERS_PATH}/{id}"), update).await
    }

    /// Enable a user account.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn activate(&self, id: UserId) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .api
            .patch_empty(&format!("{USERS_PATH}/{id}/activate"))
            .await?;
        Ok(())
    }

    /// Disable a user account.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn deactivate(&self, id: UserId) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .api
            .patch_empty(&format!("{USERS_PATH}/{id}/deactivate"))
            .await?;
        Ok(())
    }

    /// Flip a user account's active flag; returns the new state.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn toggle_active(&self, id: UserId) -> Result<bool, ApiError> {
        let ack: ToggleActiveAck = self
            .api
            .patch_empty(&format!("{USERS_PATH}/{id}/toggle-active"))
            .await?;
        Ok(ack.is_active)
    }

    /// Delete a user account.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`].
    pub async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        let _: serde_json::Value = self.api.delete(&format!("{USERS_PATH}/{id}")).await?;
        Ok(())
    }
}
