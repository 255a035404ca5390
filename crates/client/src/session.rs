//! Durable session state: bearer token and cached user profile.
//!
//! The store mirrors the two fixed keys the café frontends have always
//! used. State lives in memory and is loaded once at open; every mutation
//! swaps the in-memory value and then writes the file best-effort. A
//! failed write is logged at `warn` and the in-memory session stays
//! authoritative - storage that stops working mid-session is explicitly
//! out of scope.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use samovar_core::Role;

use crate::models::UserProfile;

/// Fixed key names in the session file.
pub mod keys {
    /// Key holding the opaque bearer token.
    pub const AUTH_TOKEN: &str = "samovar_auth_token";
    /// Key holding the serialized user profile.
    pub const USER: &str = "samovar_user";
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct SessionState {
    #[serde(
        rename = "samovar_auth_token",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    token: Option<String>,
    #[serde(
        rename = "samovar_user",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    user: Option<UserProfile>,
}

/// Persistent session store.
///
/// Cheap to clone; all clones share the same state and file.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    path: PathBuf,
    state: Mutex<SessionState>,
}

impl SessionStore {
    /// Open the store at `path`, loading any previously persisted session.
    ///
    /// A missing file is an empty session; an unreadable or corrupt file
    /// is treated the same and logged.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = load_state(&path);
        Self {
            inner: Arc::new(SessionStoreInner {
                path,
                state: Mutex::new(state),
            }),
        }
    }

    /// The stored bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.state.lock().token.clone()
    }

    /// Store a bearer token.
    pub fn set_token(&self, token: impl Into<String>) {
        let mut state = self.inner.state.lock();
        state.token = Some(token.into());
        persist(&self.inner.path, &state);
    }

    /// The cached user profile, if any.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.inner.state.lock().user.clone()
    }

    /// Replace the cached user profile.
    pub fn set_user(&self, user: UserProfile) {
        let mut state = self.inner.state.lock();
        state.user = Some(user);
        persist(&self.inner.path, &state);
    }

    /// Store token and profile together (one write).
    pub fn set_session(&self, token: impl Into<String>, user: UserProfile) {
        let mut state = self.inner.state.lock();
        state.token = Some(token.into());
        state.user = Some(user);
        persist(&self.inner.path, &state);
    }

    /// Drop both token and profile and delete the session file.
    ///
    /// Idempotent; clearing an empty store is a no-op.
    pub fn clear(&self) {
        *self.inner.state.lock() = SessionState::default();
        if let Err(e) = std::fs::remove_file(&self.inner.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            warn!(path = %self.inner.path.display(), error = %e, "could not delete session file");
        }
    }

    /// Whether a bearer token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.lock().token.is_some()
    }

    /// Whether the cached profile carries the given role.
    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        self.inner
            .state
            .lock()
            .user
            .as_ref()
            .is_some_and(|user| user.role == *role)
    }

    /// Whether the cached profile is an admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::Admin)
    }
}

fn load_state(path: &Path) -> SessionState {
    match std::fs::read(path) {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "session file is corrupt, starting empty");
            SessionState::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => SessionState::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read session file, starting empty");
            SessionState::default()
        }
    }
}

fn persist(path: &Path, state: &SessionState) {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!(path = %path.display(), error = %e, "could not create session directory");
        return;
    }
    match serde_json::to_vec_pretty(state) {
        Ok(bytes) => {
            if let Err(e) = std::fs::write(path, bytes) {
                warn!(path = %path.display(), error = %e, "could not persist session");
            }
        }
        Err(e) => warn!(error = %e, "could not serialize session"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samovar_core::UserId;

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: UserId::new(1),
            username: "morteza".to_owned(),
            full_name: "مرتضی احمدی".to_owned(),
            role,
        }
    }

    #[test]
    fn session_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionStore::open(&path);
        store.set_session("tok-123", profile(Role::Admin));

        let reopened = SessionStore::open(&path);
        assert_eq!(reopened.token().as_deref(), Some("tok-123"));
        assert!(reopened.is_authenticated());
        assert!(reopened.is_admin());
    }

    #[test]
    fn file_uses_the_fixed_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionStore::open(&path);
        store.set_session("tok-123", profile(Role::Cashier));

        let raw = std::fs::read_to_string(&path).expect("session file exists");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");
        assert!(value.get(keys::AUTH_TOKEN).is_some());
        assert!(value.get(keys::USER).is_some());
    }

    #[test]
    fn corrupt_file_loads_as_empty_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not json at all").expect("write corrupt file");

        let store = SessionStore::open(&path);
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn clear_is_idempotent_and_removes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionStore::open(&path);
        // Clearing an empty store is fine.
        store.clear();

        store.set_session("tok-123", profile(Role::Cashier));
        assert!(path.exists());
        store.clear();
        assert!(!path.exists());
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());

        // And again, for good measure.
        store.clear();
    }

    #[test]
    fn has_role_reads_cached_profile() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::open(dir.path().join("session.json"));

        assert!(!store.has_role(&Role::Admin));
        store.set_user(profile(Role::Cashier));
        assert!(store.has_role(&Role::Cashier));
        assert!(!store.is_admin());
    }
}
