//! Login, logout, and profile refresh.

use tracing::{info, warn};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{LoginRequest, LoginResponse, Session, UserProfile};
use crate::session::SessionStore;

const LOGIN_PATH: &str = "/api/auth/login";
const ME_PATH: &str = "/api/auth/me";

/// Session lifecycle operations.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn session(&self) -> &SessionStore {
        self.api.session()
    }

    /// Exchange credentials for a bearer token and cache the profile.
    ///
    /// The response must carry a non-empty `access_token`. If it does not,
    /// the store is left untouched - a failed login never half-writes a
    /// session.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`];
    /// [`ApiError::InvalidResponse`] when the token is missing or empty.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let request = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let response: LoginResponse = self.api.post(LOGIN_PATH, &request).await?;
        if response.access_token.is_empty() {
            warn!("login response carried an empty access_token");
            return Err(ApiError::InvalidResponse(
                "login response is missing an access token".to_owned(),
            ));
        }

        self.session()
            .set_session(response.access_token.clone(), response.user.clone());
        info!(username = %response.user.username, role = %response.user.role, "logged in");
        Ok(Session {
            token: response.access_token,
            user: response.user,
        })
    }

    /// Clear the session and head to the login page.
    ///
    /// Never fails; logging out with no active session is a no-op on the
    /// store and still performs the redirect.
    pub fn logout(&self) {
        self.session().clear();
        self.api.navigator().redirect_to_login();
    }

    /// Re-fetch the current user's profile and overwrite the cached copy.
    ///
    /// Any failure is treated as an invalid session: the store is cleared,
    /// the login redirect fires, and the original error propagates.
    ///
    /// # Errors
    ///
    /// The underlying [`ApiError`], unchanged.
    pub async fn refresh_profile(&self) -> Result<UserProfile, ApiError> {
        match self.api.get::<UserProfile>(ME_PATH).await {
            Ok(user) => {
                self.session().set_user(user.clone());
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, "profile refresh failed, dropping session");
                self.logout();
                Err(err)
            }
        }
    }
}
