//! Authenticated JSON client for the café API.
//!
//! [`ApiClient`] is the single translation point from transport and HTTP
//! outcomes into [`ApiError`]. The convenience verbs are thin
//! parameter-binding wrappers over [`ApiClient::request`] that add typed
//! decoding on top.

use std::sync::Arc;

use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::session::SessionStore;

/// Navigation seam for the login redirect.
///
/// Raising [`ApiError::SessionExpired`] must send the user to the login
/// page no matter which call triggered it; the frontend decides what
/// "going to the login page" means.
pub trait Navigator: Send + Sync {
    /// Send the user to the login page.
    fn redirect_to_login(&self);
}

/// A navigator for contexts with nowhere to redirect to (scripts, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_login(&self) {}
}

/// Authenticated JSON client.
///
/// Cheap to clone; all clones share the same connection pool, session
/// store, and navigator.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    /// Origin-level base, no trailing slash; paths are appended verbatim.
    base: String,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Create a client against `base_url`.
    #[must_use]
    pub fn new(base_url: Url, session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base: base_url.as_str().trim_end_matches('/').to_owned(),
                session,
                navigator,
            }),
        }
    }

    /// The session store this client attaches tokens from.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    pub(crate) fn navigator(&self) -> &dyn Navigator {
        self.inner.navigator.as_ref()
    }

    /// Issue a request and return the raw JSON body.
    ///
    /// Attaches `Content-Type: application/json` always and
    /// `Authorization: Bearer <token>` when the store has a token.
    ///
    /// # Errors
    ///
    /// - [`ApiError::SessionExpired`] on HTTP 401 - the session is cleared
    ///   and the login redirect fires before this returns;
    /// - [`ApiError::RequestFailed`] on any other non-success status, with
    ///   the body's `detail` field when one could be extracted;
    /// - [`ApiError::ConnectionFailed`] when no response was received;
    /// - [`ApiError::InvalidResponse`] when a success body is not JSON.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Value, ApiError> {
        self.execute(method, path, body, extra_headers).await
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{path}", self.inner.base);

        let mut builder = self
            .inner
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.inner.session.token() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(headers) = extra_headers {
            builder = builder.headers(headers);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(%url, error = %e, "request never reached the server");
            ApiError::ConnectionFailed(e)
        })?;

        let status = response.status();

        // 401 wins over everything else: drop the session and head for the
        // login page before even looking at the body.
        if status == StatusCode::UNAUTHORIZED {
            warn!(%url, "bearer token rejected, clearing session");
            self.inner.session.clear();
            self.inner.navigator.redirect_to_login();
            return Err(ApiError::SessionExpired);
        }

        let text = response.text().await.map_err(ApiError::ConnectionFailed)?;

        if !status.is_success() {
            let detail = extract_detail(&text);
            debug!(%url, status = %status, detail = detail.as_deref().unwrap_or(""), "request failed");
            return Err(ApiError::RequestFailed { status, detail });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            warn!(
                %url,
                error = %e,
                body = %text.chars().take(200).collect::<String>(),
                "success response body is not JSON"
            );
            ApiError::InvalidResponse(format!("body is not JSON: {e}"))
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Convenience verbs
    // ─────────────────────────────────────────────────────────────────────

    /// GET a typed resource.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; additionally [`ApiError::InvalidResponse`]
    /// when the body does not fit `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.execute::<Value>(Method::GET, path, None, None).await?)
    }

    /// POST a JSON body, returning the typed response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        decode(self.execute(Method::POST, path, Some(body), None).await?)
    }

    /// PUT a JSON body, returning the typed response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        decode(self.execute(Method::PUT, path, Some(body), None).await?)
    }

    /// PATCH a JSON body, returning the typed response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        decode(self.execute(Method::PATCH, path, Some(body), None).await?)
    }

    /// PATCH with no body, returning the typed response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(
            self.execute::<Value>(Method::PATCH, path, None, None)
                .await?,
        )
    }

    /// DELETE a resource, returning the typed response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(
            self.execute::<Value>(Method::DELETE, path, None, None)
                .await?,
        )
    }
}

/// Best-effort extraction of the human-readable `detail` field.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(ToOwned::to_owned)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidResponse(format!("unexpected response shape: {e}")))
}
