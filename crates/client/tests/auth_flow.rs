//! Session lifecycle tests: login, logout, profile refresh.

mod support;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use serde_json::{Value, json};

use samovar_client::{ApiError, AuthService};
use samovar_core::Role;

use support::{StubServer, client_in, tempdir};

fn login_router() -> Router {
    Router::new().route(
        "/api/auth/login",
        post(|Json(body): Json<Value>| async move {
            if body["username"] == "morteza" && body["password"] == "hunter2" {
                (
                    StatusCode::OK,
                    Json(json!({
                        "access_token": "tok-1",
                        "token_type": "bearer",
                        "user": {
                            "id": 1,
                            "username": "morteza",
                            "full_name": "مرتضی احمدی",
                            "role": "admin"
                        }
                    })),
                )
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"detail": "نام کاربری یا رمز عبور اشتباه است"})),
                )
            }
        }),
    )
}

#[tokio::test]
async fn login_success_creates_session() {
    let server = StubServer::start(login_router()).await;
    let dir = tempdir();
    let (api, session, _nav) = client_in(&dir, server.base_url.clone());
    let auth = AuthService::new(api);

    let created = auth.login("morteza", "hunter2").await.expect("login");
    assert_eq!(created.token, "tok-1");
    assert_eq!(created.user.role, Role::Admin);

    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("tok-1"));
    let cached = session.user().expect("profile cached");
    assert_eq!(cached.role, Role::Admin);
    assert_eq!(cached.username, "morteza");
}

#[tokio::test]
async fn rejected_credentials_surface_as_session_expired() {
    // The server answers bad credentials with 401, which takes the same
    // path as any other authorization rejection.
    let server = StubServer::start(login_router()).await;
    let dir = tempdir();
    let (api, session, nav) = client_in(&dir, server.base_url.clone());
    let auth = AuthService::new(api);

    let err = auth
        .login("morteza", "wrong")
        .await
        .expect_err("bad credentials fail");
    assert!(matches!(err, ApiError::SessionExpired));
    assert!(!session.is_authenticated());
    assert_eq!(nav.redirect_count(), 1);
}

#[tokio::test]
async fn login_without_token_leaves_store_untouched() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            // Success status, but no access_token field at all.
            Json(json!({
                "user": {
                    "id": 1,
                    "username": "morteza",
                    "full_name": "مرتضی احمدی",
                    "role": "admin"
                }
            }))
        }),
    );
    let server = StubServer::start(router).await;
    let dir = tempdir();
    let (api, session, _nav) = client_in(&dir, server.base_url.clone());
    let auth = AuthService::new(api);

    let err = auth
        .login("morteza", "hunter2")
        .await
        .expect_err("missing token is rejected");
    assert!(matches!(err, ApiError::InvalidResponse(_)));

    // Idempotent failure: no partial session write.
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn login_with_empty_token_leaves_store_untouched() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            Json(json!({
                "access_token": "",
                "token_type": "bearer",
                "user": {
                    "id": 1,
                    "username": "morteza",
                    "full_name": "مرتضی احمدی",
                    "role": "admin"
                }
            }))
        }),
    );
    let server = StubServer::start(router).await;
    let dir = tempdir();
    let (api, session, _nav) = client_in(&dir, server.base_url.clone());
    let auth = AuthService::new(api);

    let err = auth
        .login("morteza", "hunter2")
        .await
        .expect_err("empty token is rejected");
    assert!(matches!(err, ApiError::InvalidResponse(_)));
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn refresh_overwrites_cached_profile() {
    let router = login_router().route(
        "/api/auth/me",
        get(|| async {
            Json(json!({
                "id": 1,
                "username": "morteza",
                "full_name": "مرتضی احمدی‌نژاد",
                "role": "admin",
                "is_active": true,
                "created_at": "2026-01-01T08:00:00",
                "last_login": "2026-08-07T09:15:00"
            }))
        }),
    );
    let server = StubServer::start(router).await;
    let dir = tempdir();
    let (api, session, _nav) = client_in(&dir, server.base_url.clone());
    let auth = AuthService::new(api);

    auth.login("morteza", "hunter2").await.expect("login");
    let refreshed = auth.refresh_profile().await.expect("refresh");
    assert_eq!(refreshed.full_name, "مرتضی احمدی‌نژاد");

    let cached = session.user().expect("profile cached");
    assert_eq!(cached.full_name, "مرتضی احمدی‌نژاد");
    // Token is untouched by a refresh.
    assert_eq!(session.token().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn refresh_failure_forces_logout_and_keeps_original_error() {
    let router = login_router().route(
        "/api/auth/me",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "database is down"})),
            )
        }),
    );
    let server = StubServer::start(router).await;
    let dir = tempdir();
    let (api, session, nav) = client_in(&dir, server.base_url.clone());
    let auth = AuthService::new(api);

    auth.login("morteza", "hunter2").await.expect("login");
    assert!(session.is_authenticated());

    let err = auth
        .refresh_profile()
        .await
        .expect_err("refresh fails on 500");
    // The original error propagates, not a synthetic one.
    match &err {
        ApiError::RequestFailed { status, detail } => {
            assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(detail.as_deref(), Some("database is down"));
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }

    // And the session is gone, with the redirect fired.
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(nav.redirect_count() >= 1);
}

#[tokio::test]
async fn logout_with_no_session_still_succeeds() {
    let server = StubServer::start(Router::new()).await;
    let dir = tempdir();
    let (api, session, nav) = client_in(&dir, server.base_url.clone());
    let auth = AuthService::new(api);

    auth.logout();
    assert!(!session.is_authenticated());
    assert_eq!(nav.redirect_count(), 1);

    // And again: idempotent.
    auth.logout();
    assert!(!session.is_authenticated());
    assert_eq!(nav.redirect_count(), 2);
}
