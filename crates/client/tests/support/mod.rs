//! Shared helpers for the HTTP contract tests: an in-process stub café
//! API plus a client wired to a throwaway session file.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use tokio::net::TcpListener;
use url::Url;

use samovar_client::{ApiClient, Navigator, SessionStore};

/// A running stub café API on an ephemeral local port.
pub struct StubServer {
    pub base_url: Url,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr: SocketAddr = listener.local_addr().expect("stub server address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub server run");
        });
        let base_url = Url::parse(&format!("http://{addr}")).expect("stub base url");
        Self { base_url, handle }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Navigator that counts login redirects instead of going anywhere.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

/// A client against `base_url` with a fresh session file under `dir`.
pub fn client_in(
    dir: &tempfile::TempDir,
    base_url: Url,
) -> (ApiClient, SessionStore, Arc<RecordingNavigator>) {
    let session = SessionStore::open(dir.path().join("session.json"));
    let navigator = Arc::new(RecordingNavigator::default());
    let api = ApiClient::new(base_url, session.clone(), navigator.clone());
    (api, session, navigator)
}

pub fn tempdir() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}
