use std::net::SocketAddr;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{Json, Router, extract::State, routing::post};
use http::StatusCode;
use tokio::{net::TcpListener, task::JoinHandle};
use url::Url;

pub mod tracing {
    use tracing_subscriber::EnvFilter;

    pub fn init_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}

/// A stand-in for the app's token server.
///
/// Answers every POST with the configured body and, like the real one, with
/// HTTP 200 regardless of whether the body is a credential or an in-band
/// error payload. Counts hits and records request bodies so tests can assert
/// that (or that no) network traffic happened.
#[derive(Debug, Clone)]
pub struct MockIssuer {
    pub endpoint: Url,
    pub hits: Arc<AtomicUsize>,
    pub received: Arc<Mutex<Vec<serde_json::Value>>>,
    _server: Arc<AbortOnDrop<()>>,
}

#[derive(Debug)]
pub struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Clone)]
struct IssuerState {
    response: Arc<serde_json::Value>,
    hits: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
}

async fn issue(
    State(state): State<IssuerState>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.received.lock().unwrap().push(body);
    (StatusCode::OK, Json((*state.response).clone()))
}

impl MockIssuer {
    pub async fn start(response: serde_json::Value) -> anyhow::Result<Self> {
        let state = IssuerState {
            response: Arc::new(response),
            hits: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
        };
        let hits = state.hits.clone();
        let received = state.received.clone();

        let router = Router::new().route("/auth", post(issue)).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock issuer to serve");
        });

        Ok(Self {
            endpoint: Url::parse(&format!("http://{addr}/auth"))?,
            hits,
            received,
            _server: Arc::new(AbortOnDrop(server)),
        })
    }

    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// An address nothing listens on, for provoking transport errors.
pub async fn unreachable_endpoint() -> anyhow::Result<Url> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(Url::parse(&format!("http://{addr}/auth"))?)
}
