//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;

use fridge_relay::config::{RelayConfig, UpstreamConfig};
use fridge_relay::http::HttpServer;
use fridge_relay::lifecycle::Shutdown;
use fridge_relay::upstream::UpstreamClient;

/// One request captured by the mock upstream.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub apikey: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// Handle on a running mock upstream.
pub struct MockUpstream {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl MockUpstream {
    /// Base URL suitable for `UpstreamConfig::base_url`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// All requests the mock has served so far.
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[derive(Clone)]
struct MockState {
    status: u16,
    content_type: &'static str,
    body: &'static str,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Start a mock upstream that replies with a fixed JSON response.
#[allow(dead_code)]
pub async fn start_mock_upstream(status: u16, body: &'static str) -> MockUpstream {
    start_mock_upstream_with(status, "application/json", body).await
}

/// Start a mock upstream replying with a fixed status, content type and
/// body, recording every request it serves.
#[allow(dead_code)]
pub async fn start_mock_upstream_with(
    status: u16,
    content_type: &'static str,
    body: &'static str,
) -> MockUpstream {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        content_type,
        body,
        requests: requests.clone(),
    };

    let app = Router::new().fallback(record_and_reply).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream { addr, requests }
}

async fn record_and_reply(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        apikey: header_value("apikey"),
        authorization: header_value("authorization"),
        content_type: header_value("content-type"),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    (
        StatusCode::from_u16(state.status).unwrap(),
        [(header::CONTENT_TYPE, state.content_type)],
        state.body,
    )
}

/// Relay configuration pointing at the given upstream base URL.
pub fn relay_config(base_url: &str) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.upstream = UpstreamConfig {
        base_url: base_url.to_string(),
        service_key: "test-service-key".to_string(),
    };
    config
}

/// Start the relay on an ephemeral port.
///
/// Returns the relay's base URL and the shutdown coordinator keeping it
/// alive; dropping the coordinator stops the server.
#[allow(dead_code)]
pub async fn start_relay(config: RelayConfig) -> (String, Shutdown) {
    let upstream = UpstreamClient::new(&config.upstream).unwrap();
    let server = HttpServer::new(config, upstream).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}
