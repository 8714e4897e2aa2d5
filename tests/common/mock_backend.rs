//! Mock blog backend for HTTP tests.
//!
//! Requests are answered from the canned response queue first. Once the
//! queue is empty an in-memory `/blogs` store answers instead.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    /// Error with a `{ "message": ... }` body.
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "message": message }).to_string().into_bytes(),
            delay_ms: 0,
        }
    }

    /// Error whose body is not the expected JSON shape.
    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Default)]
struct BlogStore {
    articles: Vec<Value>,
    next_id: u64,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    store: Arc<Mutex<BlogStore>>,
    /// Delay applied to store-backed answers.
    store_delay_ms: Arc<Mutex<u64>>,
}

/// Mock backend server for testing.
pub struct MockBackend {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockBackend {
    /// Start a new mock backend server with an empty store.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            store: Arc::new(Mutex::new(BlogStore {
                articles: Vec::new(),
                next_id: 1,
            })),
            store_delay_ms: Arc::new(Mutex::new(0)),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Seed the store. Articles without an `id` get the next one.
    pub async fn seed(&self, articles: Vec<Value>) {
        let mut store = self.state.store.lock().await;
        for mut article in articles {
            match article.get("id").and_then(Value::as_u64) {
                Some(id) => store.next_id = store.next_id.max(id + 1),
                None => {
                    article["id"] = json!(store.next_id);
                    store.next_id += 1;
                }
            }
            store.articles.push(article);
        }
    }

    pub async fn stored(&self) -> Vec<Value> {
        self.state.store.lock().await.articles.clone()
    }

    pub async fn set_store_delay(&self, ms: u64) {
        *self.state.store_delay_ms.lock().await = ms;
    }

    /// Enqueue a response to be returned for the next request.
    pub async fn enqueue_response(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    /// Get all captured requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Number of captured requests matching `method` and `path`.
    pub async fn count(&self, method: &str, path: &str) -> usize {
        self.captured_requests()
            .await
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Get the base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Collection endpoint served by the store.
    pub fn blogs_url(&self) -> String {
        format!("{}/blogs", self.base_url())
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().await.push(CapturedRequest {
        method: method.clone(),
        path: path.clone(),
        body: body.clone(),
    });

    let canned = state.responses.lock().await.pop_front();
    let resp = match canned {
        Some(resp) => resp,
        None => {
            let delay_ms = *state.store_delay_ms.lock().await;
            let mut resp = answer_from_store(&state, &method, &path, &body).await;
            resp.delay_ms = delay_ms;
            resp
        }
    };

    if resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(resp.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(resp.body))
        .unwrap()
}

async fn answer_from_store(
    state: &MockState,
    method: &str,
    path: &str,
    body: &[u8],
) -> MockResponse {
    let mut store = state.store.lock().await;
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", ["blogs"]) => MockResponse::json(&Value::from(store.articles.clone()).to_string()),
        ("POST", ["blogs"]) => {
            let Ok(mut article) = serde_json::from_slice::<Value>(body) else {
                return MockResponse::error(400, "Invalid JSON");
            };
            article["id"] = json!(store.next_id);
            store.next_id += 1;
            store.articles.push(article.clone());
            let mut resp = MockResponse::json(&article.to_string());
            resp.status = 201;
            resp
        }
        ("GET", ["blogs", id]) => match find(&store.articles, id) {
            Some(index) => MockResponse::json(&store.articles[index].to_string()),
            None => MockResponse::error(404, "Blog not found"),
        },
        ("DELETE", ["blogs", id]) => match find(&store.articles, id) {
            Some(index) => {
                store.articles.remove(index);
                MockResponse::json("{}")
            }
            None => MockResponse::error(404, "Blog not found"),
        },
        _ => MockResponse::error(404, "Not found"),
    }
}

fn find(articles: &[Value], id: &str) -> Option<usize> {
    let id: u64 = id.parse().ok()?;
    articles
        .iter()
        .position(|a| a.get("id").and_then(Value::as_u64) == Some(id))
}
