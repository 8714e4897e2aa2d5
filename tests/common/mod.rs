//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use blogview::api::HttpBlogApi;
use blogview::sync::{QueryClient, SyncConfig};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::runtime::Handle;

use mock_backend::MockBackend;

/// Article JSON as the backend stores it.
pub fn article_json(id: u64, title: &str, categories: &[&str], date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("About {}", title),
        "content": "First paragraph.\n\nSecond paragraph.",
        "category": categories,
        "date": date,
        "coverImage": "https://example.com/cover.jpg",
    })
}

/// Query client talking to `backend` with the default staleness windows.
pub fn query_client(backend: &MockBackend) -> QueryClient {
    query_client_with(backend, SyncConfig::default())
}

pub fn query_client_with(backend: &MockBackend, config: SyncConfig) -> QueryClient {
    let api = Arc::new(HttpBlogApi::new(backend.blogs_url()));
    QueryClient::new(api, config, Handle::current())
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Poll `check` until it holds or `timeout` passes.
pub async fn wait_until<F: FnMut() -> bool>(timeout: Duration, mut check: F) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
