//! QueryClient end to end against the mock backend.

mod common;

use blogview::model::{ArticleDraft, COVER_IMAGES};
use blogview::sync::{QueryKey, QueryState, SyncConfig};
use chrono::{DateTime, Utc};
use common::mock_backend::{MockBackend, MockResponse};
use common::*;
use std::time::Duration;

#[tokio::test]
async fn concurrent_list_reads_share_one_request() {
    let backend = MockBackend::start().await;
    backend
        .seed(vec![article_json(1, "A", &["TECH"], "2026-01-01T00:00:00Z")])
        .await;
    backend.set_store_delay(100).await;
    let client = query_client(&backend);

    let (a, b, c) = tokio::join!(client.blogs(), client.blogs(), client.blogs());

    assert_eq!(a.unwrap().len(), 1);
    assert_eq!(b.unwrap().len(), 1);
    assert_eq!(c.unwrap().len(), 1);
    assert_eq!(backend.count("GET", "/blogs").await, 1);
}

#[tokio::test]
async fn fresh_list_is_served_from_cache() {
    let backend = MockBackend::start().await;
    let client = query_client(&backend);

    client.blogs().await.unwrap();
    client.blogs().await.unwrap();
    client.ensure(QueryKey::Blogs);
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(backend.count("GET", "/blogs").await, 1);
}

#[tokio::test]
async fn stale_list_serves_cache_and_refreshes() {
    let backend = MockBackend::start().await;
    backend
        .seed(vec![article_json(1, "A", &["TECH"], "2026-01-01T00:00:00Z")])
        .await;
    let client = query_client_with(
        &backend,
        SyncConfig {
            list_stale_time: Duration::ZERO,
            detail_stale_time: Duration::ZERO,
        },
    );

    assert_eq!(client.blogs().await.unwrap().len(), 1);
    backend
        .seed(vec![article_json(2, "B", &["TECH"], "2026-01-02T00:00:00Z")])
        .await;

    // Stale read answers with the old value immediately.
    assert_eq!(client.blogs().await.unwrap().len(), 1);
    let refreshed = wait_until(Duration::from_secs(2), || {
        client.blogs_state().data().map(|d| d.len()) == Some(2)
    })
    .await;
    assert!(refreshed);
    assert_eq!(backend.count("GET", "/blogs").await, 2);
}

#[tokio::test]
async fn created_article_appears_exactly_once() {
    let backend = MockBackend::start().await;
    backend
        .seed(vec![article_json(1, "Existing", &["TECH"], "2025-12-01T00:00:00Z")])
        .await;
    let client = query_client(&backend);
    assert_eq!(client.blogs().await.unwrap().len(), 1);

    let draft = ArticleDraft {
        title: "Tax Update 2026".to_string(),
        description: "What changes this year".to_string(),
        content: "New slabs.\n\nNew deductions.".to_string(),
        categories: vec!["FINANCE".to_string()],
        cover_image: String::new(),
    };
    let submitted_at = Utc::now();
    let created = client
        .create(&draft.into_new_article(submitted_at).unwrap())
        .await
        .unwrap();

    let list = client.blogs().await.unwrap();
    let matches: Vec<_> = list.iter().filter(|a| a.title == "Tax Update 2026").collect();
    assert_eq!(matches.len(), 1);
    let entry = matches[0];
    assert_eq!(entry.id, created.id);
    assert_eq!(entry.category, vec!["FINANCE".to_string()]);
    assert!(COVER_IMAGES.contains(&entry.cover_image.as_str()));

    let stamped: DateTime<Utc> = entry.date.parse().unwrap();
    assert!((stamped - submitted_at).num_milliseconds().abs() < 1000);
    assert_eq!(backend.count("GET", "/blogs").await, 2);
}

#[tokio::test]
async fn deleted_article_is_gone_from_next_list() {
    let backend = MockBackend::start().await;
    backend
        .seed(vec![
            article_json(1, "Keep", &["TECH"], "2026-01-01T00:00:00Z"),
            article_json(2, "Drop", &["TECH"], "2026-01-02T00:00:00Z"),
        ])
        .await;
    let client = query_client(&backend);
    assert_eq!(client.blogs().await.unwrap().len(), 2);
    client.blog(2).await.unwrap();

    client.delete(2).await.unwrap();

    let ids: Vec<_> = client.blogs().await.unwrap().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1]);
    // The detail entry was invalidated with the list; reading it refetches.
    assert!(client.blog(2).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn detail_invalidation_leaves_other_keys_cached() {
    let backend = MockBackend::start().await;
    backend
        .seed(vec![
            article_json(1, "One", &["TECH"], "2026-01-01T00:00:00Z"),
            article_json(2, "Two", &["TECH"], "2026-01-02T00:00:00Z"),
        ])
        .await;
    let client = query_client_with(
        &backend,
        SyncConfig {
            list_stale_time: Duration::from_secs(60),
            detail_stale_time: Duration::from_secs(60),
        },
    );
    client.blogs().await.unwrap();
    client.blog(1).await.unwrap();
    client.blog(2).await.unwrap();

    client.invalidate(QueryKey::Blog(1));
    client.blogs().await.unwrap();
    client.blog(2).await.unwrap();
    client.blog(1).await.unwrap();

    assert_eq!(backend.count("GET", "/blogs").await, 1);
    assert_eq!(backend.count("GET", "/blogs/1").await, 2);
    assert_eq!(backend.count("GET", "/blogs/2").await, 1);

    client.invalidate(QueryKey::Blogs);
    client.blog(2).await.unwrap();
    assert_eq!(backend.count("GET", "/blogs/2").await, 2);
}

#[tokio::test]
async fn failed_mutation_does_not_invalidate() {
    let backend = MockBackend::start().await;
    let client = query_client(&backend);
    client.blogs().await.unwrap();

    backend
        .enqueue_response(MockResponse::error(500, "Database offline"))
        .await;
    let err = client.delete(9).await.unwrap_err();

    assert_eq!(err.to_string(), "Database offline");
    client.blogs().await.unwrap();
    assert_eq!(backend.count("GET", "/blogs").await, 1);
}

#[tokio::test]
async fn zero_id_is_idle_and_never_requested() {
    let backend = MockBackend::start().await;
    let client = query_client(&backend);

    assert_eq!(client.blog(0).await.unwrap(), None);
    assert_eq!(client.blog_state(0), QueryState::Idle);
    client.ensure(QueryKey::Blog(0));
    client.refetch(QueryKey::Blog(0));
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn list_error_stays_until_refetch() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(503, "Maintenance"))
        .await;
    let client = query_client(&backend);

    let err = client.blogs().await.unwrap_err();
    assert_eq!(err.to_string(), "Maintenance");
    assert_eq!(client.blogs_state().error(), Some(&err));

    // Peeking does not retry on its own.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(client.blogs_state().error().is_some());
    assert_eq!(backend.count("GET", "/blogs").await, 1);

    client.refetch(QueryKey::Blogs);
    let recovered = wait_until(Duration::from_secs(2), || {
        matches!(client.blogs_state(), QueryState::Success { .. })
    })
    .await;
    assert!(recovered);
    assert_eq!(backend.count("GET", "/blogs").await, 2);
}
