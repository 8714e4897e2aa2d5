use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::{ApiError, BlogApi};
use crate::config::Config;
use crate::model::{Article, ArticleId, NewArticle};
use crate::sync::cache::{ChangeListener, FetchFuture, Fetcher, KeyedCache};
use crate::sync::state::QueryState;

/// Cache keys. `Blogs` is a prefix of every `Blog(id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Blogs,
    Blog(ArticleId),
}

impl QueryKey {
    /// True if invalidating `self` also invalidates `other`.
    pub fn covers(&self, other: &QueryKey) -> bool {
        match (self, other) {
            (QueryKey::Blogs, _) => true,
            (QueryKey::Blog(a), QueryKey::Blog(b)) => a == b,
            (QueryKey::Blog(_), QueryKey::Blogs) => false,
        }
    }
}

/// Staleness windows for each kind of read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    pub list_stale_time: Duration,
    pub detail_stale_time: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            list_stale_time: Duration::from_secs(60),
            detail_stale_time: Duration::ZERO,
        }
    }
}

impl From<&Config> for SyncConfig {
    fn from(config: &Config) -> Self {
        Self {
            list_stale_time: Duration::from_secs(config.cache.list_stale_seconds),
            detail_stale_time: Duration::from_secs(config.cache.detail_stale_seconds),
        }
    }
}

/// Cached, de-duplicated access to the blog API.
///
/// Mutations invalidate the `Blogs` prefix once their request succeeds, so
/// the next list read goes back to the network.
#[derive(Clone)]
pub struct QueryClient {
    api: Arc<dyn BlogApi>,
    lists: KeyedCache<QueryKey, Vec<Article>>,
    details: KeyedCache<ArticleId, Article>,
}

impl QueryClient {
    pub fn new(api: Arc<dyn BlogApi>, config: SyncConfig, runtime: Handle) -> Self {
        let list_api = Arc::clone(&api);
        let list_fetcher: Fetcher<QueryKey, Vec<Article>> =
            Arc::new(move |_key: QueryKey| -> FetchFuture<Vec<Article>> {
                let api = Arc::clone(&list_api);
                Box::pin(async move { api.list().await })
            });

        let detail_api = Arc::clone(&api);
        let detail_fetcher: Fetcher<ArticleId, Article> =
            Arc::new(move |id: ArticleId| -> FetchFuture<Article> {
                let api = Arc::clone(&detail_api);
                Box::pin(async move { api.get(id).await })
            });

        Self {
            api,
            lists: KeyedCache::new(list_fetcher, config.list_stale_time, runtime.clone()),
            details: KeyedCache::new(detail_fetcher, config.detail_stale_time, runtime),
        }
    }

    /// Called whenever a read settles.
    pub fn set_listener(&self, listener: ChangeListener) {
        self.lists.set_listener(Arc::clone(&listener));
        self.details.set_listener(listener);
    }

    pub async fn blogs(&self) -> Result<Arc<Vec<Article>>, ApiError> {
        self.lists.get(QueryKey::Blogs).await
    }

    /// Detail read. `None` for id zero, which never touches the network.
    pub async fn blog(&self, id: ArticleId) -> Result<Option<Arc<Article>>, ApiError> {
        if id == 0 {
            return Ok(None);
        }
        self.details.get(id).await.map(Some)
    }

    pub fn blogs_state(&self) -> QueryState<Vec<Article>> {
        self.lists.peek(&QueryKey::Blogs)
    }

    pub fn blog_state(&self, id: ArticleId) -> QueryState<Article> {
        if id == 0 {
            return QueryState::Idle;
        }
        self.details.peek(&id)
    }

    /// Refresh `key` in the background if it is stale or missing.
    pub fn ensure(&self, key: QueryKey) {
        match key {
            QueryKey::Blogs => self.lists.ensure(&key),
            QueryKey::Blog(0) => {}
            QueryKey::Blog(id) => self.details.ensure(&id),
        }
    }

    /// Caller-triggered retry.
    pub fn refetch(&self, key: QueryKey) {
        match key {
            QueryKey::Blogs => self.lists.refetch(&key),
            QueryKey::Blog(0) => {}
            QueryKey::Blog(id) => self.details.refetch(&id),
        }
    }

    /// Invalidate `key` and every key it covers.
    pub fn invalidate(&self, key: QueryKey) {
        tracing::debug!(key = ?key, "Invalidating");
        if key.covers(&QueryKey::Blogs) {
            self.lists.invalidate(&QueryKey::Blogs);
        }
        self.details
            .invalidate_where(|id| key.covers(&QueryKey::Blog(*id)));
    }

    pub async fn create(&self, article: &NewArticle) -> Result<Article, ApiError> {
        let created = self.api.create(article).await?;
        tracing::info!(id = created.id, title = %created.title, "Article created");
        self.invalidate(QueryKey::Blogs);
        Ok(created)
    }

    pub async fn delete(&self, id: ArticleId) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        tracing::info!(id, "Article deleted");
        self.invalidate(QueryKey::Blogs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blogs_key_covers_details() {
        assert!(QueryKey::Blogs.covers(&QueryKey::Blog(3)));
        assert!(QueryKey::Blogs.covers(&QueryKey::Blogs));
        assert!(QueryKey::Blog(3).covers(&QueryKey::Blog(3)));
        assert!(!QueryKey::Blog(3).covers(&QueryKey::Blog(4)));
        assert!(!QueryKey::Blog(3).covers(&QueryKey::Blogs));
    }

    #[test]
    fn default_windows() {
        let config = SyncConfig::default();
        assert_eq!(config.list_stale_time, Duration::from_secs(60));
        assert_eq!(config.detail_stale_time, Duration::ZERO);
    }
}
