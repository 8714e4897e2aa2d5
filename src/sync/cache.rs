//! Keyed cache with single-flight fetches and a staleness window.
//!
//! Each key owns at most one in-flight fetch. Fetches run as detached tasks
//! on the runtime, so a caller that stops waiting does not cancel the
//! request for anyone else.
//!
//! Entries move through:
//!
//! ```text
//! empty ──fetch──→ fresh ──stale_time──→ stale ──refetch──→ fresh
//!                    │                     │
//!                    └─────invalidate──────┴──→ invalidated ──fetch──→ fresh
//! ```
//!
//! Reads of a fresh or stale entry answer from cache (stale ones trigger a
//! background refetch). Reads of an empty or invalidated entry wait for the
//! network.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::api::ApiError;
use crate::sync::state::QueryState;

pub type FetchFuture<V> = Pin<Box<dyn Future<Output = Result<V, ApiError>> + Send>>;
pub type Fetcher<K, V> = Arc<dyn Fn(K) -> FetchFuture<V> + Send + Sync>;
/// Called after any entry settles (success or failure).
pub type ChangeListener = Arc<dyn Fn() + Send + Sync>;

type Reply<V> = Result<Arc<V>, ApiError>;

struct Waiter<V> {
    generation: u64,
    tx: oneshot::Sender<Reply<V>>,
}

struct Entry<V> {
    data: Option<Arc<V>>,
    error: Option<ApiError>,
    updated_at: Option<Instant>,
    /// Bumped on every invalidation.
    generation: u64,
    /// Generation the cached data was fetched under.
    data_generation: u64,
    /// Generation of the running fetch, if any.
    in_flight: Option<u64>,
    waiters: Vec<Waiter<V>>,
}

impl<V> Default for Entry<V> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            updated_at: None,
            generation: 0,
            data_generation: 0,
            in_flight: None,
            waiters: Vec::new(),
        }
    }
}

enum Freshness<V> {
    Fresh(Arc<V>),
    Stale(Arc<V>),
    /// No data, or data predating an invalidation.
    Expired,
}

impl<V> Entry<V> {
    fn freshness(&self, stale_time: Duration) -> Freshness<V> {
        let Some(data) = &self.data else {
            return Freshness::Expired;
        };
        if self.data_generation != self.generation {
            return Freshness::Expired;
        }
        let age = self
            .updated_at
            .map(|at| at.elapsed())
            .unwrap_or(Duration::MAX);
        if age < stale_time {
            Freshness::Fresh(Arc::clone(data))
        } else {
            Freshness::Stale(Arc::clone(data))
        }
    }

    fn state(&self) -> QueryState<V> {
        if let Some(data) = &self.data {
            return QueryState::Success {
                data: Arc::clone(data),
                is_fetching: self.in_flight.is_some(),
            };
        }
        if self.in_flight.is_some() {
            return QueryState::Loading;
        }
        match &self.error {
            Some(err) => QueryState::Error(err.clone()),
            None => QueryState::Loading,
        }
    }
}

struct Inner<K, V> {
    entries: Mutex<HashMap<K, Entry<V>>>,
    fetcher: Fetcher<K, V>,
    stale_time: Duration,
    runtime: Handle,
    listener: Mutex<Option<ChangeListener>>,
}

/// Cache of `V` values keyed by `K`, filled by a shared fetcher.
pub struct KeyedCache<K, V> {
    inner: Arc<Inner<K, V>>,
}

impl<K, V> Clone for KeyedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> KeyedCache<K, V>
where
    K: Hash + Eq + Clone + Send + std::fmt::Debug + 'static,
    V: Send + Sync + 'static,
{
    pub fn new(fetcher: Fetcher<K, V>, stale_time: Duration, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: Mutex::new(HashMap::new()),
                fetcher,
                stale_time,
                runtime,
                listener: Mutex::new(None),
            }),
        }
    }

    pub fn set_listener(&self, listener: ChangeListener) {
        *self.inner.listener.lock() = Some(listener);
    }

    /// Read `key`, fetching when there is no valid data.
    ///
    /// Stale data is returned immediately while a background refetch runs.
    /// Concurrent callers share one request.
    pub async fn get(&self, key: K) -> Result<Arc<V>, ApiError> {
        let receiver = {
            let mut entries = self.inner.entries.lock();
            let entry = entries.entry(key.clone()).or_default();
            match entry.freshness(self.inner.stale_time) {
                Freshness::Fresh(data) => return Ok(data),
                Freshness::Stale(data) => {
                    if entry.in_flight.is_none() {
                        spawn_fetch(&self.inner, entry, key);
                    }
                    return Ok(data);
                }
                Freshness::Expired => {
                    let (tx, rx) = oneshot::channel();
                    entry.waiters.push(Waiter {
                        generation: entry.generation,
                        tx,
                    });
                    if entry.in_flight.is_none() {
                        spawn_fetch(&self.inner, entry, key);
                    }
                    rx
                }
            }
        };

        receiver.await.unwrap_or(Err(ApiError::Cancelled))
    }

    /// Current state of `key` without waiting.
    ///
    /// Starts a fetch when the entry has no valid data and has not failed.
    /// Time-stale data is returned as is; see [`KeyedCache::ensure`].
    pub fn peek(&self, key: &K) -> QueryState<V> {
        let mut entries = self.inner.entries.lock();
        let entry = entries.entry(key.clone()).or_default();
        let expired = matches!(
            entry.freshness(self.inner.stale_time),
            Freshness::Expired
        );
        if expired && entry.in_flight.is_none() && entry.error.is_none() {
            spawn_fetch(&self.inner, entry, key.clone());
        }
        entry.state()
    }

    /// Start a background fetch if `key` is missing, invalidated or stale.
    pub fn ensure(&self, key: &K) {
        let mut entries = self.inner.entries.lock();
        let entry = entries.entry(key.clone()).or_default();
        if entry.in_flight.is_some() {
            return;
        }
        if !matches!(
            entry.freshness(self.inner.stale_time),
            Freshness::Fresh(_)
        ) {
            spawn_fetch(&self.inner, entry, key.clone());
        }
    }

    /// Mark `key` invalid and fetch it again in the background.
    pub fn refetch(&self, key: &K) {
        let mut entries = self.inner.entries.lock();
        let entry = entries.entry(key.clone()).or_default();
        entry.generation += 1;
        entry.error = None;
        if entry.in_flight.is_none() {
            spawn_fetch(&self.inner, entry, key.clone());
        }
    }

    /// Mark `key` invalid. The next read waits for fresh data.
    pub fn invalidate(&self, key: &K) {
        if let Some(entry) = self.inner.entries.lock().get_mut(key) {
            entry.generation += 1;
            entry.error = None;
        }
    }

    /// Invalidate every cached key matching `pred`.
    pub fn invalidate_where(&self, pred: impl Fn(&K) -> bool) {
        for (_, entry) in self
            .inner
            .entries
            .lock()
            .iter_mut()
            .filter(|(key, _)| pred(key))
        {
            entry.generation += 1;
            entry.error = None;
        }
    }

    #[cfg(test)]
    pub fn is_fetching(&self, key: &K) -> bool {
        self.inner
            .entries
            .lock()
            .get(key)
            .is_some_and(|entry| entry.in_flight.is_some())
    }
}

fn spawn_fetch<K, V>(inner: &Arc<Inner<K, V>>, entry: &mut Entry<V>, key: K)
where
    K: Hash + Eq + Clone + Send + std::fmt::Debug + 'static,
    V: Send + Sync + 'static,
{
    let generation = entry.generation;
    entry.in_flight = Some(generation);
    tracing::debug!(key = ?key, generation, "Fetch started");

    let future = (inner.fetcher)(key.clone());
    let task_inner = Arc::clone(inner);
    inner.runtime.spawn(async move {
        let result = future.await;
        settle(&task_inner, key, generation, result);
    });
}

fn settle<K, V>(inner: &Arc<Inner<K, V>>, key: K, generation: u64, result: Result<V, ApiError>)
where
    K: Hash + Eq + Clone + Send + std::fmt::Debug + 'static,
    V: Send + Sync + 'static,
{
    let result = result.map(Arc::new);
    {
        let mut entries = inner.entries.lock();
        let Some(entry) = entries.get_mut(&key) else {
            return;
        };
        entry.in_flight = None;

        match &result {
            Ok(data) => {
                entry.data = Some(Arc::clone(data));
                entry.error = None;
                entry.updated_at = Some(Instant::now());
                entry.data_generation = generation;
            }
            Err(err) => {
                tracing::warn!(key = ?key, error = %err, "Fetch failed");
                entry.error = Some(err.clone());
            }
        }

        // Waiters that arrived after an invalidation need a newer response.
        let (ready, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut entry.waiters)
            .into_iter()
            .partition(|waiter| waiter.generation <= generation);
        for waiter in ready {
            let _ = waiter.tx.send(result.clone());
        }
        entry.waiters = pending;

        if !entry.waiters.is_empty() {
            spawn_fetch(inner, entry, key);
        }
    }

    let listener = inner.listener.lock().clone();
    if let Some(listener) = listener {
        listener();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_cache(
        stale_time: Duration,
        delay: Duration,
    ) -> (KeyedCache<u64, u64>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let fetcher: Fetcher<u64, u64> = Arc::new(move |key: u64| -> FetchFuture<u64> {
            let counter = Arc::clone(&counter);
            Box::pin(async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) as u64 + 1;
                tokio::time::sleep(delay).await;
                Ok::<u64, ApiError>(key * 100 + n)
            })
        });
        (
            KeyedCache::new(fetcher, stale_time, Handle::current()),
            calls,
        )
    }

    #[tokio::test]
    async fn concurrent_reads_share_one_fetch() {
        let (cache, calls) = counting_cache(Duration::from_secs(60), Duration::from_millis(50));
        let (a, b, c) = tokio::join!(cache.get(1), cache.get(1), cache.get(1));
        assert_eq!(*a.unwrap(), 101);
        assert_eq!(*b.unwrap(), 101);
        assert_eq!(*c.unwrap(), 101);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn different_keys_fetch_independently() {
        let (cache, calls) = counting_cache(Duration::from_secs(60), Duration::from_millis(10));
        let (a, b) = tokio::join!(cache.get(1), cache.get(2));
        assert_eq!(*a.unwrap(), 101);
        assert_eq!(*b.unwrap(), 202);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn fresh_data_is_served_from_cache() {
        let (cache, calls) = counting_cache(Duration::from_secs(60), Duration::ZERO);
        cache.get(1).await.unwrap();
        assert_eq!(*cache.get(1).await.unwrap(), 101);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stale_data_is_served_while_refetching() {
        let (cache, calls) = counting_cache(Duration::ZERO, Duration::from_millis(20));
        assert_eq!(*cache.get(1).await.unwrap(), 101);

        // Stale: old value now, refresh in the background.
        assert_eq!(*cache.get(1).await.unwrap(), 101);
        assert!(cache.is_fetching(&1));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(matches!(
            cache.peek(&1),
            QueryState::Success { ref data, is_fetching: false } if **data == 102
        ));
    }

    #[tokio::test]
    async fn invalidated_read_waits_for_new_data() {
        let (cache, calls) = counting_cache(Duration::from_secs(60), Duration::ZERO);
        cache.get(1).await.unwrap();
        cache.invalidate(&1);
        assert_eq!(*cache.get(1).await.unwrap(), 102);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_where_only_touches_matching_keys() {
        let (cache, calls) = counting_cache(Duration::from_secs(60), Duration::ZERO);
        cache.get(1).await.unwrap();
        cache.get(2).await.unwrap();

        cache.invalidate_where(|key| *key == 2);
        assert_eq!(*cache.get(1).await.unwrap(), 101);
        assert_eq!(*cache.get(2).await.unwrap(), 203);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn invalidation_during_flight_triggers_follow_up() {
        let (cache, calls) = counting_cache(Duration::from_secs(60), Duration::from_millis(50));
        let early = {
            let cache = cache.clone();
            tokio::spawn(async move { cache.get(1).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        cache.invalidate(&1);
        let late = cache.get(1).await.unwrap();

        assert_eq!(*early.await.unwrap().unwrap(), 101);
        assert_eq!(*late, 102);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_fetch_reaches_every_waiter_and_is_not_retried_by_peek() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let fetcher: Fetcher<u64, u64> = Arc::new(move |_: u64| -> FetchFuture<u64> {
            let counter = Arc::clone(&counter);
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                Err::<u64, ApiError>(ApiError::Network("refused".to_string()))
            })
        });
        let cache = KeyedCache::new(fetcher, Duration::from_secs(60), Handle::current());

        let (a, b) = tokio::join!(cache.get(1), cache.get(1));
        assert_eq!(a.unwrap_err(), ApiError::Network("refused".to_string()));
        assert!(b.is_err());

        assert!(matches!(cache.peek(&1), QueryState::Error(_)));
        assert!(matches!(cache.peek(&1), QueryState::Error(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        cache.refetch(&1);
        assert!(matches!(cache.peek(&1), QueryState::Loading));
    }

    #[tokio::test]
    async fn peek_starts_fetch_and_notifies_listener() {
        let (cache, calls) = counting_cache(Duration::from_secs(60), Duration::from_millis(10));
        let notified = Arc::new(AtomicUsize::new(0));
        let flag = Arc::clone(&notified);
        cache.set_listener(Arc::new(move || {
            flag.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(matches!(cache.peek(&3), QueryState::Loading));
        assert!(matches!(cache.peek(&3), QueryState::Loading));
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(matches!(cache.peek(&3), QueryState::Success { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn ensure_refreshes_only_stale_entries() {
        let (cache, calls) = counting_cache(Duration::from_secs(60), Duration::ZERO);
        cache.get(1).await.unwrap();
        cache.ensure(&1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let (stale, stale_calls) = counting_cache(Duration::ZERO, Duration::ZERO);
        stale.get(1).await.unwrap();
        stale.ensure(&1);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(stale_calls.load(Ordering::SeqCst), 2);
    }
}
