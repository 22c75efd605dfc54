use std::future::Future;

use contracts::shared::NetworkError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::cache::{CacheEntry, QueryCache};
use super::mutation::QueryStore;

/// Reactive handle to the shared [`QueryCache`], provided via context
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: RwSignal<QueryCache>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: RwSignal::new(QueryCache::new()),
        }
    }

    /// Tracked snapshot of an entry (default state if never fetched)
    pub fn entry(&self, key: &str) -> CacheEntry {
        self.cache.with(|c| c.entry(key).cloned().unwrap_or_default())
    }

    pub fn epoch(&self, key: &str) -> u64 {
        self.cache.with(|c| c.epoch(key))
    }

    /// Tracked read of the cached value, decoded as `T`. A value of the wrong
    /// shape reads as `None`.
    pub fn query_data<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.cache.with(|c| {
            c.query_data(key)
                .and_then(|v| serde_json::from_value(v.clone()).ok())
        })
    }

    fn begin_fetch(&self, key: &str) -> u64 {
        self.cache
            .try_update(|c| c.begin_fetch(key))
            .unwrap_or_default()
    }

    fn finish_fetch(&self, key: &str, epoch: u64, result: Result<Value, String>) {
        let applied = self
            .cache
            .try_update(|c| c.finish_fetch(key, epoch, result))
            .unwrap_or(false);
        if !applied {
            log::debug!("query {}: dropped result of stale epoch {}", key, epoch);
        }
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryStore for QueryClient {
    fn update_query_data(&self, key: &str, updater: impl FnOnce(Option<Value>) -> Value) {
        self.cache.try_update(|c| c.update_query_data(key, updater));
    }

    fn invalidate_queries(&self, key: &str) {
        log::debug!("query {}: invalidated", key);
        self.cache.try_update(|c| c.invalidate(key));
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided in context")
}

/// Read side of a query bound to one cache key
pub struct QueryHandle<T: Send + Sync + 'static> {
    pub key: &'static str,
    pub data: Signal<Option<T>>,
    pub is_loading: Signal<bool>,
    pub is_fetching: Signal<bool>,
    pub is_error: Signal<bool>,
    pub error: Signal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryHandle<T> {}

/// Attach `fetcher` to `key`: fetch on mount and again after every
/// invalidation of the key. There is no refetch on window focus and no retry.
pub fn use_query<T, F, Fut>(key: &'static str, fetcher: F) -> QueryHandle<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, NetworkError>> + 'static,
{
    let client = use_query_client();
    // Memo so that only epoch changes (not fetch flags) re-run the effect
    let epoch = Memo::new(move |_| client.epoch(key));

    Effect::new(move |_| {
        epoch.track();
        let started = client.begin_fetch(key);
        let request = fetcher();
        spawn_local(async move {
            log::debug!("query {}: fetching (epoch {})", key, started);
            let result = match request.await {
                Ok(data) => serde_json::to_value(&data).map_err(|e| e.to_string()),
                Err(e) => {
                    log::error!("query {}: {}", key, e);
                    Err(e.to_string())
                }
            };
            client.finish_fetch(key, started, result);
        });
    });

    QueryHandle {
        key,
        data: Signal::derive(move || client.query_data::<T>(key)),
        is_loading: Signal::derive(move || client.entry(key).is_loading()),
        is_fetching: Signal::derive(move || client.entry(key).is_fetching),
        is_error: Signal::derive(move || client.entry(key).is_error()),
        error: Signal::derive(move || client.entry(key).error),
    }
}

/// Counts in-flight mutations of one kind
#[derive(Clone, Copy)]
pub struct MutationTracker {
    in_flight: RwSignal<usize>,
}

impl MutationTracker {
    pub fn new() -> Self {
        Self {
            in_flight: RwSignal::new(0),
        }
    }

    pub fn is_pending(&self) -> Signal<bool> {
        let in_flight = self.in_flight;
        Signal::derive(move || in_flight.get() > 0)
    }

    pub async fn track<T, Fut>(&self, request: Fut) -> Result<T, NetworkError>
    where
        Fut: Future<Output = Result<T, NetworkError>>,
    {
        self.in_flight.update(|n| *n += 1);
        let result = request.await;
        self.in_flight.try_update(|n| *n = n.saturating_sub(1));
        result
    }
}

impl Default for MutationTracker {
    fn default() -> Self {
        Self::new()
    }
}
