use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// No data has ever arrived
    #[default]
    Pending,
    Success,
    Error,
}

/// State of one cached collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheEntry {
    pub data: Option<Value>,
    pub status: QueryStatus,
    pub is_fetching: bool,
    pub is_invalidated: bool,
    pub error: Option<String>,
    /// Bumped on every invalidation. Fetch results carry the epoch they started in.
    pub epoch: u64,
}

impl CacheEntry {
    /// First load: nothing to show yet and a fetch is running
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Pending && self.is_fetching
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}

/// Explicit store for fetched collections.
///
/// Writes never trigger fetches by themselves; observers watch
/// [`QueryCache::epoch`] and refetch when it moves.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<String, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn query_data(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).and_then(|e| e.data.as_ref())
    }

    pub fn epoch(&self, key: &str) -> u64 {
        self.entries.get(key).map(|e| e.epoch).unwrap_or(0)
    }

    fn entry_mut(&mut self, key: &str) -> &mut CacheEntry {
        self.entries.entry(key.to_string()).or_default()
    }

    /// Replace the cached value
    pub fn set_query_data(&mut self, key: &str, value: Value) {
        let entry = self.entry_mut(key);
        entry.data = Some(value);
        entry.status = QueryStatus::Success;
    }

    /// Optimistic write: derive the new value from the current one
    pub fn update_query_data(&mut self, key: &str, updater: impl FnOnce(Option<Value>) -> Value) {
        let entry = self.entry_mut(key);
        let next = updater(entry.data.take());
        entry.data = Some(next);
        entry.status = QueryStatus::Success;
    }

    /// Mark the entry stale and force observers to refetch
    pub fn invalidate(&mut self, key: &str) {
        let entry = self.entry_mut(key);
        entry.is_invalidated = true;
        entry.epoch += 1;
    }

    /// Returns the epoch the fetch belongs to
    pub fn begin_fetch(&mut self, key: &str) -> u64 {
        let entry = self.entry_mut(key);
        entry.is_fetching = true;
        entry.epoch
    }

    /// Apply a fetch result. Results from an epoch that has since been
    /// invalidated are dropped; returns whether the result was applied.
    pub fn finish_fetch(&mut self, key: &str, epoch: u64, result: Result<Value, String>) -> bool {
        let entry = self.entry_mut(key);
        if entry.epoch != epoch {
            return false;
        }
        entry.is_fetching = false;
        match result {
            Ok(value) => {
                entry.data = Some(value);
                entry.status = QueryStatus::Success;
                entry.error = None;
                entry.is_invalidated = false;
            }
            Err(message) => {
                entry.status = QueryStatus::Error;
                entry.error = Some(message);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KEY: &str = "f_pers_young_spec";

    #[test]
    fn test_first_load_success() {
        let mut cache = QueryCache::new();
        assert!(cache.entry(KEY).is_none());

        let epoch = cache.begin_fetch(KEY);
        assert!(cache.entry(KEY).unwrap().is_loading());

        assert!(cache.finish_fetch(KEY, epoch, Ok(json!([{"insert_user": "a"}]))));
        let entry = cache.entry(KEY).unwrap();
        assert!(!entry.is_loading());
        assert!(!entry.is_fetching);
        assert_eq!(entry.status, QueryStatus::Success);
        assert_eq!(cache.query_data(KEY), Some(&json!([{"insert_user": "a"}])));
    }

    #[test]
    fn test_first_load_error_leaves_no_data() {
        let mut cache = QueryCache::new();
        let epoch = cache.begin_fetch(KEY);
        cache.finish_fetch(KEY, epoch, Err("HTTP 500".into()));

        let entry = cache.entry(KEY).unwrap();
        assert!(entry.is_error());
        assert!(!entry.is_fetching);
        assert!(!entry.is_loading());
        assert_eq!(entry.error.as_deref(), Some("HTTP 500"));
        assert!(cache.query_data(KEY).is_none());
    }

    #[test]
    fn test_error_after_success_keeps_previous_data() {
        let mut cache = QueryCache::new();
        let epoch = cache.begin_fetch(KEY);
        cache.finish_fetch(KEY, epoch, Ok(json!([1])));
        cache.invalidate(KEY);
        let epoch = cache.begin_fetch(KEY);
        cache.finish_fetch(KEY, epoch, Err("HTTP 502".into()));

        assert!(cache.entry(KEY).unwrap().is_error());
        assert_eq!(cache.query_data(KEY), Some(&json!([1])));
    }

    #[test]
    fn test_invalidate_bumps_epoch_and_drops_stale_results() {
        let mut cache = QueryCache::new();
        let first = cache.begin_fetch(KEY);
        cache.invalidate(KEY);
        assert_eq!(cache.epoch(KEY), first + 1);
        assert!(cache.entry(KEY).unwrap().is_invalidated);

        let second = cache.begin_fetch(KEY);
        assert!(!cache.finish_fetch(KEY, first, Ok(json!(["old"]))));
        assert!(cache.entry(KEY).unwrap().is_fetching);
        assert!(cache.query_data(KEY).is_none());

        assert!(cache.finish_fetch(KEY, second, Ok(json!(["new"]))));
        let entry = cache.entry(KEY).unwrap();
        assert!(!entry.is_invalidated);
        assert_eq!(entry.data, Some(json!(["new"])));
    }

    #[test]
    fn test_update_query_data() {
        let mut cache = QueryCache::new();
        cache.set_query_data(KEY, json!([1]));
        cache.update_query_data(KEY, |prev| {
            assert_eq!(prev, Some(json!([1])));
            json!([1, 2])
        });
        assert_eq!(cache.query_data(KEY), Some(&json!([1, 2])));
        assert_eq!(cache.epoch(KEY), 0);
    }
}
