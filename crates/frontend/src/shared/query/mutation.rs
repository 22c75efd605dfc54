//! Cache side of a mutation: the optimistic write before the request and
//! the invalidation after it settles.

use std::future::Future;

use contracts::shared::NetworkError;
use serde_json::Value;

use super::cache::QueryCache;

/// Cache operations a mutation needs
pub trait QueryStore {
    fn update_query_data(&self, key: &str, updater: impl FnOnce(Option<Value>) -> Value);
    fn invalidate_queries(&self, key: &str);
}

impl QueryStore for std::cell::RefCell<QueryCache> {
    fn update_query_data(&self, key: &str, updater: impl FnOnce(Option<Value>) -> Value) {
        self.borrow_mut().update_query_data(key, updater);
    }

    fn invalidate_queries(&self, key: &str) {
        self.borrow_mut().invalidate(key);
    }
}

/// Append to a cached list. Anything that is not a list is replaced by an
/// empty list first.
pub fn append_item(previous: Option<Value>, item: Value) -> Value {
    let mut items = match previous {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };
    items.push(item);
    Value::Array(items)
}

pub fn optimistic_append<S: QueryStore>(store: &S, key: &str, item: Value) {
    store.update_query_data(key, move |previous| append_item(previous, item));
}

/// Await `request`, then invalidate `key` whatever the outcome
pub async fn invalidate_on_settle<S, T, Fut>(
    store: &S,
    key: &str,
    request: Fut,
) -> Result<T, NetworkError>
where
    S: QueryStore,
    Fut: Future<Output = Result<T, NetworkError>>,
{
    let result = request.await;
    store.invalidate_queries(key);
    result
}
