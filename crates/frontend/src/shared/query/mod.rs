//! In-memory query cache keyed by collection name, with the reactive
//! hooks that read and mutate it.

pub mod cache;
pub mod client;
pub mod mutation;

pub use cache::{CacheEntry, QueryCache, QueryStatus};
pub use client::{use_query, use_query_client, MutationTracker, QueryClient, QueryHandle};
pub use mutation::{append_item, invalidate_on_settle, optimistic_append, QueryStore};
