//! Data-access hooks for records: list, create, update.
//!
//! All three share one cache entry keyed by the collection name, so any
//! mutation invalidates the whole list.

use std::future::Future;

use contracts::domain::a001_young_spec::metadata::ENTITY;
use contracts::domain::a001_young_spec::YoungSpecRecord;
use contracts::shared::NetworkError;
use leptos::prelude::*;
use web_sys::AbortSignal;

use super::api;
use crate::shared::query::{
    invalidate_on_settle, optimistic_append, use_query, use_query_client, MutationTracker,
    QueryClient, QueryHandle, QueryStore,
};

pub const RECORDS_KEY: &str = ENTITY.collection_name;

/// Create policy: optimistic append, request, then invalidate on settle
pub async fn create_with_cache<S, F, Fut>(
    store: &S,
    record: YoungSpecRecord,
    request: F,
) -> Result<YoungSpecRecord, NetworkError>
where
    S: QueryStore,
    F: FnOnce(YoungSpecRecord) -> Fut,
    Fut: Future<Output = Result<YoungSpecRecord, NetworkError>>,
{
    let payload = record.without_id();
    optimistic_append(store, RECORDS_KEY, serde_json::to_value(&payload)?);
    invalidate_on_settle(store, RECORDS_KEY, request(payload)).await
}

/// Update policy: request, then invalidate on settle
pub async fn update_with_cache<S, F, Fut>(
    store: &S,
    record: YoungSpecRecord,
    request: F,
) -> Result<YoungSpecRecord, NetworkError>
where
    S: QueryStore,
    F: FnOnce(YoungSpecRecord) -> Fut,
    Fut: Future<Output = Result<YoungSpecRecord, NetworkError>>,
{
    invalidate_on_settle(store, RECORDS_KEY, request(record)).await
}

/// List query
pub fn use_records() -> QueryHandle<Vec<YoungSpecRecord>> {
    use_query(RECORDS_KEY, api::fetch_records)
}

#[derive(Clone, Copy)]
pub struct CreateRecord {
    client: QueryClient,
    tracker: MutationTracker,
}

impl CreateRecord {
    pub fn is_pending(&self) -> Signal<bool> {
        self.tracker.is_pending()
    }

    pub async fn mutate_async(
        self,
        record: YoungSpecRecord,
        signal: Option<AbortSignal>,
    ) -> Result<YoungSpecRecord, NetworkError> {
        let client = self.client;
        self.tracker
            .track(create_with_cache(&client, record, |payload| async move {
                api::create_record(payload, signal.as_ref()).await
            }))
            .await
    }
}

pub fn use_create_record() -> CreateRecord {
    CreateRecord {
        client: use_query_client(),
        tracker: MutationTracker::new(),
    }
}

#[derive(Clone, Copy)]
pub struct UpdateRecord {
    client: QueryClient,
    tracker: MutationTracker,
}

impl UpdateRecord {
    pub fn is_pending(&self) -> Signal<bool> {
        self.tracker.is_pending()
    }

    pub async fn mutate_async(
        self,
        record: YoungSpecRecord,
        signal: Option<AbortSignal>,
    ) -> Result<YoungSpecRecord, NetworkError> {
        let client = self.client;
        self.tracker
            .track(update_with_cache(&client, record, |record| async move {
                api::update_record(record, signal.as_ref()).await
            }))
            .await
    }
}

pub fn use_update_record() -> UpdateRecord {
    UpdateRecord {
        client: use_query_client(),
        tracker: MutationTracker::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::mutation::tests::{Event, RecordingStore};
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    fn valid_record() -> YoungSpecRecord {
        YoungSpecRecord {
            f_pers_young_spec_id: Some(42),
            insert_user: "ivanov".into(),
            org_employee: "x".into(),
            rep_beg_period: "2024-01-01".into(),
            update_user: "y".into(),
            ..Default::default()
        }
    }

    fn server_error() -> NetworkError {
        NetworkError::Status {
            status: 500,
            context: "test",
        }
    }

    #[test]
    fn test_create_appends_then_invalidates_on_success() {
        let store = RecordingStore::default();
        store.cache.borrow_mut().set_query_data(RECORDS_KEY, json!([]));

        let result = block_on(create_with_cache(&store, valid_record(), |payload| {
            store.log(Event::Request);
            assert_eq!(payload.id(), None);
            async move { Ok(YoungSpecRecord { f_pers_young_spec_id: Some(1), ..payload }) }
        }));

        assert_eq!(result.map(|r| r.id()), Ok(Some(1)));
        let events = store.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], Event::Write(v) if v.as_array().map(Vec::len) == Some(1)));
        assert_eq!(events[1], Event::Request);
        assert_eq!(events[2], Event::Invalidate);
    }

    #[test]
    fn test_create_invalidates_on_failure() {
        let store = RecordingStore::default();
        let result = block_on(create_with_cache(&store, valid_record(), |_| async {
            Err(server_error())
        }));

        assert_eq!(result, Err(server_error()));
        let events = store.events();
        let writes = events.iter().filter(|e| matches!(e, Event::Write(_))).count();
        let invalidations = events.iter().filter(|e| **e == Event::Invalidate).count();
        assert_eq!((writes, invalidations), (1, 1));
        assert_eq!(events.last(), Some(&Event::Invalidate));
    }

    #[test]
    fn test_optimistic_row_has_no_identifier() {
        let store = RecordingStore::default();
        let _ = block_on(create_with_cache(&store, valid_record(), |_| async {
            Err(NetworkError::Aborted)
        }));
        let cached = store.cache.borrow().query_data(RECORDS_KEY).cloned().unwrap();
        assert!(cached[0].get("f_pers_young_spec_id").is_none());
        assert_eq!(cached[0]["insert_user"], "ivanov");
    }

    #[test]
    fn test_update_targets_identifier_and_invalidates_once() {
        let store = RecordingStore::default();
        let called_path = RefCell::new(String::new());

        let result = block_on(update_with_cache(&store, valid_record(), |record| {
            *called_path.borrow_mut() = api::record_path(record.id().unwrap());
            store.log(Event::Request);
            async move { Err::<YoungSpecRecord, _>(server_error()) }
        }));

        assert!(result.is_err());
        assert!(called_path.borrow().contains("42"));
        assert_eq!(store.events(), vec![Event::Request, Event::Invalidate]);
    }
}
