use contracts::domain::a001_young_spec::metadata::ENTITY;
use contracts::domain::a001_young_spec::YoungSpecRecord;
use contracts::shared::NetworkError;
use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::shared::api_utils::{api_url, ensure_ok, map_send_error, read_json};

/// `/f_pers_young_spec`
pub fn collection_path() -> String {
    format!("/{}", ENTITY.collection_name)
}

/// `/f_pers_young_spec/{id}/`
pub fn record_path(id: i64) -> String {
    format!("/{}/{}/", ENTITY.collection_name, id)
}

/// Fetch all records
pub async fn fetch_records() -> Result<Vec<YoungSpecRecord>, NetworkError> {
    let response = Request::get(&api_url(&collection_path()))
        .send()
        .await
        .map_err(map_send_error)?;

    ensure_ok(&response, "Failed to fetch records")?;
    read_json(response).await
}

/// Create a record; the identifier is never sent
pub async fn create_record(
    record: YoungSpecRecord,
    signal: Option<&AbortSignal>,
) -> Result<YoungSpecRecord, NetworkError> {
    let url = api_url(&format!("{}/", collection_path()));
    let response = Request::post(&url)
        .abort_signal(signal)
        .json(&record.without_id())
        .map_err(map_send_error)?
        .send()
        .await
        .map_err(map_send_error)?;

    ensure_ok(&response, "Failed to create record")?;
    read_json(response).await
}

/// Update a record by identifier. The body carries every field, identifier included.
pub async fn update_record(
    record: YoungSpecRecord,
    signal: Option<&AbortSignal>,
) -> Result<YoungSpecRecord, NetworkError> {
    let id = record
        .id()
        .ok_or_else(|| NetworkError::Serialize("у записи нет идентификатора".to_string()))?;

    let response = Request::patch(&api_url(&record_path(id)))
        .abort_signal(signal)
        .json(&record)
        .map_err(map_send_error)?
        .send()
        .await
        .map_err(map_send_error)?;

    ensure_ok(&response, "Failed to update record")?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(collection_path(), "/f_pers_young_spec");
        assert_eq!(record_path(42), "/f_pers_young_spec/42/");
        assert!(api_url(&record_path(42)).ends_with("/f_pers_young_spec/42/"));
    }
}
