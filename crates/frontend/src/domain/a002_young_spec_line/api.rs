use std::collections::BTreeMap;

use contracts::domain::a001_young_spec::metadata::ENTITY;
use contracts::domain::a002_young_spec_line::aggregate::{
    FIELD_DEFINITIONS_COLLECTION, LINE_ITEMS_COLLECTION,
};
use contracts::domain::a002_young_spec_line::{FieldDefinition, LineItem};
use contracts::shared::NetworkError;
use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::shared::api_utils::{api_url, ensure_ok, map_send_error, read_json};

fn collection_url(collection: &str) -> String {
    api_url(&format!("/{collection}"))
}

/// Field definitions (one per form row)
pub async fn fetch_field_definitions(
    signal: Option<&AbortSignal>,
) -> Result<Vec<FieldDefinition>, NetworkError> {
    let response = Request::get(&collection_url(FIELD_DEFINITIONS_COLLECTION))
        .abort_signal(signal)
        .send()
        .await
        .map_err(map_send_error)?;

    ensure_ok(&response, "Failed to fetch form fields")?;
    read_json(response).await
}

/// Target/distribution counts
pub async fn fetch_line_items(
    signal: Option<&AbortSignal>,
) -> Result<Vec<LineItem>, NetworkError> {
    let response = Request::get(&collection_url(LINE_ITEMS_COLLECTION))
        .abort_signal(signal)
        .send()
        .await
        .map_err(map_send_error)?;

    ensure_ok(&response, "Failed to fetch line data")?;
    read_json(response).await
}

/// Post the form values to the record collection. The response body is ignored.
pub async fn submit_form(
    values: &BTreeMap<String, String>,
    signal: Option<&AbortSignal>,
) -> Result<(), NetworkError> {
    let response = Request::post(&collection_url(ENTITY.collection_name))
        .abort_signal(signal)
        .json(values)
        .map_err(map_send_error)?
        .send()
        .await
        .map_err(map_send_error)?;

    ensure_ok(&response, "Failed to submit form")
}
