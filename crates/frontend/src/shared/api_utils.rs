//! API utilities for frontend-backend communication
//!
//! Provides the backend base URL and helpers shared by all `api.rs` modules.

use contracts::shared::NetworkError;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Base URL of the backend. Fixed at build time, not configurable.
pub const API_BASE: &str = "https://olegegoism.pythonanywhere.com";

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/f_pers_young_spec");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Map a `gloo-net` send failure, recognising requests cancelled through an abort signal
pub fn map_send_error(err: gloo_net::Error) -> NetworkError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => NetworkError::Aborted,
        gloo_net::Error::SerdeError(e) => NetworkError::Serialize(e.to_string()),
        other => NetworkError::Transport(other.to_string()),
    }
}

/// Reject any non-2xx response
pub fn ensure_ok(response: &Response, context: &'static str) -> Result<(), NetworkError> {
    if response.ok() {
        Ok(())
    } else {
        Err(NetworkError::Status {
            status: response.status(),
            context,
        })
    }
}

/// Parse a JSON response body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, NetworkError> {
    response.json::<T>().await.map_err(|e| match e {
        gloo_net::Error::SerdeError(e) => NetworkError::Decode(e.to_string()),
        other => map_send_error(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(
            api_url("/f_pers_young_spec"),
            "https://olegegoism.pythonanywhere.com/f_pers_young_spec"
        );
    }

    #[test]
    fn test_map_send_error() {
        let err = map_send_error(gloo_net::Error::GlooError("connection refused".into()));
        assert!(matches!(err, NetworkError::Transport(_)));
    }
}
