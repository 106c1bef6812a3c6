//! HTTP API Client
//!
//! Functions for communicating with the metrics REST API. Every collection
//! endpoint wraps its payload in a `{ "data": [...] }` envelope.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

use crate::model::{
    CountRecord, CountryRankRecord, Genre, HhiRecord, RatingRecord, RevenueRecord,
    StabilityRecord, UserRecord, VersionRecord,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Header that skips the tunneling proxy's browser interstitial. Sent on
/// every request; the API is deployed behind an ngrok tunnel.
const TUNNEL_SKIP_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("marketscope_api_url").ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("marketscope_api_url", url);
        }
    }
}

/// How a fetch can fail. Each metric panel surfaces its own error
/// independently; nothing here aborts the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, CORS).
    Network(String),
    /// The server answered with a non-success status.
    Http { status: u16 },
    /// The body was not JSON or the envelope had no `data` field.
    Malformed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status } => write!(f, "Server returned HTTP {}", status),
            ApiError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

/// Response envelope shared by every collection endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    data: Option<Vec<T>>,
}

/// GET a collection endpoint and unwrap its envelope.
async fn get_collection<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let url = format!("{}{}", get_api_base(), path);

    let response = Request::get(&url)
        .header(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }

    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))?;

    envelope
        .data
        .ok_or_else(|| ApiError::Malformed("envelope missing `data` field".to_string()))
}

/// Fetch the static genre reference list
pub async fn fetch_genres() -> Result<Vec<Genre>, ApiError> {
    get_collection("/genre").await
}

/// Fetch revenue records for a (year, month)
pub async fn fetch_revenue(year: i32, month: u32) -> Result<Vec<RevenueRecord>, ApiError> {
    get_collection(&format!("/genre/{}/{}/revenue", year, month)).await
}

/// Fetch user-base records for a (year, month)
pub async fn fetch_users(year: i32, month: u32) -> Result<Vec<UserRecord>, ApiError> {
    get_collection(&format!("/genre/{}/{}/user", year, month)).await
}

/// Fetch rating records for a (year, month)
pub async fn fetch_ratings(year: i32, month: u32) -> Result<Vec<RatingRecord>, ApiError> {
    get_collection(&format!("/genre/{}/{}/rating", year, month)).await
}

/// Fetch version-cadence records for a (year, month)
pub async fn fetch_versions(year: i32, month: u32) -> Result<Vec<VersionRecord>, ApiError> {
    get_collection(&format!("/genre/{}/{}/version", year, month)).await
}

/// Fetch market entry/exit records for a (year, month)
pub async fn fetch_counts(year: i32, month: u32) -> Result<Vec<CountRecord>, ApiError> {
    get_collection(&format!("/genre/{}/{}/count", year, month)).await
}

/// Fetch concentration-index records for a (year, month)
pub async fn fetch_hhi(year: i32, month: u32) -> Result<Vec<HhiRecord>, ApiError> {
    get_collection(&format!("/genre/{}/{}/hhi", year, month)).await
}

/// Fetch ranking-stability records for a (year, month)
pub async fn fetch_stability(year: i32, month: u32) -> Result<Vec<StabilityRecord>, ApiError> {
    get_collection(&format!("/genre/{}/{}/stability", year, month)).await
}

/// Fetch per-country ranking records for a (year, month). Fetched and held
/// in state; no chart consumes it yet.
pub async fn fetch_country_ranks(
    year: i32,
    month: u32,
) -> Result<Vec<CountryRankRecord>, ApiError> {
    get_collection(&format!("/genre/{}/{}/country_rank", year, month)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let envelope: Envelope<Genre> =
            serde_json::from_str(r#"{"data": [{"id": "action", "name": "Action"}]}"#).unwrap();
        let genres = envelope.data.unwrap();
        assert_eq!(genres.len(), 1);
        assert_eq!(genres[0].name, "Action");
    }

    #[test]
    fn test_envelope_empty_data_is_valid() {
        let envelope: Envelope<Genre> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(envelope.data.unwrap().len(), 0);
    }

    #[test]
    fn test_envelope_missing_data_field() {
        let envelope: Envelope<Genre> = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::Http { status: 502 }.to_string(),
            "Server returned HTTP 502"
        );
        assert_eq!(
            ApiError::Network("timeout".to_string()).to_string(),
            "Network error: timeout"
        );
    }
}
