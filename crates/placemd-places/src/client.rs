//! HTTP client for the Google Places API (New).
//!
//! Wraps `reqwest` with API key handling, field-mask headers, and typed
//! response deserialization. Non-2xx responses carrying the API's
//! `{"error": {...}}` envelope surface as [`PlacesError::Api`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::fields::{field_mask, FieldSpec};
use crate::types::{
    ErrorEnvelope, PlaceDetails, PlaceSummary, SearchTextRequest, SearchTextResponse,
};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/";
const DEFAULT_LANGUAGE: &str = "ja";
const DEFAULT_USER_AGENT: &str = "placemd/0.1 (place-report)";

/// Search only needs enough to pick a candidate.
const SEARCH_FIELD_MASK: &str = "places.id,places.displayName";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Client for the Places API (New).
///
/// Construct one explicitly and pass it to whatever needs it. Use
/// [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`] to
/// point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    language_code: String,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_USER_AGENT, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom `User-Agent` and base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse or cannot carry a path.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(PlacesError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
            language_code: DEFAULT_LANGUAGE.to_string(),
        })
    }

    /// Sets the `languageCode` sent with every request (default `ja`).
    #[must_use]
    pub fn with_language(mut self, language_code: &str) -> Self {
        self.language_code = language_code.to_string();
        self
    }

    /// Searches places by free text and returns every hit in API order.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API returns its error envelope.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_text(&self, query: &str) -> Result<Vec<PlaceSummary>, PlacesError> {
        let url = self.build_url(&["v1", "places:searchText"]);
        let body = SearchTextRequest {
            text_query: query,
            language_code: &self.language_code,
        };
        let request = self
            .client
            .post(url.clone())
            .header(FIELD_MASK_HEADER, SEARCH_FIELD_MASK)
            .json(&body);

        let response: SearchTextResponse = self
            .send_json(request, &url, &format!("searchText(query={query})"))
            .await?;
        tracing::debug!(query, hits = response.places.len(), "text search finished");
        Ok(response.places)
    }

    /// Returns the first search hit for `query`, or `None` when nothing matched.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::search_text`].
    pub async fn find_place(&self, query: &str) -> Result<Option<PlaceSummary>, PlacesError> {
        Ok(self.search_text(query).await?.into_iter().next())
    }

    /// Fetches place details restricted to `fields`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API returns its error envelope.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn get_place(
        &self,
        place_id: &str,
        fields: &[FieldSpec],
    ) -> Result<PlaceDetails, PlacesError> {
        let mut url = self.build_url(&["v1", "places", place_id]);
        url.query_pairs_mut()
            .append_pair("languageCode", &self.language_code);

        let request = self
            .client
            .get(url.clone())
            .header(FIELD_MASK_HEADER, field_mask(fields));

        self.send_json(request, &url, &format!("getPlace(id={place_id})"))
            .await
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn build_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor: the base URL always carries a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Attaches the API key, sends the request, and decodes a 2xx body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Api`] or [`PlacesError::UnexpectedStatus`] on a
    /// non-2xx status, [`PlacesError::Http`] on network failure, and
    /// [`PlacesError::Deserialize`] if the body does not decode.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::error_from_body(status.as_u16(), url, &body));
        }

        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Maps a non-2xx response to the most specific error available.
    fn error_from_body(status: u16, url: &Url, body: &str) -> PlacesError {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => PlacesError::Api {
                status,
                reason: envelope
                    .error
                    .status
                    .unwrap_or_else(|| envelope.error.code.to_string()),
                message: envelope.error.message,
            },
            Err(_) => PlacesError::UnexpectedStatus {
                status,
                url: url.to_string(),
            },
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
