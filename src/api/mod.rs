pub mod types;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Client;
use tracing::{debug, warn};

use types::ResultRecord;

/// Characters to percent-encode in query-string values.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

fn encode_query_value(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ENCODE_SET).to_string()
}

/// Errors returned by search API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("search API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Abstraction over the autocomplete endpoint.
/// Implemented by `SearchApiClient` for production; mock implementations
/// used in completion-session tests.
pub trait SuggestionSource {
    async fn complete(&self, term: &str) -> Result<Vec<String>, ApiError>;
}

/// HTTP client for the two search endpoints, `/api/query` and
/// `/api/complete`. No retries and no timeout beyond reqwest's defaults:
/// failures surface to the caller as `ApiError`.
#[derive(Clone)]
pub struct SearchApiClient {
    http: Client,
    base_url: String,
}

impl SearchApiClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let parsed = url::Url::parse(base_url)?;
        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<T, ApiError> {
        let url = format!(
            "{}{path}?query={}",
            self.base_url,
            encode_query_value(query)
        );
        let response = self
            .http
            .get(&url)
            .header("User-Agent", crate::USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = extract_error_message(
                &response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("HTTP {status}")),
            );
            warn!(code = status.as_u16(), %message, "search API error");
            return Err(ApiError::Api {
                code: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Run a query and return its result records in server order.
    /// `null` entries in the response are skipped, not errors: the server
    /// emits them for documents that vanished between indexing and lookup.
    pub async fn query(&self, query: &str) -> Result<Vec<ResultRecord>, ApiError> {
        let raw: Vec<Option<ResultRecord>> = self.get_json("/api/query", query).await?;
        let total = raw.len();
        let records: Vec<ResultRecord> = raw.into_iter().flatten().collect();
        if records.len() < total {
            warn!(
                skipped = total - records.len(),
                "dropped null result records"
            );
        }
        debug!(count = records.len(), "query complete");
        Ok(records)
    }
}

impl SuggestionSource for SearchApiClient {
    /// Fetch autocomplete suggestions for a partial query.
    async fn complete(&self, term: &str) -> Result<Vec<String>, ApiError> {
        let suggestions: Vec<String> = self.get_json("/api/complete", term).await?;
        debug!(count = suggestions.len(), "completion fetched");
        Ok(suggestions)
    }
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.chars().take(200).collect())
}
