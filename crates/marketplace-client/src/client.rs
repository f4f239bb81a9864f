//! HTTP client for the gallery `extensionquery` endpoint.

use std::num::NonZeroU32;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, info, instrument};

use crate::error::MarketplaceError;
use crate::query::build_query;
use crate::response::{ExtensionQueryResponse, ExtensionResult};

pub const DEFAULT_MARKETPLACE_API_URL: &str =
    "https://marketplace.visualstudio.com/_apis/public/gallery/extensionquery";

/// The gallery rejects requests without an explicit API version.
pub const ACCEPT_HEADER_VALUE: &str = "application/json;api-version=7.1-preview.1";

/// Marketplace search client. Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct MarketplaceClient {
    http: reqwest::Client,
    endpoint: String,
}

impl MarketplaceClient {
    /// Creates a client posting to `endpoint` (normally [`DEFAULT_MARKETPLACE_API_URL`]).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one search and returns up to `limit` extensions in the order the server ranked them.
    ///
    /// A non-2xx answer is [`MarketplaceError::Status`] carrying the raw body; a 2xx answer that is
    /// not JSON is [`MarketplaceError::Decode`]. Missing fields never fail the call.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        search_term: &str,
        limit: NonZeroU32,
    ) -> Result<Vec<ExtensionResult>, MarketplaceError> {
        let payload = build_query(search_term, limit);
        let body = serde_json::to_vec(&payload)?;

        info!(
            endpoint = %self.endpoint,
            search_term = %search_term,
            page_size = limit.get(),
            "Marketplace search request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, ACCEPT_HEADER_VALUE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(MarketplaceError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ExtensionQueryResponse = serde_json::from_str(&text)?;
        let extensions: Vec<ExtensionResult> = parsed
            .into_extensions()
            .into_iter()
            .map(ExtensionResult::from)
            .collect();

        debug!(count = extensions.len(), "Marketplace search parsed");
        Ok(extensions)
    }
}
