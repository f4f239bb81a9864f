use thiserror::Error;

/// Failure of one marketplace search.
#[derive(Error, Debug)]
pub enum MarketplaceError {
    /// The endpoint answered with a non-2xx status. `body` is the raw response text.
    #[error("Marketplace returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Marketplace request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Marketplace response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
