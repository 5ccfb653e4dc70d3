use thiserror::Error;

/// Failures on the way to an upstream response body.
///
/// Every variant is absorbed by the pipeline and turned into the fallback
/// dataset; none of them reaches [`crate::fetch_news`] callers.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("unexpected HTTP status {status} from {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("invalid request URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("configuration error: {0}")]
    Configuration(String),
}
