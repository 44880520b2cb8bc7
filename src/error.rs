use thiserror::Error;

/// Errors raised while setting up or fetching for an audit.
///
/// Page-level problems never surface here; the crawl turns them into findings.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A seed, sitemap or page URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or report (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
