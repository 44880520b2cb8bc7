pub mod http;
pub mod site;

pub use http::HttpFetcher;
pub use site::SiteAudit;

use crate::error::Result;

/// Status and body of one fetched URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Retrieves URLs for the crawl. One attempt per call; no retries.
///
/// An `Err` means the request never produced a response (DNS, connect,
/// timeout). HTTP error statuses come back as `Ok` responses.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse>;
}
