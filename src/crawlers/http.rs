use crate::config::AuditConfig;
use crate::crawlers::{FetchResponse, Fetcher};
use crate::error::Result;
use std::time::Duration;

/// [`Fetcher`] over HTTP(S) using reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &AuditConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        let start = std::time::Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        ::log::debug!(
            "GET {} -> {} ({} bytes in {:.2} seconds)",
            url,
            status,
            body.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(FetchResponse { status, body })
    }
}
