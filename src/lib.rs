// Re-export modules
pub mod analyzer;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod parsers;
pub mod results;
pub mod rules;
pub mod state;
pub mod utils;

// Re-export commonly used types for convenience
pub use analyzer::analyze;
pub use config::AuditConfig;
pub use crawlers::{FetchResponse, Fetcher, HttpFetcher, SiteAudit};
pub use error::{AuditError, Result};
pub use results::{Finding, FindingKind, KeywordEntry, PageResult, Report};
pub use rules::Rule;
pub use state::SiteState;

/// Main builder for an SEO audit of one site
pub struct Audit {
    domain: String,
    sitemap: Option<String>,
    page: Option<String>,
    config: AuditConfig,
}

impl Audit {
    /// Create a new Audit builder for the given domain (seed URL)
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            sitemap: None,
            page: None,
            config: AuditConfig::default(),
        }
    }

    /// Seed the crawl queue from a sitemap (absolute URL or path on the domain)
    pub fn with_sitemap(mut self, sitemap: impl Into<String>) -> Self {
        self.sitemap = Some(sitemap.into());
        self
    }

    /// Audit only this page (absolute URL or path on the domain)
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.request_timeout_secs = timeout_seconds;
        self
    }

    /// Set the User-Agent sent with every request
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: AuditConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = AuditConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// The configuration the audit will run with
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Validate the inputs into a runnable site audit
    pub fn build(&self) -> Result<SiteAudit> {
        SiteAudit::new(&self.domain, self.sitemap.as_deref(), self.page.as_deref())
    }

    /// Run the audit over HTTP
    pub async fn run(self) -> Result<Report> {
        let fetcher = HttpFetcher::new(&self.config)?;
        self.run_with(&fetcher).await
    }

    /// Run the audit with any fetcher
    pub async fn run_with<F: Fetcher>(&self, fetcher: &F) -> Result<Report> {
        let site = self.build()?;
        Ok(site.run(fetcher).await)
    }
}
