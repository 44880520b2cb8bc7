use crate::analyzer;
use crate::crawlers::Fetcher;
use crate::error::Result;
use crate::parsers::HtmlDocument;
use crate::parsers::sitemap::parse_sitemap;
use crate::results::{PageResult, Report};
use crate::rules::Rule;
use crate::state::SiteState;
use crate::utils::{origin, resolve};
use url::Url;

/// A sequential audit of one site.
///
/// The queue is the seed followed by the sitemap locations, or a single page
/// when one was requested. Every queued URL is fetched and analyzed once per
/// occurrence, in order.
#[derive(Debug, Clone)]
pub struct SiteAudit {
    seed: String,
    origin: String,
    sitemap: Option<String>,
    page: Option<String>,
}

impl SiteAudit {
    /// Validates the seed and resolves relative sitemap/page paths against it
    pub fn new(seed: &str, sitemap: Option<&str>, page: Option<&str>) -> Result<Self> {
        let seed_url = Url::parse(seed)?;
        let sitemap = sitemap.map(|s| resolve(&seed_url, s)).transpose()?;
        let page = page.map(|p| resolve(&seed_url, p)).transpose()?;

        Ok(Self {
            seed: seed.to_string(),
            origin: origin(&seed_url),
            sitemap,
            page,
        })
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn sitemap(&self) -> Option<&str> {
        self.sitemap.as_deref()
    }

    pub fn robots_url(&self) -> String {
        format!("{}/robots.txt", self.origin)
    }

    /// Runs the whole audit. Page failures become site findings; this never fails.
    pub async fn run<F: Fetcher>(&self, fetcher: &F) -> Report {
        ::log::info!("Starting audit of {}", self.seed);

        let queue = self.build_queue(fetcher).await;
        let mut state = SiteState::new();

        self.check_robots(fetcher, &mut state).await;

        let mut pages = Vec::with_capacity(queue.len());
        for (crawled, url) in queue.iter().enumerate() {
            ::log::info!("Crawled {} pages of {}", crawled, queue.len());
            if let Some(page) = crawl_page(fetcher, url, &mut state).await {
                pages.push(page);
            }
        }

        ::log::info!(
            "Audit complete - analyzed {} of {} queued pages, {} site issues, {} site achievements",
            pages.len(),
            queue.len(),
            state.issues().len(),
            state.achievements().len()
        );

        Report {
            pages,
            site: state.into_summary(),
        }
    }

    /// Seed plus sitemap locations, or just the requested page
    pub async fn build_queue<F: Fetcher>(&self, fetcher: &F) -> Vec<String> {
        if let Some(page) = &self.page {
            ::log::info!("Auditing single page {}", page);
            return vec![page.clone()];
        }

        let mut queue = vec![self.seed.clone()];
        let Some(sitemap) = &self.sitemap else {
            return queue;
        };

        match fetcher.fetch(sitemap).await {
            Ok(response) if response.is_success() => {
                let locations = parse_sitemap(&response.body);
                ::log::info!("Sitemap {} lists {} pages", sitemap, locations.len());
                queue.extend(locations);
            }
            Ok(response) => {
                ::log::warn!(
                    "Sitemap {} returned status {}, crawling the seed only",
                    sitemap,
                    response.status
                );
            }
            Err(e) => {
                ::log::warn!("Failed to fetch sitemap {}: {}", sitemap, e);
            }
        }

        queue
    }

    /// Site-wide robots.txt presence
    async fn check_robots<F: Fetcher>(&self, fetcher: &F, state: &mut SiteState) {
        let robots = self.robots_url();
        match fetcher.fetch(&robots).await {
            Ok(response) if response.is_success() => state.earn(Rule::RobotsTxt, None),
            Ok(response) => {
                ::log::info!("{} returned status {}", robots, response.status);
                state.warn(Rule::RobotsTxt, None);
            }
            Err(e) => {
                ::log::warn!("Failed to fetch {}: {}", robots, e);
                state.warn(Rule::RobotsTxt, None);
            }
        }
    }
}

/// Fetches and analyzes one page, recording failures on the site state
async fn crawl_page<F: Fetcher>(
    fetcher: &F,
    url: &str,
    state: &mut SiteState,
) -> Option<PageResult> {
    match fetcher.fetch(url).await {
        Ok(response) if response.is_success() => {
            let doc = HtmlDocument::parse(&response.body);
            Some(analyzer::analyze(url, &doc, state))
        }
        Ok(response) if response.is_not_found() => {
            ::log::warn!("Broken link: {}", url);
            state.warn(Rule::BrokenLink, Some(url.to_string()));
            None
        }
        Ok(response) => {
            ::log::warn!("Status {} for {}", response.status, url);
            state.warn(
                Rule::ServerError,
                Some(format!("status {} for {}", response.status, url)),
            );
            None
        }
        Err(e) => {
            ::log::error!("Failed to fetch {}: {}", url, e);
            state.warn(
                Rule::ServerError,
                Some(format!("request failed for {}: {}", url, e)),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_seed() {
        assert!(SiteAudit::new("www.example.com", None, None).is_err());
    }

    #[test]
    fn test_origin_and_robots() {
        let audit = SiteAudit::new("https://www.example.com/blog/post", None, None).unwrap();
        assert_eq!(audit.origin(), "https://www.example.com");
        assert_eq!(audit.robots_url(), "https://www.example.com/robots.txt");
        assert_eq!(audit.seed(), "https://www.example.com/blog/post");
    }

    #[test]
    fn test_relative_sitemap_is_resolved() {
        let audit = SiteAudit::new("http://www.example.com", Some("/sitemap.xml"), None).unwrap();
        assert_eq!(audit.sitemap(), Some("http://www.example.com/sitemap.xml"));

        let audit = SiteAudit::new(
            "http://www.example.com",
            Some("http://cdn.example.com/map.xml"),
            None,
        )
        .unwrap();
        assert_eq!(audit.sitemap(), Some("http://cdn.example.com/map.xml"));
    }
}
