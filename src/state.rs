use crate::results::{Finding, SiteSummary};
use crate::rules::Rule;
use std::collections::HashMap;

/// Crawl-scoped state shared by every page analysis of one audit.
///
/// Holds the registries used for duplicate title/description detection and
/// the site-level findings. Create one per crawl and pass it by `&mut`.
#[derive(Debug, Default)]
pub struct SiteState {
    titles: HashMap<String, String>,
    descriptions: HashMap<String, String>,
    issues: Vec<Finding>,
    achievements: Vec<Finding>,
}

impl SiteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `title` for `url` unless it is already known.
    ///
    /// Returns the URL that first used the title when it is a duplicate. The
    /// registered URL is never overwritten.
    pub fn register_title(&mut self, title: &str, url: &str) -> Option<String> {
        register(&mut self.titles, title, url)
    }

    /// Same as [`register_title`](Self::register_title) for descriptions
    pub fn register_description(&mut self, description: &str, url: &str) -> Option<String> {
        register(&mut self.descriptions, description, url)
    }

    /// URL that first used `title`, if any
    pub fn title_owner(&self, title: &str) -> Option<&str> {
        self.titles.get(title).map(String::as_str)
    }

    /// URL that first used `description`, if any
    pub fn description_owner(&self, description: &str) -> Option<&str> {
        self.descriptions.get(description).map(String::as_str)
    }

    pub fn warn(&mut self, rule: Rule, value: Option<String>) {
        ::log::debug!("site warning {}: {:?}", rule.id(), value);
        self.issues.push(Finding::warning(rule, value));
    }

    pub fn earn(&mut self, rule: Rule, value: Option<String>) {
        ::log::debug!("site achievement {}: {:?}", rule.id(), value);
        self.achievements.push(Finding::achievement(rule, value));
    }

    /// Site-level warnings recorded so far
    pub fn issues(&self) -> &[Finding] {
        &self.issues
    }

    /// Site-level achievements recorded so far
    pub fn achievements(&self) -> &[Finding] {
        &self.achievements
    }

    /// Consumes the state, keeping only the site-level findings
    pub fn into_summary(self) -> SiteSummary {
        SiteSummary {
            issues: self.issues,
            achieved: self.achievements,
        }
    }
}

fn register(registry: &mut HashMap<String, String>, key: &str, url: &str) -> Option<String> {
    if let Some(first) = registry.get(key) {
        return Some(first.clone());
    }
    registry.insert(key.to_string(), url.to_string());
    None
}
