//! Page analysis rule engine.
//!
//! [`analyze`] runs every on-page heuristic against a parsed document and
//! collects the findings into a [`PageResult`]. Title and description checks
//! read and update the crawl's [`SiteState`] to detect duplicates.

mod content;
mod links;
mod meta;
mod structure;

use crate::parsers::Document;
use crate::results::{Finding, KeywordEntry, PageResult};
use crate::rules::Rule;
use crate::state::SiteState;

pub const MIN_TITLE_LENGTH: usize = 10;
pub const MAX_TITLE_LENGTH: usize = 70;
pub const MIN_DESCRIPTION_LENGTH: usize = 140;
pub const MAX_DESCRIPTION_LENGTH: usize = 255;
/// A term used more often than this in a title or description is stuffing
pub const STUFFING_LIMIT: usize = 3;
pub const MAX_URL_LENGTH: usize = 100;
pub const MAX_URL_DEPTH: usize = 3;
pub const MAX_ANCHOR_TEXT_LENGTH: usize = 100;
pub const MIN_ANCHOR_TEXT_LENGTH: usize = 3;
pub const MAX_HREF_LENGTH: usize = 100;
pub const MAX_IMAGE_SRC_LENGTH: usize = 15;
pub const MAX_IMAGE_ALT_LENGTH: usize = 40;
pub const MIN_WORD_COUNT: usize = 1140;
/// Number of keywords kept per page
pub const TOP_KEYWORDS: usize = 5;

/// Analyzes one fetched page.
///
/// Never fails: missing tags and attributes count as empty content.
pub fn analyze(url: &str, doc: &dyn Document, state: &mut SiteState) -> PageResult {
    ::log::debug!("Analyzing {}", url);

    let mut page = PageAnalysis::new(url);
    page.analyze_title(doc, state);
    page.analyze_description(doc, state);
    page.analyze_url_structure(doc);
    page.analyze_anchors(doc);
    page.analyze_images(doc);
    page.analyze_headings(doc);
    page.analyze_keywords(doc);
    page.analyze_wordcount();

    let result = page.render();
    ::log::debug!(
        "{}: {} issues, {} achievements",
        url,
        result.issues.len(),
        result.achievements.len()
    );
    result
}

/// Working state while the rules of one page run
pub(crate) struct PageAnalysis<'a> {
    url: &'a str,
    title: String,
    description: String,
    headers: Vec<String>,
    /// Every term of the visible text, ranked by frequency
    ranking: Vec<(String, usize)>,
    issues: Vec<Finding>,
    achievements: Vec<Finding>,
}

impl<'a> PageAnalysis<'a> {
    pub(crate) fn new(url: &'a str) -> Self {
        Self {
            url,
            title: String::new(),
            description: String::new(),
            headers: Vec::new(),
            ranking: Vec::new(),
            issues: Vec::new(),
            achievements: Vec::new(),
        }
    }

    fn warn(&mut self, rule: Rule, value: Option<String>) {
        ::log::trace!("{} warn {}: {:?}", self.url, rule.id(), value);
        self.issues.push(Finding::warning(rule, value));
    }

    fn earn(&mut self, rule: Rule, value: Option<String>) {
        ::log::trace!("{} earned {}: {:?}", self.url, rule.id(), value);
        self.achievements.push(Finding::achievement(rule, value));
    }

    fn render(self) -> PageResult {
        let title = self.title.to_lowercase();
        let description = self.description.to_lowercase();

        let keywords = self
            .ranking
            .iter()
            .take(TOP_KEYWORDS)
            .map(|(term, frequency)| KeywordEntry {
                term: term.clone(),
                frequency: *frequency,
                in_title: title.contains(term.as_str()),
                in_description: description.contains(term.as_str()),
                in_heading: self.headers.iter().any(|h| h == term),
            })
            .collect();

        PageResult {
            url: self.url.to_string(),
            title: self.title,
            description: self.description,
            keywords,
            issues: self.issues,
            achievements: self.achievements,
        }
    }

    #[cfg(test)]
    fn issue_rules(&self) -> Vec<Rule> {
        self.issues.iter().map(|f| f.rule).collect()
    }

    #[cfg(test)]
    fn achievement_rules(&self) -> Vec<Rule> {
        self.achievements.iter().map(|f| f.rule).collect()
    }
}
