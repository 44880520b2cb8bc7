use super::{MAX_URL_DEPTH, MAX_URL_LENGTH, PageAnalysis};
use crate::parsers::Document;
use crate::parsers::text::terms_above;
use crate::rules::Rule;
use crate::utils::url_path;

impl PageAnalysis<'_> {
    /// URL length, naming, stuffing, depth, canonical link and casing
    pub(crate) fn analyze_url_structure(&mut self, doc: &dyn Document) {
        let url = self.url;
        let path = url_path(url);
        let segments: Vec<&str> = path.split('/').collect();

        if url.chars().count() > MAX_URL_LENGTH {
            self.warn(Rule::UrlTooLong, Some(url.to_string()));
        }

        if url.to_lowercase().contains("page") {
            self.warn(Rule::UrlTooGeneric, Some(url.to_string()));
        }

        let last_segment = segments.last().copied().unwrap_or_default();
        // a term repeated even once in the file name counts
        for term in terms_above(last_segment, 1) {
            self.warn(Rule::UrlKeywordStuffed, Some(term));
        }

        if segments.len() > MAX_URL_DEPTH {
            self.warn(Rule::UrlTooDeep, Some(path.clone()));
        }

        let canonical = doc
            .elements("link")
            .into_iter()
            .find(|link| link.has_token("rel", "canonical"));
        if let Some(link) = canonical {
            let href = link.attr_or_empty("href");
            if href != url {
                self.warn(Rule::UrlNotCanonical, Some(href.to_string()));
            } else {
                self.earn(Rule::UrlCanonical, None);
            }
        }

        if url.chars().any(char::is_uppercase) {
            self.warn(Rule::UrlCapitalized, Some(url.to_string()));
        } else {
            self.earn(Rule::UrlCorrectlyCased, None);
        }
    }
}
