use super::{
    MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, MIN_DESCRIPTION_LENGTH, MIN_TITLE_LENGTH,
    PageAnalysis, STUFFING_LIMIT,
};
use crate::parsers::Document;
use crate::parsers::text::terms_above;
use crate::rules::Rule;
use crate::state::SiteState;

const VAGUE_TITLE_WORDS: [&str; 2] = ["untitled", "page"];
const VAGUE_DESCRIPTION_WORDS: [&str; 2] = ["web page", "page about"];

impl PageAnalysis<'_> {
    /// Title presence, length, vagueness, stuffing and uniqueness
    pub(crate) fn analyze_title(&mut self, doc: &dyn Document, state: &mut SiteState) {
        let title = doc.title();
        self.title = title.clone();

        let length = title.chars().count();
        if length == 0 {
            self.warn(Rule::TitleMissing, None);
            return;
        } else if length < MIN_TITLE_LENGTH {
            self.warn(Rule::TitleTooShort, Some(title.clone()));
        } else if length > MAX_TITLE_LENGTH {
            self.warn(Rule::TitleTooLong, Some(title.clone()));
        } else {
            self.earn(Rule::TitleLength, None);
        }

        let lowered = title.to_lowercase();
        if VAGUE_TITLE_WORDS.iter().any(|w| lowered.contains(w)) {
            self.warn(Rule::TitleTooGeneric, Some(title.clone()));
        } else {
            self.earn(Rule::TitleInformative, None);
        }

        for term in terms_above(&title, STUFFING_LIMIT) {
            self.warn(Rule::TitleKeywordStuffed, Some(term));
        }

        match state.register_title(&title, self.url) {
            Some(first_url) => self.warn(Rule::TitleDuplicated, Some(first_url)),
            None => self.earn(Rule::TitleUnique, None),
        }
    }

    /// Same checks as the title, run on the first description meta tag
    pub(crate) fn analyze_description(&mut self, doc: &dyn Document, state: &mut SiteState) {
        let description = doc
            .first_with_attr("meta", "name", "description")
            .map(|meta| meta.attr_or_empty("content").to_string())
            .unwrap_or_default();
        self.description = description.clone();

        let length = description.chars().count();
        if length == 0 {
            self.warn(Rule::DescriptionMissing, None);
            return;
        } else if length < MIN_DESCRIPTION_LENGTH {
            self.warn(Rule::DescriptionTooShort, Some(description.clone()));
        } else if length > MAX_DESCRIPTION_LENGTH {
            self.warn(Rule::DescriptionTooLong, Some(description.clone()));
        } else {
            self.earn(Rule::DescriptionLength, None);
        }

        let lowered = description.to_lowercase();
        if VAGUE_DESCRIPTION_WORDS.iter().any(|w| lowered.contains(w)) {
            self.warn(Rule::DescriptionTooGeneric, Some(description.clone()));
        } else {
            self.earn(Rule::DescriptionInformative, None);
        }

        for term in terms_above(&description, STUFFING_LIMIT) {
            self.warn(Rule::DescriptionKeywordStuffed, Some(term));
        }

        match state.register_description(&description, self.url) {
            Some(first_url) => self.warn(Rule::DescriptionDuplicated, Some(first_url)),
            None => self.earn(Rule::DescriptionUnique, None),
        }
    }
}
