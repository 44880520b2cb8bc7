//! Catalog of every heuristic the audit knows about.
//!
//! A [`Rule`] identifies a check. Its human readable text lives in one of two
//! disjoint catalogs: warnings (issues) and achievements (badges). A few rules,
//! such as `H1_ONE_PER_PAGE`, appear in both with different wording.

/// Identifier of a single SEO heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    TitleMissing,
    TitleTooShort,
    TitleTooLong,
    TitleLength,
    TitleTooGeneric,
    TitleInformative,
    TitleKeywordStuffed,
    TitleDuplicated,
    TitleUnique,
    DescriptionMissing,
    DescriptionTooShort,
    DescriptionTooLong,
    DescriptionLength,
    DescriptionTooGeneric,
    DescriptionInformative,
    DescriptionKeywordStuffed,
    DescriptionDuplicated,
    DescriptionUnique,
    UrlTooLong,
    UrlTooGeneric,
    UrlKeywordStuffed,
    UrlTooDeep,
    UrlNotCanonical,
    UrlCanonical,
    UrlCapitalized,
    UrlCorrectlyCased,
    ImageLinkAltMissing,
    ImageLinkAlt,
    AnchorTextMissing,
    AnchorTextTooShort,
    AnchorTextTooLong,
    AnchorTextTooGeneric,
    AnchorHrefTooLong,
    AnchorHrefEqualsText,
    AnchorNoFollow,
    ImageSrcMissing,
    ImageSrcTooLong,
    ImageAltMissing,
    ImageAltTooLong,
    H1OnePerPage,
    KeywordsMeta,
    WordcountTooShort,
    Wordcount,
    RobotsTxt,
    BrokenLink,
    ServerError,
}

/// A catalog entry: rule id plus its message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMessage {
    pub id: &'static str,
    pub text: &'static str,
}

impl Rule {
    pub const ALL: &'static [Rule] = &[
        Rule::TitleMissing,
        Rule::TitleTooShort,
        Rule::TitleTooLong,
        Rule::TitleLength,
        Rule::TitleTooGeneric,
        Rule::TitleInformative,
        Rule::TitleKeywordStuffed,
        Rule::TitleDuplicated,
        Rule::TitleUnique,
        Rule::DescriptionMissing,
        Rule::DescriptionTooShort,
        Rule::DescriptionTooLong,
        Rule::DescriptionLength,
        Rule::DescriptionTooGeneric,
        Rule::DescriptionInformative,
        Rule::DescriptionKeywordStuffed,
        Rule::DescriptionDuplicated,
        Rule::DescriptionUnique,
        Rule::UrlTooLong,
        Rule::UrlTooGeneric,
        Rule::UrlKeywordStuffed,
        Rule::UrlTooDeep,
        Rule::UrlNotCanonical,
        Rule::UrlCanonical,
        Rule::UrlCapitalized,
        Rule::UrlCorrectlyCased,
        Rule::ImageLinkAltMissing,
        Rule::ImageLinkAlt,
        Rule::AnchorTextMissing,
        Rule::AnchorTextTooShort,
        Rule::AnchorTextTooLong,
        Rule::AnchorTextTooGeneric,
        Rule::AnchorHrefTooLong,
        Rule::AnchorHrefEqualsText,
        Rule::AnchorNoFollow,
        Rule::ImageSrcMissing,
        Rule::ImageSrcTooLong,
        Rule::ImageAltMissing,
        Rule::ImageAltTooLong,
        Rule::H1OnePerPage,
        Rule::KeywordsMeta,
        Rule::WordcountTooShort,
        Rule::Wordcount,
        Rule::RobotsTxt,
        Rule::BrokenLink,
        Rule::ServerError,
    ];

    /// Catalog key of the rule
    pub fn id(self) -> &'static str {
        match self {
            Rule::TitleMissing => "TITLE_MISSING",
            Rule::TitleTooShort => "TITLE_TOO_SHORT",
            Rule::TitleTooLong => "TITLE_TOO_LONG",
            Rule::TitleLength => "TITLE_LENGTH",
            Rule::TitleTooGeneric => "TITLE_TOO_GENERIC",
            Rule::TitleInformative => "TITLE_INFORMATIVE",
            Rule::TitleKeywordStuffed => "TITLE_KEYWORD_STUFFED",
            Rule::TitleDuplicated => "TITLE_DUPLICATED",
            Rule::TitleUnique => "TITLE_UNIQUE",
            Rule::DescriptionMissing => "DESCRIPTION_MISSING",
            Rule::DescriptionTooShort => "DESCRIPTION_TOO_SHORT",
            Rule::DescriptionTooLong => "DESCRIPTION_TOO_LONG",
            Rule::DescriptionLength => "DESCRIPTION_LENGTH",
            Rule::DescriptionTooGeneric => "DESCRIPTION_TOO_GENERIC",
            Rule::DescriptionInformative => "DESCRIPTION_INFORMATIVE",
            Rule::DescriptionKeywordStuffed => "DESCRIPTION_KEYWORD_STUFFED",
            Rule::DescriptionDuplicated => "DESCRIPTION_DUPLICATED",
            Rule::DescriptionUnique => "DESCRIPTION_UNIQUE",
            Rule::UrlTooLong => "URL_TOO_LONG",
            Rule::UrlTooGeneric => "URL_TOO_GENERIC",
            Rule::UrlKeywordStuffed => "URL_KEYWORD_STUFFED",
            Rule::UrlTooDeep => "URL_TOO_DEEP",
            Rule::UrlNotCanonical => "URL_NOT_CANONICAL",
            Rule::UrlCanonical => "URL_CANONICAL",
            Rule::UrlCapitalized => "URL_CAPITALIZED",
            Rule::UrlCorrectlyCased => "URL_CORRECTLY_CASED",
            Rule::ImageLinkAltMissing => "IMAGE_LINK_ALT_MISSING",
            Rule::ImageLinkAlt => "IMAGE_LINK_ALT",
            Rule::AnchorTextMissing => "ANCHOR_TEXT_MISSING",
            Rule::AnchorTextTooShort => "ANCHOR_TEXT_TOO_SHORT",
            Rule::AnchorTextTooLong => "ANCHOR_TEXT_TOO_LONG",
            Rule::AnchorTextTooGeneric => "ANCHOR_TEXT_TOO_GENERIC",
            Rule::AnchorHrefTooLong => "ANCHOR_HREF_TOO_LONG",
            Rule::AnchorHrefEqualsText => "ANCHOR_HREF_EQUALS_TEXT",
            Rule::AnchorNoFollow => "ANCHOR_NO_FOLLOW",
            Rule::ImageSrcMissing => "IMAGE_SRC_MISSING",
            Rule::ImageSrcTooLong => "IMAGE_SRC_TOO_LONG",
            Rule::ImageAltMissing => "IMAGE_ALT_MISSING",
            Rule::ImageAltTooLong => "IMAGE_ALT_TOO_LONG",
            Rule::H1OnePerPage => "H1_ONE_PER_PAGE",
            Rule::KeywordsMeta => "KEYWORDS_META",
            Rule::WordcountTooShort => "WORDCOUNT_TOO_SHORT",
            Rule::Wordcount => "WORDCOUNT",
            Rule::RobotsTxt => "ROBOTS.TXT",
            Rule::BrokenLink => "BROKEN_LINK",
            Rule::ServerError => "SERVER_ERROR",
        }
    }

    /// Message text in the warnings catalog, if the rule can be raised as an issue
    pub fn warning(self) -> Option<&'static str> {
        let text = match self {
            Rule::TitleMissing => "Title tag is missing or empty.",
            Rule::TitleTooShort => {
                "Avoid using extremely short titles that are unhelpful to users (less than 10 characters)."
            }
            Rule::TitleTooLong => {
                "Avoid using extremely lengthy titles that are unhelpful to users (more than 70 characters)."
            }
            Rule::TitleTooGeneric => {
                "Avoid using default or vague titles like 'Untitled' or 'New Page 1'."
            }
            Rule::TitleKeywordStuffed => "Avoid stuffing unneeded keywords in your title tags.",
            Rule::TitleDuplicated => "Avoid using a duplicate title tag across your website.",
            Rule::DescriptionMissing => "Description is missing.",
            Rule::DescriptionTooShort => {
                "Description is too short (less than 140 characters). Descriptions are important as Google may use them as page snippets."
            }
            Rule::DescriptionTooLong => {
                "Description is too long (more than 255 characters). Descriptions are important as Google may use them as page snippets."
            }
            Rule::DescriptionTooGeneric => "Description is too generic.",
            Rule::DescriptionKeywordStuffed => "Avoid keyword stuffing in the description.",
            Rule::DescriptionDuplicated => {
                "Avoid using a duplicate description across your website."
            }
            Rule::UrlTooLong => "Avoid using URLs with unnecessary parameters and IDs.",
            Rule::UrlTooGeneric => "Avoid choosing generic page names like 'page1.html'.",
            Rule::UrlKeywordStuffed => "Avoid keyword stuffing in the url.",
            Rule::UrlTooDeep => {
                "Avoid having deep nesting of subdirectories (more than 3 levels deep) like '.../dir1/dir2/dir3/dir4/dir5/dir6/page.html'."
            }
            Rule::UrlNotCanonical => {
                "Only one version of a URL (Canonical URL) should be used to reach a document"
            }
            Rule::UrlCapitalized => {
                "Avoid using uppercase characters in the URL. Many users expect lower-case URLs and remember them better."
            }
            Rule::ImageLinkAltMissing => "Image link missing Alt tag.",
            Rule::AnchorTextMissing => "Anchor missing title tag or text.",
            Rule::AnchorTextTooShort => "Anchor text too short (3 characters or less).",
            Rule::AnchorTextTooLong => "Anchor text too long (more than 100 characters).",
            Rule::AnchorTextTooGeneric => "Anchor text contains generic text.",
            Rule::AnchorHrefTooLong => {
                "Avoid using lengthy links with unnecessary parameters (more than 100 characters)."
            }
            Rule::AnchorHrefEqualsText => "Avoid using the page URL as the anchor text.",
            Rule::AnchorNoFollow => "Avoid passing your reputation to nonrelevant websites.",
            Rule::ImageSrcMissing => "Image missing src tag.",
            Rule::ImageSrcTooLong => "Avoid writing lengthy filenames (more than 15 characters).",
            Rule::ImageAltMissing => "Image missing alt tag.",
            Rule::ImageAltTooLong => {
                "Avoid writing excessively long alt text that could be spammy."
            }
            Rule::H1OnePerPage => "Each page should have at least one h1 tag",
            Rule::KeywordsMeta => {
                "The Keywords Metatag should be avoided as they are a spam indicator and no longer used by Search Engines."
            }
            Rule::WordcountTooShort => {
                "The average word count for top-ranking content is 1,140 - 1,285 words."
            }
            Rule::RobotsTxt => "robots.txt is missing.",
            Rule::BrokenLink => "Avoid having broken links in your sitemap or website.",
            Rule::ServerError => "Unexpected response code received.",
            _ => return None,
        };
        Some(text)
    }

    /// Message text in the achievements catalog, if the rule can be earned
    pub fn achievement(self) -> Option<&'static str> {
        let text = match self {
            Rule::TitleLength => "Title length is between 10 and 70 characters.",
            Rule::TitleInformative => "Title is informative.",
            Rule::TitleUnique => "This page has a unique title tag.",
            Rule::DescriptionLength => {
                "Descriptions are important as Google may use them as page snippets."
            }
            Rule::DescriptionInformative => {
                "Description is informative and helps give context to customers trying to get to your page."
            }
            Rule::DescriptionUnique => "This page has a unique description.",
            Rule::UrlCanonical => "Using canonical URLs helps avoid duplicate content.",
            Rule::UrlCorrectlyCased => {
                "URL is lowercase. Many users expect lower-case URLs and remember them better."
            }
            Rule::ImageLinkAlt => "Image link contains an alt tag.",
            Rule::AnchorNoFollow => "Good use of nofollow to nonrelevant websites.",
            Rule::H1OnePerPage => "Page contains a single H1 Heading",
            Rule::Wordcount => "You have provided great comprehensive coverage of your topic.",
            Rule::RobotsTxt => "robots.txt detected.",
            _ => return None,
        };
        Some(text)
    }
}

/// Every entry of the warnings catalog
pub fn warnings() -> Vec<RuleMessage> {
    Rule::ALL
        .iter()
        .filter_map(|rule| {
            rule.warning().map(|text| RuleMessage {
                id: rule.id(),
                text,
            })
        })
        .collect()
}

/// Every entry of the achievements catalog
pub fn achievements() -> Vec<RuleMessage> {
    Rule::ALL
        .iter()
        .filter_map(|rule| {
            rule.achievement().map(|text| RuleMessage {
                id: rule.id(),
                text,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_rule_has_a_message() {
        for rule in Rule::ALL {
            assert!(
                rule.warning().is_some() || rule.achievement().is_some(),
                "{} has no catalog entry",
                rule.id()
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = Rule::ALL.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), Rule::ALL.len());
    }

    #[test]
    fn test_shared_ids_carry_both_messages() {
        for rule in [Rule::H1OnePerPage, Rule::AnchorNoFollow, Rule::RobotsTxt] {
            assert!(rule.warning().is_some());
            assert!(rule.achievement().is_some());
            assert_ne!(rule.warning(), rule.achievement());
        }
    }

    #[test]
    fn test_catalogs_are_keyed_by_id() {
        let warnings = warnings();
        assert!(warnings.iter().any(|m| m.id == "TITLE_MISSING"));
        assert!(!warnings.iter().any(|m| m.id == "TITLE_UNIQUE"));

        let achievements = achievements();
        assert!(achievements.iter().any(|m| m.id == "ROBOTS.TXT"));
        assert!(!achievements.iter().any(|m| m.id == "BROKEN_LINK"));
    }
}
