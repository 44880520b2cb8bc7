use super::{
    MAX_ANCHOR_TEXT_LENGTH, MAX_HREF_LENGTH, MAX_IMAGE_ALT_LENGTH, MAX_IMAGE_SRC_LENGTH,
    MIN_ANCHOR_TEXT_LENGTH, PageAnalysis,
};
use crate::parsers::Document;
use crate::rules::Rule;
use crate::utils::link_host;

const GENERIC_ANCHOR_WORDS: [&str; 3] = ["click here", "page", "article"];

impl PageAnalysis<'_> {
    /// Anchor text, image links, href length and nofollow on external links
    pub(crate) fn analyze_anchors(&mut self, doc: &dyn Document) {
        for anchor in doc.elements("a") {
            let Some(href) = anchor.attr("href") else {
                continue;
            };
            let text = anchor.text.trim().to_lowercase();

            if let Some(image) = anchor.find("img") {
                if image.attr_or_empty("alt").is_empty() {
                    self.warn(Rule::ImageLinkAltMissing, Some(href.to_string()));
                } else {
                    self.earn(Rule::ImageLinkAlt, Some(href.to_string()));
                }
            } else {
                let length = text.chars().count();
                if anchor.attr_or_empty("title").is_empty() && text.is_empty() {
                    self.warn(Rule::AnchorTextMissing, Some(href.to_string()));
                } else if length <= MIN_ANCHOR_TEXT_LENGTH {
                    self.warn(Rule::AnchorTextTooShort, Some(text.clone()));
                } else if length > MAX_ANCHOR_TEXT_LENGTH {
                    self.warn(Rule::AnchorTextTooLong, Some(text.clone()));
                }

                if GENERIC_ANCHOR_WORDS.iter().any(|w| text.contains(w)) {
                    self.warn(Rule::AnchorTextTooGeneric, Some(text.clone()));
                }
            }

            if href.chars().count() > MAX_HREF_LENGTH {
                self.warn(Rule::AnchorHrefTooLong, Some(href.to_string()));
            }

            if text == href {
                self.warn(Rule::AnchorHrefEqualsText, Some(href.to_string()));
            }

            if self.is_external(href) {
                if anchor.has_token("rel", "nofollow") {
                    self.earn(Rule::AnchorNoFollow, Some(href.to_string()));
                } else {
                    self.warn(Rule::AnchorNoFollow, Some(href.to_string()));
                }
            }
        }
    }

    /// Image source and alt text hygiene
    pub(crate) fn analyze_images(&mut self, doc: &dyn Document) {
        for image in doc.elements("img") {
            let src = [image.attr("src"), image.attr("data-src")]
                .into_iter()
                .flatten()
                .find(|s| !s.is_empty());
            let Some(src) = src else {
                self.warn(Rule::ImageSrcMissing, None);
                continue;
            };

            let alt = image.attr_or_empty("alt");
            if alt.is_empty() {
                self.warn(Rule::ImageAltMissing, Some(src.to_string()));
            }

            if src.chars().count() > MAX_IMAGE_SRC_LENGTH {
                self.warn(Rule::ImageSrcTooLong, Some(src.to_string()));
            }

            if alt.chars().count() > MAX_IMAGE_ALT_LENGTH {
                self.warn(Rule::ImageAltTooLong, Some(alt.to_string()));
            }
        }
    }

    /// A link leaves the site when it names a host and does not contain the page URL
    fn is_external(&self, href: &str) -> bool {
        !link_host(href).is_empty() && !href.contains(self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::HtmlDocument;

    const PAGE_URL: &str = "http://www.example.com/";

    fn anchors(body: &str) -> (Vec<Rule>, Vec<Rule>) {
        let mut page = PageAnalysis::new(PAGE_URL);
        page.analyze_anchors(&HtmlDocument::parse(body));
        (page.issue_rules(), page.achievement_rules())
    }

    fn images(body: &str) -> Vec<Rule> {
        let mut page = PageAnalysis::new(PAGE_URL);
        page.analyze_images(&HtmlDocument::parse(body));
        page.issue_rules()
    }

    #[test]
    fn test_no_anchors_or_images() {
        let body = "<html><body><p>Plain text only</p></body></html>";
        let (issues, achieved) = anchors(body);
        assert!(issues.is_empty());
        assert!(achieved.is_empty());
        assert!(images(body).is_empty());
    }

    #[test]
    fn test_good_internal_anchor() {
        let (issues, achieved) = anchors(r#"<a href="/guides">Crawling guides</a>"#);
        assert!(issues.is_empty());
        assert!(achieved.is_empty());
    }

    #[test]
    fn test_anchor_without_href_is_ignored() {
        let (issues, _) = anchors(r#"<a name="top"></a>"#);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_anchor_text_missing() {
        let (issues, _) = anchors(r#"<a href="/guides"></a>"#);
        assert_eq!(issues, vec![Rule::AnchorTextMissing]);
    }

    #[test]
    fn test_anchor_text_length() {
        let (issues, _) = anchors(r#"<a href="/guides">Go</a>"#);
        assert_eq!(issues, vec![Rule::AnchorTextTooShort]);

        let (issues, _) = anchors(r#"<a href="/guides">Guides</a>"#);
        assert!(issues.is_empty());

        let long = format!(r#"<a href="/guides">{}</a>"#, "w".repeat(101));
        let (issues, _) = anchors(&long);
        assert_eq!(issues, vec![Rule::AnchorTextTooLong]);
    }

    #[test]
    fn test_anchor_text_generic() {
        let (issues, _) = anchors(r#"<a href="/guides">Click here for more</a>"#);
        assert_eq!(issues, vec![Rule::AnchorTextTooGeneric]);
    }

    #[test]
    fn test_anchor_href_checks() {
        let href = format!("/{}", "h".repeat(100));
        let (issues, _) = anchors(&format!(r#"<a href="{}">Long link</a>"#, href));
        assert_eq!(issues, vec![Rule::AnchorHrefTooLong]);

        let (issues, _) = anchors(r#"<a href="/guides">/guides</a>"#);
        assert_eq!(issues, vec![Rule::AnchorHrefEqualsText]);
    }

    #[test]
    fn test_image_links() {
        let (issues, achieved) = anchors(r#"<a href="/home"><img src="logo.png"></a>"#);
        assert_eq!(issues, vec![Rule::ImageLinkAltMissing]);
        assert!(achieved.is_empty());

        let (issues, achieved) = anchors(r#"<a href="/home"><img src="logo.png" alt="Home"></a>"#);
        assert!(issues.is_empty());
        assert_eq!(achieved, vec![Rule::ImageLinkAlt]);
    }

    #[test]
    fn test_external_links_need_nofollow() {
        let (issues, achieved) = anchors(r#"<a href="https://other.test/shop">Other shop</a>"#);
        assert_eq!(issues, vec![Rule::AnchorNoFollow]);
        assert!(achieved.is_empty());

        let (issues, achieved) =
            anchors(r#"<a href="https://other.test/shop" rel="nofollow">Other shop</a>"#);
        assert!(issues.is_empty());
        assert_eq!(achieved, vec![Rule::AnchorNoFollow]);
    }

    #[test]
    fn test_links_into_own_site_are_internal() {
        let (issues, achieved) = anchors(r#"<a href="http://www.example.com/guides">Guides</a>"#);
        assert!(issues.is_empty());
        assert!(achieved.is_empty());
    }

    #[test]
    fn test_image_src_missing() {
        assert_eq!(images(r#"<img alt="Logo">"#), vec![Rule::ImageSrcMissing]);
        assert_eq!(images(r#"<img src="" alt="Logo">"#), vec![Rule::ImageSrcMissing]);
    }

    #[test]
    fn test_image_data_src() {
        assert!(images(r#"<img data-src="logo.png" alt="Logo">"#).is_empty());
    }

    #[test]
    fn test_image_alt_and_src_length() {
        assert_eq!(images(r#"<img src="logo.png">"#), vec![Rule::ImageAltMissing]);
        assert_eq!(
            images(r#"<img src="a-very-long-file-name.png" alt="Logo">"#),
            vec![Rule::ImageSrcTooLong]
        );
        let alt = "a".repeat(41);
        assert_eq!(
            images(&format!(r#"<img src="logo.png" alt="{}">"#, alt)),
            vec![Rule::ImageAltTooLong]
        );
    }
}
