use super::{MIN_WORD_COUNT, PageAnalysis};
use crate::parsers::Document;
use crate::parsers::text::{frequency_rank, tokenize};
use crate::rules::Rule;

impl PageAnalysis<'_> {
    /// Requires at least one h1 and remembers the raw h1 texts for keyword rendering
    pub(crate) fn analyze_headings(&mut self, doc: &dyn Document) {
        self.headers = doc
            .elements("h1")
            .into_iter()
            .map(|h| h.text)
            .collect();

        if self.headers.is_empty() {
            self.warn(Rule::H1OnePerPage, None);
        } else {
            self.earn(Rule::H1OnePerPage, None);
        }
    }

    /// Flags the keywords meta tag and ranks the terms of the visible text
    pub(crate) fn analyze_keywords(&mut self, doc: &dyn Document) {
        if let Some(meta) = doc.first_with_attr("meta", "name", "keywords") {
            self.warn(Rule::KeywordsMeta, Some(meta.attr_or_empty("content").to_string()));
        }

        let page_text = doc
            .text_nodes()
            .into_iter()
            .filter(|node| node.is_visible())
            .map(|node| node.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        self.ranking = frequency_rank(&tokenize(&page_text));
    }

    /// Counts every non stop word of the visible text; run after `analyze_keywords`
    pub(crate) fn analyze_wordcount(&mut self) {
        let count: usize = self.ranking.iter().map(|(_, frequency)| frequency).sum();

        if count < MIN_WORD_COUNT {
            self.warn(Rule::WordcountTooShort, Some(count.to_string()));
        } else {
            self.earn(Rule::Wordcount, Some(count.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::HtmlDocument;

    fn run(html: &str) -> PageAnalysis<'static> {
        let doc = HtmlDocument::parse(html);
        let mut page = PageAnalysis::new("http://www.example.com/");
        page.analyze_headings(&doc);
        page.analyze_keywords(&doc);
        page.analyze_wordcount();
        page
    }

    #[test]
    fn test_missing_h1() {
        let page = run("<h2>Only a subheading</h2>");
        assert!(page.issue_rules().contains(&Rule::H1OnePerPage));
        assert!(!page.achievement_rules().contains(&Rule::H1OnePerPage));
    }

    #[test]
    fn test_h1_collected() {
        let page = run("<h1> Crawling </h1><h1>Parsing</h1>");
        assert!(page.achievement_rules().contains(&Rule::H1OnePerPage));
        assert_eq!(page.headers, vec![" Crawling ", "Parsing"]);
    }

    #[test]
    fn test_keywords_meta() {
        let page = run(r#"<meta name="keywords" content="seo, crawler">"#);
        let finding = page.issues.iter().find(|f| f.rule == Rule::KeywordsMeta).unwrap();
        assert_eq!(finding.value.as_deref(), Some("seo, crawler"));

        let page = run("<p>no keywords meta</p>");
        assert!(!page.issue_rules().contains(&Rule::KeywordsMeta));
    }

    #[test]
    fn test_hidden_text_is_not_counted() {
        let page = run(
            r#"<html><head><title>Hidden title</title><style>.crawler { }</style></head>
<body><script>var crawler = 1;</script><!-- crawler comment --><p>crawler</p></body></html>"#,
        );
        assert_eq!(page.ranking, vec![("crawler".to_string(), 1)]);
    }

    #[test]
    fn test_word_count_value() {
        let page = run("<p>rust crawler rust</p>");
        let finding = page
            .issues
            .iter()
            .find(|f| f.rule == Rule::WordcountTooShort)
            .unwrap();
        assert_eq!(finding.value.as_deref(), Some("3"));
    }
}
