use crate::parsers::{Document, HtmlDocument};

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html>
<head>
  <title>Rust Crawlers</title>
  <meta name="description" content="All about crawlers">
  <style>body { color: red; }</style>
  <script>var hidden = 1;</script>
</head>
<body>
  <!-- a comment -->
  <h1>Crawling</h1>
  <p>Visible <b>text</b></p>
  <a href="/home" title="Home"><img src="logo.png" alt="Logo"></a>
</body>
</html>"#;

    #[test]
    fn test_title() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.title(), "Rust Crawlers");
        assert_eq!(HtmlDocument::parse("<p>no title</p>").title(), "");
    }

    #[test]
    fn test_first_with_attr() {
        let doc = HtmlDocument::parse(PAGE);
        let meta = doc.first_with_attr("meta", "name", "description").unwrap();
        assert_eq!(meta.attr("content"), Some("All about crawlers"));
        assert!(doc.first_with_attr("meta", "name", "keywords").is_none());
    }

    #[test]
    fn test_elements_with_descendants() {
        let doc = HtmlDocument::parse(PAGE);
        let anchors = doc.elements("a");
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].attr("href"), Some("/home"));
        let img = anchors[0].find("img").unwrap();
        assert_eq!(img.attr_or_empty("alt"), "Logo");
        assert_eq!(img.attr_or_empty("title"), "");
    }

    #[test]
    fn test_inner_text_concatenates_children() {
        let doc = HtmlDocument::parse(PAGE);
        let paragraphs = doc.elements("p");
        assert_eq!(paragraphs[0].text, "Visible text");
    }

    #[test]
    fn test_visible_text_nodes() {
        let doc = HtmlDocument::parse(PAGE);
        let visible: Vec<String> = doc
            .text_nodes()
            .into_iter()
            .filter(|n| n.is_visible())
            .map(|n| n.text.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        assert_eq!(visible, vec!["Crawling", "Visible", "text"]);
    }

    #[test]
    fn test_has_token() {
        let doc = HtmlDocument::parse(
            r#"<link rel="alternate canonical" href="http://a.test/"><a href="x" rel="NoFollow noopener">x</a>"#,
        );
        assert!(doc.elements("link")[0].has_token("rel", "canonical"));
        assert!(doc.elements("a")[0].has_token("rel", "nofollow"));
        assert!(!doc.elements("a")[0].has_token("title", "nofollow"));
    }
}
