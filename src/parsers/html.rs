use crate::parsers::{Document, Element, TextNode};
use scraper::{ElementRef, Html, Node, Selector};

/// HTML document backed by scraper
pub struct HtmlDocument {
    doc: Html,
}

impl HtmlDocument {
    /// Parses an HTML page. html5ever recovers from any malformed input, so
    /// this never fails.
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    fn select(&self, tag: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(tag) {
            Ok(selector) => self.doc.select(&selector).collect(),
            Err(e) => {
                ::log::warn!("Invalid selector {}: {:?}", tag, e);
                Vec::new()
            }
        }
    }
}

impl Document for HtmlDocument {
    fn title(&self) -> String {
        self.select("title")
            .first()
            .map(|title| title.text().collect())
            .unwrap_or_default()
    }

    fn elements(&self, tag: &str) -> Vec<Element> {
        let elements = self
            .select(tag)
            .into_iter()
            .map(|el| {
                let mut element = convert(el);
                element.descendants = el
                    .descendants()
                    .skip(1)
                    .filter_map(ElementRef::wrap)
                    .map(convert)
                    .collect();
                element
            })
            .collect::<Vec<_>>();

        ::log::trace!("Found {} <{}> elements", elements.len(), tag);
        elements
    }

    fn text_nodes(&self) -> Vec<TextNode> {
        self.doc
            .tree
            .nodes()
            .filter_map(|node| {
                let Node::Text(text) = node.value() else {
                    return None;
                };
                let parent = node
                    .parent()
                    .and_then(|p| p.value().as_element().map(|e| e.name().to_string()));
                Some(TextNode {
                    text: (**text).to_string(),
                    parent,
                })
            })
            .collect()
    }
}

fn convert(el: ElementRef<'_>) -> Element {
    Element {
        tag: el.value().name().to_string(),
        attributes: el
            .value()
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        text: el.text().collect(),
        descendants: Vec::new(),
    }
}
