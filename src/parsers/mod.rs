pub mod html;
pub mod sitemap;
pub mod stop_words;
pub mod text;

#[cfg(test)]
mod tests;

pub use html::HtmlDocument;

use std::collections::HashMap;

/// Parent tags whose text never renders on the page
const HIDDEN_PARENTS: [&str; 5] = ["style", "script", "head", "title", "meta"];

/// An element pulled out of a parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name
    pub tag: String,
    pub attributes: HashMap<String, String>,
    /// Concatenated text of all descendant text nodes
    pub text: String,
    /// Descendant elements in document order (their own descendants are not filled)
    pub descendants: Vec<Element>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value or "" when absent
    pub fn attr_or_empty(&self, name: &str) -> &str {
        self.attr(name).unwrap_or("")
    }

    /// True if the whitespace separated attribute contains `token`
    pub fn has_token(&self, name: &str, token: &str) -> bool {
        self.attr(name)
            .is_some_and(|value| value.split_whitespace().any(|t| t.eq_ignore_ascii_case(token)))
    }

    /// First descendant with the given tag
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.descendants.iter().find(|e| e.tag == tag)
    }
}

/// A text node with the name of the element that contains it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    /// `None` when the text hangs directly off the document root
    pub parent: Option<String>,
}

impl TextNode {
    /// Whether a browser would show this text to a reader
    pub fn is_visible(&self) -> bool {
        match &self.parent {
            Some(parent) => !HIDDEN_PARENTS.contains(&parent.as_str()),
            None => false,
        }
    }
}

/// Read access to a parsed page, independent of the parser behind it
pub trait Document {
    /// Text of the first `<title>` element, "" if there is none
    fn title(&self) -> String;

    /// Every element with the given tag name, in document order
    fn elements(&self, tag: &str) -> Vec<Element>;

    /// Every text node (comments excluded), in document order
    fn text_nodes(&self) -> Vec<TextNode>;

    /// First `tag` element whose `attr` is exactly `value`
    fn first_with_attr(&self, tag: &str, attr: &str, value: &str) -> Option<Element> {
        self.elements(tag)
            .into_iter()
            .find(|e| e.attr(attr) == Some(value))
    }
}
