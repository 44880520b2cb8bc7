use crate::rules::Rule;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Whether a finding is an issue or a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    Warning,
    Achievement,
}

/// One issue or achievement emitted by a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub rule: Rule,
    /// Contextual detail, e.g. the offending URL or text
    pub value: Option<String>,
}

impl Finding {
    pub fn warning(rule: Rule, value: Option<String>) -> Self {
        Self {
            kind: FindingKind::Warning,
            rule,
            value,
        }
    }

    pub fn achievement(rule: Rule, value: Option<String>) -> Self {
        Self {
            kind: FindingKind::Achievement,
            rule,
            value,
        }
    }

    /// Message text resolved against the catalog matching the kind
    pub fn message(&self) -> &'static str {
        let text = match self.kind {
            FindingKind::Warning => self.rule.warning(),
            FindingKind::Achievement => self.rule.achievement(),
        };
        text.unwrap_or_else(|| self.rule.id())
    }
}

impl Serialize for Finding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let key = match self.kind {
            FindingKind::Warning => "warning",
            FindingKind::Achievement => "achievement",
        };
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(key, self.message())?;
        map.serialize_entry("value", &self.value)?;
        map.end()
    }
}

/// A top keyword of a page and where else it shows up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    #[serde(rename = "keyword")]
    pub term: String,
    pub frequency: usize,
    pub in_title: bool,
    pub in_description: bool,
    #[serde(rename = "in_header")]
    pub in_heading: bool,
}

/// Analysis result of one crawled page
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    pub url: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<KeywordEntry>,
    pub issues: Vec<Finding>,
    #[serde(rename = "achieved")]
    pub achievements: Vec<Finding>,
}

impl PageResult {
    /// Whether an issue for the given rule was raised on this page
    pub fn has_issue(&self, rule: Rule) -> bool {
        self.issues.iter().any(|f| f.rule == rule)
    }

    /// Whether an achievement for the given rule was earned on this page
    pub fn has_achievement(&self, rule: Rule) -> bool {
        self.achievements.iter().any(|f| f.rule == rule)
    }
}

/// Site-wide findings (robots.txt, broken links, server errors)
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteSummary {
    pub issues: Vec<Finding>,
    pub achieved: Vec<Finding>,
}

/// The full output of one audit
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub pages: Vec<PageResult>,
    pub site: SiteSummary,
}

impl Report {
    /// Render as indented JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
