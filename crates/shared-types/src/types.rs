use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDocument {
    pub id: String,
    pub title: String,
    pub plain_text: String, // Flattened projection of the rich-text document
    pub updated_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub original_text: String, // Offending snippet, may contain markup
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationSpan {
    pub start: usize, // Byte offset into the document snapshot
    pub end: usize,   // End byte offset, exclusive
    pub style_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationReport {
    pub document_id: String,
    pub spans: Vec<DecorationSpan>,
    pub computed_at: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CitationToken {
    Url {
        value: String,
        domain: String,
        display_name: String,
    },
    Text {
        value: String,
    },
}

impl CitationToken {
    pub fn value(&self) -> &str {
        match self {
            CitationToken::Url { value, .. } => value,
            CitationToken::Text { value } => value,
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, CitationToken::Url { .. })
    }
}
