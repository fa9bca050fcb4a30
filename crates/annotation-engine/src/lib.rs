//! Text-annotation core for the compliance review dashboard
//!
//! Two independent annotators, both pure and synchronous:
//! - `highlight`: finds unresolved issue snippets in a document's
//!   plain-text projection and emits decoration spans for the editor's
//!   rendering pass.
//! - `citations`: splits an assistant response into url and text citation
//!   tokens for the citation-badge renderer.
//!
//! The rendering layer owns mapping span offsets back into its own
//! document model; this crate only computes annotations over a snapshot.

pub mod citations;
pub mod error;
pub mod highlight;
pub mod sanitize;

use shared_types::{AnnotationReport, DecorationSpan, Issue, ReviewDocument};

pub use citations::extract_citations;
pub use error::AnnotationError;
pub use highlight::{compute_decorations, ISSUE_HIGHLIGHT_CLASS};

/// AnnotationEngine entry point
pub struct AnnotationEngine;

impl AnnotationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Recompute the full span set for a document snapshot
    pub fn annotate(&self, document: &ReviewDocument, issues: &[Issue]) -> AnnotationReport {
        AnnotationReport {
            document_id: document.id.clone(),
            spans: highlight::compute_decorations(&document.plain_text, issues),
            computed_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    /// Compute spans over raw text (for testing)
    pub fn annotate_text(&self, text: &str, issues: &[Issue]) -> Vec<DecorationSpan> {
        highlight::compute_decorations(text, issues)
    }
}

impl Default for AnnotationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an issue list as delivered by the review service (a JSON array)
pub fn issues_from_json(json: &str) -> Result<Vec<Issue>, AnnotationError> {
    serde_json::from_str(json).map_err(|e| AnnotationError::IssuePayload(e.to_string()))
}

/// Parse a document snapshot as delivered by the editor collaborator
pub fn document_from_json(json: &str) -> Result<ReviewDocument, AnnotationError> {
    serde_json::from_str(json).map_err(|e| AnnotationError::DocumentPayload(e.to_string()))
}
