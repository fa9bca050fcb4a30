pub mod types;

pub use types::{AnnotationReport, CitationToken, DecorationSpan, Issue, ReviewDocument};
