use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Failed to parse issue payload: {0}")]
    IssuePayload(String),

    #[error("Failed to parse document payload: {0}")]
    DocumentPayload(String),
}
