//! Stack error types.

/// Stack construction error.
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    #[error("stack id must not be empty")]
    EmptyId,
    #[error("custom domain needs both domainName and certificateArn (missing {0})")]
    IncompleteCustomDomain(&'static str),
    #[error("failed to serialize stack: {0}")]
    Serialize(#[from] serde_json::Error),
}
