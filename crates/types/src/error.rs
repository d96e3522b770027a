use thiserror::Error;

/// Errors raised while turning an incoming record into a [`crate::Document`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unsupported document type '{0}'")]
    UnsupportedDocumentType(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::MalformedInput(err.to_string())
    }
}
