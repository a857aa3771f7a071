use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FraudError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model artifact not found: {}", .0.display())]
    MissingArtifact(PathBuf),

    #[error("Malformed {artifact} artifact: {reason}")]
    MalformedArtifact {
        artifact: &'static str,
        reason: String,
    },

    #[error("Dimension mismatch: {context} expects {expected} features, found {found}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Vocabulary drift: {missing} feature-list term(s) unknown to the vectorizer (first: {first:?})")]
    VocabularyDrift { missing: usize, first: String },

    #[error("Unsupported file type: {0}. Only .txt and .eml are supported.")]
    UnsupportedFileType(String),

    #[error("Malformed email: {0}")]
    MalformedEmail(String),
}

impl FraudError {
    pub(crate) fn malformed(artifact: &'static str, reason: impl Into<String>) -> Self {
        FraudError::MalformedArtifact {
            artifact,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FraudError>;
