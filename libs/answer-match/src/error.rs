//! Error types for answer-match.

use thiserror::Error;

/// Result type alias using LexiconError.
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Errors that can occur while loading a variant lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("invalid lexicon JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("empty headword in lexicon entry")]
    EmptyHeadword,

    #[error("no usable variants for {word:?}")]
    NoVariants { word: String },
}
