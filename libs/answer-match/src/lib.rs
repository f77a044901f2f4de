//! Answer matching for spoken practice sessions.
//!
//! Provides:
//! - Text normalization and exact/containment scoring
//! - Speech-delay mode: phonetic codes (Metaphone, Soundex) and
//!   child-speech variant generation
//! - Curated variant lexicon, extensible from JSON
//! - Fuzzy fallback (bounded Levenshtein distance)

pub mod error;
pub mod fuzzy;
pub mod lexicon;
pub mod matching;
pub mod normalize;
pub mod phonetic;
pub mod types;
pub mod variants;

pub use error::{LexiconError, Result};
pub use fuzzy::fuzzy_score;
pub use lexicon::Lexicon;
pub use matching::{match_answer, AnswerMatcher};
pub use normalize::normalize_text;
pub use phonetic::phonetic_similarity;
pub use types::{MatchEvaluation, MatchOptions, MatchStrategy, DEFAULT_THRESHOLD};
pub use variants::speech_delay_variants;
