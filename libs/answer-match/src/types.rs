//! Option and result types for answer scoring.

use serde::{Deserialize, Serialize};

/// Default sensitivity of the fuzzy fallback.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Options controlling how a response is scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Recognize child-speech pronunciations (phonetic and variant layers).
    pub speech_delay_mode: bool,
    /// Fuzzy fallback sensitivity between 0.0 and 1.0; lower is stricter.
    /// Has no effect on the exact, containment, or speech-delay layers.
    pub threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            speech_delay_mode: false,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Pipeline stage that produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    NoMatch,
    Exact,
    TargetInResponse,
    ResponseInTarget,
    Phonetic,
    VariantExact,
    VariantContainment,
    Fuzzy,
}

impl Default for MatchStrategy {
    fn default() -> Self {
        Self::NoMatch
    }
}

impl MatchStrategy {
    /// Get the strategy name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoMatch => "no_match",
            Self::Exact => "exact",
            Self::TargetInResponse => "target_in_response",
            Self::ResponseInTarget => "response_in_target",
            Self::Phonetic => "phonetic",
            Self::VariantExact => "variant_exact",
            Self::VariantContainment => "variant_containment",
            Self::Fuzzy => "fuzzy",
        }
    }
}

/// Result of scoring a response against the expected answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEvaluation {
    /// Similarity score between 0.0 and 1.0.
    pub score: f64,
    /// The stage that produced the score.
    pub strategy: MatchStrategy,
    /// Normalized response (for display).
    pub response_normalized: String,
    /// Normalized expected answer (for display).
    pub target_normalized: String,
}
