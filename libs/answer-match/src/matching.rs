//! Answer scoring for spoken practice sessions.
//!
//! Strategies run in a fixed priority order and the first hit wins: exact
//! and containment checks, then (in speech-delay mode) phonetic and
//! variant comparison, then the fuzzy fallback.

use crate::fuzzy::fuzzy_score;
use crate::lexicon::Lexicon;
use crate::normalize::normalize_text;
use crate::phonetic::phonetic_score;
use crate::types::{MatchEvaluation, MatchOptions, MatchStrategy};
use crate::variants::speech_delay_variants;

/// Score when the expected answer appears inside the response.
const TARGET_IN_RESPONSE_SCORE: f64 = 0.95;
/// Score when the response appears inside the expected answer.
const RESPONSE_IN_TARGET_SCORE: f64 = 0.9;
/// Score when the response is exactly a known variant of the target.
const VARIANT_EXACT_SCORE: f64 = 0.9;
/// Score for variant containment in either direction.
const VARIANT_CONTAINMENT_SCORE: f64 = 0.85;

/// Scores responses against expected answers.
#[derive(Debug, Clone, Default)]
pub struct AnswerMatcher {
    lexicon: Option<Lexicon>,
}

impl AnswerMatcher {
    /// Create a matcher backed by the built-in variant lexicon.
    pub fn new() -> Self {
        Self { lexicon: None }
    }

    /// Create a matcher with a custom variant lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Some(lexicon),
        }
    }

    fn lexicon(&self) -> &Lexicon {
        self.lexicon.as_ref().unwrap_or_else(|| Lexicon::builtin())
    }

    /// Score a response against the expected answer, from 0.0 to 1.0.
    pub fn score(&self, response: &str, target: &str, options: &MatchOptions) -> f64 {
        self.evaluate(response, target, options).score
    }

    /// Score a response and report which strategy produced the score.
    pub fn evaluate(&self, response: &str, target: &str, options: &MatchOptions) -> MatchEvaluation {
        let response_normalized = normalize_text(response);
        let target_normalized = normalize_text(target);

        let (score, strategy) = self.decide(&response_normalized, &target_normalized, options);
        tracing::debug!("scored {:.2} via {}", score, strategy.as_str());

        MatchEvaluation {
            score,
            strategy,
            response_normalized,
            target_normalized,
        }
    }

    fn decide(&self, response: &str, target: &str, options: &MatchOptions) -> (f64, MatchStrategy) {
        if response.is_empty() || target.is_empty() {
            return (0.0, MatchStrategy::NoMatch);
        }
        if response == target {
            return (1.0, MatchStrategy::Exact);
        }
        if response.contains(target) {
            return (TARGET_IN_RESPONSE_SCORE, MatchStrategy::TargetInResponse);
        }
        if target.contains(response) {
            return (RESPONSE_IN_TARGET_SCORE, MatchStrategy::ResponseInTarget);
        }

        if options.speech_delay_mode {
            if let Some(hit) = self.speech_delay_hit(response, target) {
                return hit;
            }
            tracing::trace!("no phonetic or variant hit, trying fuzzy fallback");
        }

        match fuzzy_score(response, target, options) {
            Some(score) => (score, MatchStrategy::Fuzzy),
            None => (0.0, MatchStrategy::NoMatch),
        }
    }

    fn speech_delay_hit(&self, response: &str, target: &str) -> Option<(f64, MatchStrategy)> {
        if let Some(score) = phonetic_score(response, target) {
            return Some((score, MatchStrategy::Phonetic));
        }

        let target_variants = speech_delay_variants(target, self.lexicon());
        if target_variants.iter().any(|v| v.as_str() == response) {
            return Some((VARIANT_EXACT_SCORE, MatchStrategy::VariantExact));
        }
        if target_variants
            .iter()
            .any(|v| response.contains(v.as_str()) || v.contains(response))
        {
            return Some((VARIANT_CONTAINMENT_SCORE, MatchStrategy::VariantContainment));
        }

        let response_variants = speech_delay_variants(response, self.lexicon());
        if response_variants
            .iter()
            .any(|v| v.as_str() == target || target.contains(v.as_str()))
        {
            return Some((VARIANT_CONTAINMENT_SCORE, MatchStrategy::VariantContainment));
        }

        None
    }
}

/// Score a response against the expected answer using the built-in lexicon.
pub fn match_answer(response: &str, target: &str, options: &MatchOptions) -> f64 {
    AnswerMatcher::new().score(response, target, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let options = MatchOptions::default();
        assert_eq!(match_answer("blue", "blue", &options), 1.0);
        assert_eq!(match_answer("Blue!", "blue", &options), 1.0);
    }

    #[test]
    fn test_empty_inputs() {
        let options = MatchOptions::default();
        assert_eq!(match_answer("", "blue", &options), 0.0);
        assert_eq!(match_answer("blue", "", &options), 0.0);
        assert_eq!(match_answer("?!", "blue", &options), 0.0);
    }

    #[test]
    fn test_containment_scores() {
        let options = MatchOptions::default();
        assert_eq!(match_answer("the car is blue", "blue", &options), 0.95);
        assert_eq!(match_answer("blu", "blue", &options), 0.9);
    }

    #[test]
    fn test_containment_order() {
        // equal strings must hit the exact branch, not containment
        let options = MatchOptions::default();
        let matcher = AnswerMatcher::new();
        let evaluation = matcher.evaluate("blue", "BLUE", &options);
        assert_eq!(evaluation.strategy, MatchStrategy::Exact);
    }

    #[test]
    fn test_phonetic_match_in_speech_delay_mode() {
        let options = MatchOptions {
            speech_delay_mode: true,
            ..Default::default()
        };
        let matcher = AnswerMatcher::new();
        let evaluation = matcher.evaluate("blew", "blue", &options);
        assert_eq!(evaluation.strategy, MatchStrategy::Phonetic);
        assert!(evaluation.score >= 0.7 && evaluation.score <= 0.9);
    }

    #[test]
    fn test_curated_variant_in_speech_delay_mode() {
        let options = MatchOptions {
            speech_delay_mode: true,
            ..Default::default()
        };
        let matcher = AnswerMatcher::new();
        let evaluation = matcher.evaluate("wawa", "water", &options);
        assert_eq!(evaluation.strategy, MatchStrategy::VariantExact);
        assert_eq!(evaluation.score, 0.9);
    }

    #[test]
    fn test_variant_containment_in_speech_delay_mode() {
        let options = MatchOptions {
            speech_delay_mode: true,
            ..Default::default()
        };
        let matcher = AnswerMatcher::new();
        let evaluation = matcher.evaluate("want wawa now", "water", &options);
        assert_eq!(evaluation.strategy, MatchStrategy::VariantContainment);
        assert_eq!(evaluation.score, 0.85);
    }

    #[test]
    fn test_response_variants_checked_against_target() {
        // "binky" is a variant of "pacifier", so the symmetric check fires
        // when the simplified form is the expected answer
        let options = MatchOptions {
            speech_delay_mode: true,
            ..Default::default()
        };
        let matcher = AnswerMatcher::new();
        let evaluation = matcher.evaluate("pacifier", "binky", &options);
        assert_eq!(evaluation.strategy, MatchStrategy::VariantContainment);
        assert_eq!(evaluation.score, 0.85);
    }

    #[test]
    fn test_variants_skipped_in_normal_mode() {
        let options = MatchOptions::default();
        assert!(match_answer("wawa", "water", &options) < 0.85);
    }

    #[test]
    fn test_fuzzy_fallback() {
        let options = MatchOptions::default();
        let matcher = AnswerMatcher::new();
        let evaluation = matcher.evaluate("banaan", "banana", &options);
        assert_eq!(evaluation.strategy, MatchStrategy::Fuzzy);
        assert!(evaluation.score > 0.6);
    }

    #[test]
    fn test_no_match_returns_zero() {
        let options = MatchOptions::default();
        let matcher = AnswerMatcher::new();
        let evaluation = matcher.evaluate("helicopter", "sun", &options);
        assert_eq!(evaluation.strategy, MatchStrategy::NoMatch);
        assert_eq!(evaluation.score, 0.0);
    }

    #[test]
    fn test_evaluate_reports_normalized_forms() {
        let matcher = AnswerMatcher::new();
        let evaluation = matcher.evaluate("  The BALL! ", "ball", &MatchOptions::default());
        assert_eq!(evaluation.response_normalized, "the ball");
        assert_eq!(evaluation.target_normalized, "ball");
    }
}
