//! Bounded edit-distance fallback scoring.

use strsim::levenshtein;

use crate::types::MatchOptions;

/// Candidates further than this many edits are rejected outright.
const MAX_DISTANCE: usize = 12;
/// Relaxed distance bound used in speech-delay mode.
const SPEECH_DELAY_MAX_DISTANCE: usize = 24;
/// Relaxed sensitivity used in speech-delay mode.
const SPEECH_DELAY_THRESHOLD: f64 = 0.8;

/// Edit-distance similarity, or None when the pair is too far apart.
///
/// The raw score is the edit distance over the longer input's length; a
/// pair past the distance bound or whose raw score exceeds the threshold
/// is no match. Speech-delay mode replaces the caller's threshold and the
/// distance bound with fixed relaxed values.
pub fn fuzzy_score(response: &str, target: &str, options: &MatchOptions) -> Option<f64> {
    let (threshold, max_distance) = if options.speech_delay_mode {
        (SPEECH_DELAY_THRESHOLD, SPEECH_DELAY_MAX_DISTANCE)
    } else {
        (options.threshold, MAX_DISTANCE)
    };

    let distance = levenshtein(response, target);
    if distance > max_distance {
        return None;
    }

    let longest = response.chars().count().max(target.chars().count());
    if longest == 0 {
        return None;
    }

    let raw = distance as f64 / longest as f64;
    if raw <= threshold {
        Some(1.0 - raw)
    } else {
        None
    }
}
