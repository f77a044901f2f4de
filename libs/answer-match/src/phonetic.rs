//! Phonetic comparison for speech-delay mode.
//!
//! Two encodings are compared per phrase: Metaphone and Soundex. A pair
//! that sounds alike under either encoding counts as phonetically close,
//! which catches pronunciations like "blew" for "blue" that are far apart
//! as spellings.

use rphonetic::{Encoder, Metaphone, Soundex};
use strsim::normalized_levenshtein;

/// Minimum code similarity treated as a phonetic hit.
pub(crate) const SIMILARITY_FLOOR: f64 = 0.7;
/// Phonetic scores never reach the exact-match score.
const SCORE_CAP: f64 = 0.9;

/// How close two phrases sound, from 0.0 to 1.0.
///
/// Each phrase is encoded word by word; only ASCII letters feed the
/// encoders, so arbitrary input is safe. Identical codes give 1.0.
pub fn phonetic_similarity(a: &str, b: &str) -> f64 {
    let metaphone = Metaphone::default();
    let soundex = Soundex::default();

    let by_metaphone = code_similarity(&encode_phrase(&metaphone, a), &encode_phrase(&metaphone, b));
    let by_soundex = code_similarity(&encode_phrase(&soundex, a), &encode_phrase(&soundex, b));
    by_metaphone.max(by_soundex)
}

/// Score for the phonetic stage, if the phrases sound close enough.
pub(crate) fn phonetic_score(response: &str, target: &str) -> Option<f64> {
    let similarity = phonetic_similarity(response, target);
    if similarity >= SIMILARITY_FLOOR {
        Some(similarity.min(SCORE_CAP))
    } else {
        None
    }
}

fn encode_phrase<E: Encoder>(encoder: &E, phrase: &str) -> String {
    let codes: Vec<String> = phrase
        .split_whitespace()
        .filter_map(|word| {
            let letters: String = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
            if letters.is_empty() {
                None
            } else {
                Some(encoder.encode(&letters))
            }
        })
        .filter(|code| !code.is_empty())
        .collect();
    codes.join(" ")
}

fn code_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    normalized_levenshtein(a, b)
}
