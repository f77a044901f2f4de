//! Speech-delay variant generation.
//!
//! Produces the simplified pronunciations a young child might use for a
//! phrase: final-consonant deletion, consonant-cluster reduction, the
//! common substitutions th->f, r->w, l->w, and curated word substitutions
//! from the lexicon.

use crate::lexicon::Lexicon;

/// Generate simplified pronunciations of a normalized phrase.
///
/// Each rule is applied to the whole phrase on its own; rules are not
/// stacked. The phrase itself is never returned as one of its variants.
pub fn speech_delay_variants(phrase: &str, lexicon: &Lexicon) -> Vec<String> {
    let mut candidates = Vec::new();

    if let Some(known) = lexicon.variants_of(phrase) {
        candidates.extend(known.iter().cloned());
    }
    candidates.extend(lexicon_substitutions(phrase, lexicon));
    candidates.push(map_words(phrase, drop_final_consonants));
    candidates.push(map_words(phrase, reduce_onset_cluster));
    candidates.push(phrase.replace("th", "f"));
    candidates.push(phrase.replace('r', "w"));
    candidates.push(phrase.replace('l', "w"));

    let mut variants = Vec::new();
    for candidate in candidates {
        if candidate.is_empty() || candidate == phrase || variants.contains(&candidate) {
            continue;
        }
        variants.push(candidate);
    }
    variants
}

/// Substitute lexicon variants one word at a time.
fn lexicon_substitutions(phrase: &str, lexicon: &Lexicon) -> Vec<String> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let mut out = Vec::new();
    for (i, word) in words.iter().enumerate() {
        if let Some(known) = lexicon.variants_of(word) {
            for variant in known {
                let mut substituted = words.clone();
                substituted[i] = variant.as_str();
                out.push(substituted.join(" "));
            }
        }
    }
    out
}

fn map_words(phrase: &str, rule: fn(&str) -> String) -> String {
    phrase
        .split_whitespace()
        .map(rule)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop the trailing consonant run ("dog" -> "do", "milk" -> "mi").
///
/// A word with no vowels is left alone.
fn drop_final_consonants(word: &str) -> String {
    let stem = word.trim_end_matches(|c: char| c.is_alphabetic() && !is_vowel(c));
    if stem.is_empty() {
        word.to_string()
    } else {
        stem.to_string()
    }
}

/// Reduce a word-initial consonant cluster to a single consonant.
///
/// The cluster keeps its first consonant, except s-clusters, which keep
/// the consonant after the s ("stop" -> "top", "truck" -> "tuck").
/// Clusters later in the word are left to the other rules.
fn reduce_onset_cluster(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut end = 0;
    while end < chars.len() && chars[end].is_alphabetic() && !is_vowel(chars[end]) {
        end += 1;
    }
    if end < 2 {
        return word.to_string();
    }

    let keep = if chars[0] == 's' { chars[1] } else { chars[0] };
    let mut out = String::with_capacity(word.len());
    out.push(keep);
    out.extend(&chars[end..]);
    out
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(phrase: &str) -> Vec<String> {
        speech_delay_variants(phrase, Lexicon::builtin())
    }

    #[test]
    fn final_consonants_are_dropped() {
        assert!(variants("dog").contains(&"do".to_string()));
        assert!(variants("milk").contains(&"mi".to_string()));
    }

    #[test]
    fn clusters_reduce_to_one_consonant() {
        assert!(variants("play").contains(&"pay".to_string()));
        assert!(variants("truck").contains(&"tuck".to_string()));
    }

    #[test]
    fn s_clusters_keep_the_second_consonant() {
        assert!(variants("stop").contains(&"top".to_string()));
        assert!(variants("spoon").contains(&"poon".to_string()));
    }

    #[test]
    fn coda_clusters_are_left_to_other_rules() {
        let generated = variants("truck");
        assert!(generated.contains(&"tuck".to_string()));
        assert!(!generated.contains(&"tuc".to_string()));
        assert!(generated.contains(&"tru".to_string()));
    }

    #[test]
    fn common_substitutions_apply_phrase_wide() {
        assert!(variants("think").contains(&"fink".to_string()));
        assert!(variants("rabbit").contains(&"wabbit".to_string()));
        assert!(variants("look at the ball").contains(&"wook at the baww".to_string()));
    }

    #[test]
    fn lexicon_words_are_substituted_in_place() {
        assert!(variants("drink water").contains(&"drink wawa".to_string()));
        assert!(variants("water").contains(&"wawa".to_string()));
    }

    #[test]
    fn whole_phrase_lexicon_entries_are_found() {
        assert!(variants("all done").contains(&"ah da".to_string()));
    }

    #[test]
    fn the_phrase_itself_is_never_a_variant() {
        for variant in variants("water") {
            assert_ne!(variant, "water");
        }
    }

    #[test]
    fn no_duplicate_variants() {
        let generated = variants("water");
        let mut deduped = generated.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(generated.len(), deduped.len());
    }

    #[test]
    fn vowelless_words_survive_final_consonant_deletion() {
        assert_eq!(drop_final_consonants("shh"), "shh");
    }
}
