//! Curated child-speech vocabulary.
//!
//! Maps therapy vocabulary to simplified pronunciations children commonly
//! produce. The built-in table covers frequent practice words; additional
//! child-specific entries can be loaded from JSON.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{LexiconError, Result};
use crate::normalize::normalize_text;

/// Built-in simplifications of common practice vocabulary.
const BUILTIN: &[(&str, &[&str])] = &[
    ("all done", &["ah da"]),
    ("apple", &["appo"]),
    ("banana", &["nana"]),
    ("blanket", &["banky", "blankie"]),
    ("bottle", &["baba"]),
    ("brother", &["bubba"]),
    ("cookie", &["tookie"]),
    ("daddy", &["dada"]),
    ("dog", &["goggie"]),
    ("elephant", &["efant"]),
    ("grandma", &["nana"]),
    ("grandpa", &["papa"]),
    ("little", &["wittle"]),
    ("milk", &["mik"]),
    ("mommy", &["mama"]),
    ("pacifier", &["paci", "binky"]),
    ("spaghetti", &["sketti"]),
    ("stomach", &["tummy"]),
    ("water", &["wawa"]),
    ("yellow", &["lellow", "yeyo"]),
];

static BUILTIN_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| {
    let mut entries = HashMap::new();
    for (word, variants) in BUILTIN {
        entries.insert(
            normalize_text(word),
            variants.iter().map(|v| normalize_text(v)).collect(),
        );
    }
    Lexicon { entries }
});

/// Word-to-variants table consulted during variant generation.
///
/// Headwords may be single words or whole phrases; both are stored in
/// normalized form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: HashMap<String, Vec<String>>,
}

impl Lexicon {
    /// The built-in table.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN_LEXICON
    }

    /// Load a lexicon from a JSON object of the form
    /// `{"word": ["variant", ...]}`.
    pub fn from_json_str(json: &str) -> Result<Lexicon> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut lexicon = Lexicon::default();
        for (word, variants) in raw {
            lexicon.add(&word, &variants)?;
        }
        Ok(lexicon)
    }

    /// Add one entry, normalizing the headword and its variants.
    ///
    /// Variants that normalize to nothing or to the headword itself are
    /// dropped; an entry left with no variants is an error.
    pub fn add(&mut self, word: &str, variants: &[String]) -> Result<()> {
        let headword = normalize_text(word);
        if headword.is_empty() {
            return Err(LexiconError::EmptyHeadword);
        }

        let usable: Vec<String> = variants
            .iter()
            .map(|v| normalize_text(v))
            .filter(|v| !v.is_empty() && *v != headword)
            .collect();
        if usable.is_empty() {
            return Err(LexiconError::NoVariants { word: headword });
        }

        let known = self.entries.entry(headword).or_default();
        for variant in usable {
            if !known.contains(&variant) {
                known.push(variant);
            }
        }
        Ok(())
    }

    /// Overlay another lexicon; its variants extend existing entries.
    pub fn merge(&mut self, other: Lexicon) {
        for (word, variants) in other.entries {
            let known = self.entries.entry(word).or_default();
            for variant in variants {
                if !known.contains(&variant) {
                    known.push(variant);
                }
            }
        }
    }

    /// Known variants of a word or phrase, if any.
    pub fn variants_of(&self, word: &str) -> Option<&[String]> {
        self.entries.get(&normalize_text(word)).map(Vec::as_slice)
    }

    /// Number of headwords in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
