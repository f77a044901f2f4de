//! Text normalization applied before any comparison.

/// Normalize an utterance for comparison.
///
/// Lowercases, strips punctuation, and collapses whitespace, so that
/// "Blue!" and "blue" compare equal.
pub fn normalize_text(s: &str) -> String {
    let lowered = s.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
