//! Whitespace tokenization with edge-punctuation stripping.
//!
//! Interior characters are never touched, so `Node.js` and `C++` survive as
//! single tokens while `Python,` and `(SQL)` normalize to `Python` and `SQL`.
//! No case folding: matching downstream is case-sensitive.

/// Characters stripped from token edges only.
const EDGE_PUNCT: &[char] = &[
    '(', ')', '[', ']', '{', '}', '"', '\'', ',', ';', ':', '.', '!', '?',
];

/// Splits text on whitespace and strips edge punctuation from each token.
/// Tokens that are empty after stripping are dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c| EDGE_PUNCT.contains(&c)))
        .filter(|word| !word.is_empty())
        .collect()
}
