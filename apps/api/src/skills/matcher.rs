//! Phrase matching over tokenized text.
//!
//! A token trie built from the tokenized vocabulary. Multi-word phrases
//! ("Machine Learning") match only as contiguous token sequences; matching is
//! exact-string and case-sensitive. Pure function of (text, vocabulary) —
//! no state survives a call.

use std::collections::{BTreeSet, HashMap};

use crate::skills::tokenize;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<String, TrieNode>,
    /// Canonical vocabulary phrase terminating at this node.
    phrase: Option<String>,
}

/// Exact multi-token phrase matcher. Build once at startup, share freely:
/// all methods take `&self`.
pub struct SkillMatcher {
    root: TrieNode,
}

impl SkillMatcher {
    /// Builds the matcher from vocabulary phrases. Each phrase is run through
    /// the same tokenizer as request text, so punctuation-bearing entries
    /// like `C++` and `Node.js` align with their tokenized occurrences.
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = TrieNode::default();
        for phrase in vocabulary {
            let phrase = phrase.as_ref();
            let tokens = tokenize(phrase);
            if tokens.is_empty() {
                continue;
            }
            let mut node = &mut root;
            for token in tokens {
                node = node.children.entry(token.to_string()).or_default();
            }
            node.phrase = Some(phrase.to_string());
        }
        SkillMatcher { root }
    }

    /// Returns the distinct vocabulary phrases occurring in `text` as
    /// contiguous token spans. Set semantics: duplicates collapse, order is
    /// deterministic but not part of the contract.
    pub fn find_skills(&self, text: &str) -> BTreeSet<String> {
        let tokens = tokenize(text);
        let mut found = BTreeSet::new();

        for start in 0..tokens.len() {
            let mut node = &self.root;
            for token in &tokens[start..] {
                match node.children.get(*token) {
                    Some(next) => {
                        if let Some(phrase) = &next.phrase {
                            found.insert(phrase.clone());
                        }
                        node = next;
                    }
                    None => break,
                }
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(vocabulary: &[&str]) -> SkillMatcher {
        SkillMatcher::new(vocabulary.iter().copied())
    }

    fn found(m: &SkillMatcher, text: &str) -> Vec<String> {
        m.find_skills(text).into_iter().collect()
    }

    #[test]
    fn test_single_and_multi_word_phrases_match() {
        let m = matcher(&["Python", "Machine Learning"]);
        let skills = found(&m, "Experienced in Python and Machine Learning projects.");
        assert_eq!(skills, vec!["Machine Learning", "Python"]);
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        let m = matcher(&["Java"]);
        assert!(found(&m, "Built apps using JavaScript.").is_empty());
    }

    #[test]
    fn test_distinct_java_and_javascript_entries() {
        let m = matcher(&["Java", "JavaScript"]);
        assert_eq!(found(&m, "JavaScript and Java"), vec!["Java", "JavaScript"]);
    }

    #[test]
    fn test_repeated_mentions_deduplicate() {
        let m = matcher(&["Python"]);
        assert_eq!(found(&m, "Python Python Python"), vec!["Python"]);
    }

    #[test]
    fn test_idempotent_on_same_input() {
        let m = matcher(&["Python", "SQL"]);
        let text = "Python backed by SQL";
        assert_eq!(m.find_skills(text), m.find_skills(text));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let m = matcher(&["Python"]);
        assert!(found(&m, "wrote python scripts").is_empty());
    }

    #[test]
    fn test_punctuation_adjacent_mention_matches() {
        let m = matcher(&["Python", "SQL"]);
        assert_eq!(found(&m, "Skills: Python, (SQL)."), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_symbolic_vocabulary_entries_match_exactly() {
        let m = matcher(&["C", "C++", "Node.js"]);
        // "C++" is one token, so the single-letter "C" must not fire on it.
        assert_eq!(found(&m, "C++ and Node.js services"), vec!["C++", "Node.js"]);
        assert_eq!(found(&m, "plain C code"), vec!["C"]);
    }

    #[test]
    fn test_multi_word_phrase_requires_adjacency() {
        let m = matcher(&["Machine Learning"]);
        assert!(found(&m, "Machine and Learning are separate words").is_empty());
        assert!(found(&m, "Learning Machine").is_empty());
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        let m = matcher(&["Python"]);
        assert!(m.find_skills("").is_empty());
    }

    #[test]
    fn test_never_returns_phrase_absent_from_text() {
        let m = matcher(&["Python", "Django", "React"]);
        let skills = m.find_skills("Shipped a Django site.");
        for skill in &skills {
            assert!("Shipped a Django site.".contains(skill.as_str()));
        }
        assert_eq!(skills.len(), 1);
    }
}
