// File: src/core/matcher.rs
use crate::core::types::MatchResult;
use std::collections::BTreeSet;

/// Collects every token that starts with one of `prefixes`.
/// A token is emitted once per matching prefix, so "leader" against
/// {"lead", "leader"} counts twice. Matching is case-sensitive; callers pass
/// lowercased tokens and lowercase prefixes.
pub fn find_coded_words(tokens: &[String], prefixes: &BTreeSet<String>) -> MatchResult {
    let mut words = Vec::new();
    for token in tokens {
        for prefix in prefixes {
            if token.starts_with(prefix.as_str()) {
                words.push(token.clone());
            }
        }
    }
    MatchResult::from_words(words)
}
