// File: src/core/normalizer.rs
use crate::core::types::TokenSequence;
use crate::core::wordlists::{HyphenRule, LanguageWords};
use std::collections::BTreeSet;

/// Characters that separate words in addition to whitespace.
const PUNCTUATION: &[char] = &[
    '.', '\t', ',', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}', '<', '>', '*', '?', '!', '"',
    '[', ']', '@', '\'', ':', ';', '(', ')', '/', '&',
];

/// Turns raw advertisement text into lowercase tokens ready for prefix matching.
pub struct Normalizer<'a> {
    hyphenated: &'a BTreeSet<String>,
    rule: HyphenRule,
}

impl<'a> Normalizer<'a> {
    pub fn new(words: &'a LanguageWords, rule: HyphenRule) -> Self {
        Self {
            hyphenated: &words.hyphenated,
            rule,
        }
    }

    pub fn normalize(&self, text: &str) -> TokenSequence {
        let tokens = tokenize(text);
        self.split_hyphens(tokens)
    }

    /// Replaces each non-coded hyphenated token with its parts, in place.
    /// Coded compounds (e.g. "self-confident") stay whole. Runs once over the
    /// input; parts produced here are never split again.
    fn split_hyphens(&self, tokens: TokenSequence) -> TokenSequence {
        let mut out = Vec::with_capacity(tokens.len());
        for token in tokens {
            if !self.should_split(&token) {
                out.push(token);
                continue;
            }
            // Empty fragments from doubled or trailing hyphens stay as tokens;
            // no prefix matches them.
            out.extend(token.split('-').map(str::to_string));
        }
        out
    }

    fn should_split(&self, token: &str) -> bool {
        let has_hyphen = match self.rule {
            // A hyphen at position 0 was never seen by the historical check.
            HyphenRule::PreserveLeading => token.find('-').is_some_and(|idx| idx > 0),
            HyphenRule::SplitAll => token.contains('-'),
        };
        has_hyphen
            && !self
                .hyphenated
                .iter()
                .any(|prefix| token.starts_with(prefix.as_str()))
    }
}

/// Steps 1-4 of normalization: every character outside Latin-1, every
/// whitespace character and every listed punctuation mark becomes a space,
/// then the text is split on spaces, empties dropped and tokens lowercased.
/// Each step only maps single characters to a space, so doing them in one
/// pass gives the same tokens as doing them in sequence.
pub fn tokenize(text: &str) -> TokenSequence {
    let cleaned: String = text
        .chars()
        .map(|c| if is_separator(c) { ' ' } else { c })
        .collect();
    cleaned
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn is_separator(c: char) -> bool {
    (c as u32) >= 256
        || c.is_whitespace()
        // ASCII file/group/record/unit separators count as whitespace for regex `\s`
        || ('\u{1c}'..='\u{1f}').contains(&c)
        || PUNCTUATION.contains(&c)
}
