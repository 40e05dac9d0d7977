// File: src/tally.rs
use crate::core::types::{AdHash, Gender, TallyEntry};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Storage operations the tally needs: wipe one advertisement's counters and
/// bump a single (advertisement, word) counter.
pub trait TallyStore {
    fn delete_tallies(&mut self, ad: &str);
    fn increment_or_create(&mut self, ad: &str, word: &str, gender: Gender);
}

/// Word counters for every advertisement, keyed by (advertisement, word).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordTally {
    entries: HashMap<AdHash, BTreeMap<String, TallyEntry>>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters for one advertisement, ordered by word.
    pub fn for_ad(&self, ad: &str) -> Option<&BTreeMap<String, TallyEntry>> {
        self.entries.get(ad)
    }
}

impl TallyStore for WordTally {
    fn delete_tallies(&mut self, ad: &str) {
        self.entries.remove(ad);
    }

    fn increment_or_create(&mut self, ad: &str, word: &str, gender: Gender) {
        let words = self.entries.entry(ad.to_string()).or_default();
        match words.get_mut(word) {
            // The first gender a word was seen with sticks.
            Some(entry) => entry.count += 1,
            None => {
                words.insert(word.to_string(), TallyEntry { gender, count: 1 });
            }
        }
    }
}

/// Rebuilds the counters of `ad` from scratch. Previous entries are
/// discarded first, so repeating the call with the same words yields the
/// same counts and words from an older text never linger.
pub fn retally<S: TallyStore>(
    store: &mut S,
    ad: &str,
    masculine_words: &[String],
    feminine_words: &[String],
) {
    store.delete_tallies(ad);

    let tagged = masculine_words
        .iter()
        .map(|word| (word, Gender::Masculine))
        .chain(feminine_words.iter().map(|word| (word, Gender::Feminine)));
    for (word, gender) in tagged {
        if word.is_empty() {
            continue;
        }
        store.increment_or_create(ad, word, gender);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn counts(tally: &WordTally, ad: &str) -> Vec<(String, Gender, u64)> {
        tally
            .for_ad(ad)
            .map(|words| {
                words
                    .iter()
                    .map(|(word, entry)| (word.clone(), entry.gender, entry.count))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn counts_repeated_words() {
        let mut tally = WordTally::new();
        retally(
            &mut tally,
            "ad1",
            &owned(&["lead", "driven", "lead"]),
            &owned(&["warm"]),
        );
        assert_eq!(
            counts(&tally, "ad1"),
            vec![
                ("driven".to_string(), Gender::Masculine, 1),
                ("lead".to_string(), Gender::Masculine, 2),
                ("warm".to_string(), Gender::Feminine, 1),
            ]
        );
    }

    #[test]
    fn each_occurrence_adds_exactly_one() {
        let mut tally = WordTally::new();
        retally(&mut tally, "ad1", &owned(&["lead"; 5]), &owned(&["warm"]));
        assert_eq!(
            counts(&tally, "ad1"),
            vec![
                ("lead".to_string(), Gender::Masculine, 5),
                ("warm".to_string(), Gender::Feminine, 1),
            ]
        );
    }

    #[test]
    fn retally_is_idempotent() {
        let mut tally = WordTally::new();
        let masculine = owned(&["lead", "lead", "driven"]);
        let feminine = owned(&["support"]);
        retally(&mut tally, "ad1", &masculine, &feminine);
        let first = counts(&tally, "ad1");
        retally(&mut tally, "ad1", &masculine, &feminine);
        assert_eq!(counts(&tally, "ad1"), first);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn retally_discards_stale_words() {
        let mut tally = WordTally::new();
        retally(&mut tally, "ad1", &owned(&["lead"]), &[]);
        retally(&mut tally, "ad1", &[], &owned(&["warm"]));
        assert_eq!(
            counts(&tally, "ad1"),
            vec![("warm".to_string(), Gender::Feminine, 1)]
        );
    }

    #[test]
    fn empty_words_are_skipped() {
        let mut tally = WordTally::new();
        retally(&mut tally, "ad1", &owned(&["", "lead"]), &owned(&[""]));
        assert_eq!(
            counts(&tally, "ad1"),
            vec![("lead".to_string(), Gender::Masculine, 1)]
        );
    }

    #[test]
    fn other_ads_are_untouched() {
        let mut tally = WordTally::new();
        retally(&mut tally, "ad1", &owned(&["lead"]), &[]);
        retally(&mut tally, "ad2", &owned(&["driven"]), &[]);
        retally(&mut tally, "ad2", &[], &[]);
        assert_eq!(counts(&tally, "ad1").len(), 1);
        assert!(counts(&tally, "ad2").is_empty());
    }

    #[test]
    fn word_in_both_lists_keeps_first_gender() {
        let mut tally = WordTally::new();
        retally(&mut tally, "ad1", &owned(&["x"]), &owned(&["x"]));
        assert_eq!(
            counts(&tally, "ad1"),
            vec![("x".to_string(), Gender::Masculine, 2)]
        );
    }
}
