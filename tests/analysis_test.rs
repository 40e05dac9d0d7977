use decoder_core::{analyze, CodingLabel, DecoderEngine, Gender, HyphenRule, WordLists};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

const AD: &str = "\
We are looking for an ambitious, driven and competitive Team Leader who can
work independently. You'll be decisive, confident and analytical.

We value honest, supportive people who enjoy collaborating.";

#[test]
fn english_advert_is_strongly_masculine() {
    let analysis = analyze(&WordLists::builtin(), AD, "en").unwrap();
    assert_eq!(
        analysis.masculine_words,
        vec![
            "ambitious",
            "driven",
            "competitive",
            "leader",
            "independently",
            "decisive",
            "confident",
            "analytical"
        ]
    );
    assert_eq!(
        analysis.feminine_words,
        vec!["honest", "supportive", "collaborating"]
    );
    // (3 - 8) / 11 = -0.45
    assert_eq!(analysis.coding, CodingLabel::StronglyMasculineCoded);
}

#[test]
fn swedish_advert_uses_swedish_lists() {
    let text = "Vi söker en lyhörd och omtänksam kollega som trivs med samarbete och stöd.";
    let analysis = analyze(&WordLists::builtin(), text, "sv").unwrap();
    assert_eq!(
        analysis.feminine_words,
        vec!["lyhörd", "omtänksam", "samarbete", "stöd"]
    );
    assert_eq!(analysis.masculine_count, 0);
    assert_eq!(analysis.coding, CodingLabel::FeminineCoded);
}

#[test]
fn leading_hyphen_rule_changes_matching() {
    let text = "-strong-leadership";
    let lists = WordLists::builtin();
    assert_eq!(analyze(&lists, text, "en").unwrap().masculine_count, 0);

    let lists = lists.with_hyphen_rule(HyphenRule::SplitAll);
    let analysis = analyze(&lists, text, "en").unwrap();
    assert_eq!(analysis.masculine_words, vec!["leadership"]);
}

#[test]
fn concurrent_reanalysis_keeps_tally_consistent() {
    let engine = Arc::new(DecoderEngine::new(Arc::new(WordLists::builtin())));
    let ad = engine
        .submit("Lead, lead, lead. Support and trust.", "en")
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let hash = ad.hash.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    engine.reanalyse(&hash).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let tally = engine.tally(&ad.hash);
    let summary: Vec<_> = tally
        .iter()
        .map(|(word, entry)| (word.as_str(), entry.gender, entry.count))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("lead", Gender::Masculine, 3),
            ("support", Gender::Feminine, 1),
            ("trust", Gender::Feminine, 1),
        ]
    );
}

#[test]
fn submitted_ads_get_distinct_identities() {
    let engine = DecoderEngine::new(Arc::new(WordLists::builtin()));
    for _ in 0..100 {
        engine.submit("lead", "en").unwrap();
    }
    assert_eq!(engine.store().len(), 100);
}

proptest! {
    #[test]
    fn counts_match_word_lists(text in "[a-zA-Z .,'\\-éö]{0,200}", lang in "en|sv") {
        let analysis = analyze(&WordLists::builtin(), &text, &lang).unwrap();
        prop_assert_eq!(analysis.masculine_count, analysis.masculine_words.len());
        prop_assert_eq!(analysis.feminine_count, analysis.feminine_words.len());
    }

    #[test]
    fn analysis_is_deterministic(text in "\\PC{0,200}") {
        let lists = WordLists::builtin();
        let first = analyze(&lists, &text, "en").unwrap();
        let second = analyze(&lists, &text, "en").unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn matched_words_are_lowercase_latin1(text in "\\PC{0,200}") {
        let analysis = analyze(&WordLists::builtin(), &text, "en").unwrap();
        for word in analysis.masculine_words.iter().chain(&analysis.feminine_words) {
            prop_assert!(word.chars().all(|c| (c as u32) < 256 && !c.is_whitespace()));
            prop_assert_eq!(word.to_lowercase(), word.clone());
        }
    }
}
