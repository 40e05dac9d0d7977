// src/core/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a stored job advertisement (16 lowercase hex chars).
pub type AdHash = String;

/// Normalized tokens of one advertisement, in text order.
pub type TokenSequence = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The categorical verdict for an advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodingLabel {
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "feminine-coded")]
    FeminineCoded,
    #[serde(rename = "strongly feminine-coded")]
    StronglyFeminineCoded,
    #[serde(rename = "masculine-coded")]
    MasculineCoded,
    #[serde(rename = "strongly masculine-coded")]
    StronglyMasculineCoded,
}

impl CodingLabel {
    pub const ALL: [CodingLabel; 6] = [
        CodingLabel::Empty,
        CodingLabel::Neutral,
        CodingLabel::FeminineCoded,
        CodingLabel::StronglyFeminineCoded,
        CodingLabel::MasculineCoded,
        CodingLabel::StronglyMasculineCoded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CodingLabel::Empty => "empty",
            CodingLabel::Neutral => "neutral",
            CodingLabel::FeminineCoded => "feminine-coded",
            CodingLabel::StronglyFeminineCoded => "strongly feminine-coded",
            CodingLabel::MasculineCoded => "masculine-coded",
            CodingLabel::StronglyMasculineCoded => "strongly masculine-coded",
        }
    }
}

impl fmt::Display for CodingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Tokens that matched one gender's prefix list.
/// `count` always equals `words.len()`; a token matching two prefixes appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub words: Vec<String>,
    pub count: usize,
}

impl MatchResult {
    pub fn from_words(words: Vec<String>) -> Self {
        let count = words.len();
        Self { words, count }
    }
}

/// Output of a single analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub masculine_words: Vec<String>,
    pub masculine_count: usize,
    pub feminine_words: Vec<String>,
    pub feminine_count: usize,
    pub coding: CodingLabel,
}

/// A stored advertisement together with its latest analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAd {
    pub hash: AdHash,
    pub language: String,
    pub date: DateTime<Utc>,
    pub ad_text: String,
    pub masculine_words: Vec<String>,
    pub masculine_word_count: usize,
    pub feminine_words: Vec<String>,
    pub feminine_word_count: usize,
    pub coding: CodingLabel,
}

impl JobAd {
    pub fn new(hash: AdHash, language: &str, ad_text: &str, analysis: Analysis) -> Self {
        let mut ad = Self {
            hash,
            language: language.to_string(),
            date: Utc::now(),
            ad_text: ad_text.to_string(),
            masculine_words: Vec::new(),
            masculine_word_count: 0,
            feminine_words: Vec::new(),
            feminine_word_count: 0,
            coding: CodingLabel::Empty,
        };
        ad.apply(analysis);
        ad
    }

    /// Overwrites the analysis fields, keeping identity, text and date.
    pub fn apply(&mut self, analysis: Analysis) {
        self.masculine_words = analysis.masculine_words;
        self.masculine_word_count = analysis.masculine_count;
        self.feminine_words = analysis.feminine_words;
        self.feminine_word_count = analysis.feminine_count;
        self.coding = analysis.coding;
    }
}

/// Per-word counter for one advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub gender: Gender,
    pub count: u64,
}
