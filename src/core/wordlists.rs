// File: src/core/wordlists.rs
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// How the normalizer treats a token whose first character is a hyphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HyphenRule {
    /// Leading-hyphen tokens are left unsplit, matching the historical detector.
    #[default]
    PreserveLeading,
    /// Every token containing a hyphen is considered for splitting.
    SplitAll,
}

/// Prefix lists for one language. All entries are lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageWords {
    pub name: String,
    pub masculine: BTreeSet<String>,
    pub feminine: BTreeSet<String>,
    /// Coded compounds of either gender that must survive the hyphen split.
    #[serde(default)]
    pub hyphenated: BTreeSet<String>,
}

impl LanguageWords {
    fn from_static(name: &str, masculine: &[&str], feminine: &[&str], hyphenated: &[&str]) -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            name: name.to_string(),
            masculine: owned(masculine),
            feminine: owned(feminine),
            hyphenated: owned(hyphenated),
        }
    }

    fn validate(&self, code: &str) -> Result<(), ConfigurationError> {
        let lists = [
            ("masculine", &self.masculine),
            ("feminine", &self.feminine),
            ("hyphenated", &self.hyphenated),
        ];
        for (list, prefixes) in lists {
            for prefix in prefixes {
                let reason = if prefix.is_empty() {
                    Some("prefix is empty")
                } else if prefix.to_lowercase() != *prefix {
                    Some("prefix is not lowercase")
                } else {
                    None
                };
                if let Some(reason) = reason {
                    return Err(ConfigurationError::InvalidPrefix {
                        language: code.to_string(),
                        list,
                        prefix: prefix.clone(),
                        reason,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Immutable, validated word list configuration keyed by language code.
/// Built once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    languages: BTreeMap<String, LanguageWords>,
    hyphen_rule: HyphenRule,
}

impl WordLists {
    /// Validates and wraps a language map.
    pub fn new(languages: BTreeMap<String, LanguageWords>) -> Result<Self, ConfigurationError> {
        for (code, words) in &languages {
            words.validate(code)?;
        }
        Ok(Self {
            languages,
            hyphen_rule: HyphenRule::default(),
        })
    }

    /// The bundled English and Swedish lists.
    pub fn builtin() -> Self {
        let mut languages = BTreeMap::new();
        languages.insert(
            "en".to_string(),
            LanguageWords::from_static("english", EN_MASCULINE, EN_FEMININE, EN_HYPHENATED),
        );
        languages.insert(
            "sv".to_string(),
            LanguageWords::from_static("swedish", SV_MASCULINE, SV_FEMININE, SV_HYPHENATED),
        );
        Self {
            languages,
            hyphen_rule: HyphenRule::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        let languages: BTreeMap<String, LanguageWords> = serde_json::from_str(json)?;
        Self::new(languages)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigurationError> {
        let json = fs::read_to_string(path).map_err(ConfigurationError::Read)?;
        Self::from_json_str(&json)
    }

    pub fn with_hyphen_rule(mut self, rule: HyphenRule) -> Self {
        self.hyphen_rule = rule;
        self
    }

    pub fn hyphen_rule(&self) -> HyphenRule {
        self.hyphen_rule
    }

    /// Looks up the lists for `code`. A missing language is a configuration error.
    pub fn get(&self, code: &str) -> Result<&LanguageWords, ConfigurationError> {
        self.languages
            .get(code)
            .ok_or_else(|| ConfigurationError::UnsupportedLanguage(code.to_string()))
    }

    /// (code, display name) pairs in code order.
    pub fn languages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.languages
            .iter()
            .map(|(code, words)| (code.as_str(), words.name.as_str()))
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::builtin()
    }
}

// English lists after Gaucher, Friesen & Kay (2011).
const EN_FEMININE: &[&str] = &[
    "agree", "affectionate", "child", "cheer", "collab", "commit", "communal",
    "compassion", "connect", "considerate", "cooperat", "co-operat", "depend",
    "emotiona", "empath", "feel", "flatterable", "gentle", "honest",
    "interpersonal", "interdependen", "interpersona", "inter-personal",
    "inter-dependen", "inter-persona", "kind", "kinship", "loyal", "modesty",
    "nag", "nurtur", "pleasant", "polite", "quiet", "respon", "sensitiv",
    "submissive", "support", "sympath", "tender", "together", "trust",
    "understand", "warm", "whin", "enthusias", "inclusive", "yield", "share",
    "sharin",
];

const EN_MASCULINE: &[&str] = &[
    "active", "adventurous", "aggress", "ambitio", "analy", "assert", "athlet",
    "autonom", "battle", "boast", "challeng", "champion", "compet", "confident",
    "courag", "decid", "decision", "decisive", "defend", "determin", "domina",
    "dominant", "driven", "fearless", "fight", "force", "greedy", "head-strong",
    "headstrong", "hierarch", "hostil", "impulsive", "independen", "individual",
    "intellect", "lead", "logic", "objective", "opinion", "outspoken", "persist",
    "principle", "reckless", "self-confiden", "self-relian", "self-sufficien",
    "selfconfiden", "selfrelian", "selfsufficien", "stubborn", "superior",
    "unreasonab",
];

const EN_HYPHENATED: &[&str] = &[
    "co-operat", "inter-personal", "inter-dependen", "inter-persona",
    "self-confiden", "self-relian", "self-sufficien",
];

const SV_FEMININE: &[&str] = &[
    "ansvarsfull", "empati", "engagera", "förståe", "gemenskap", "hjälpsam",
    "inkluder", "känsl", "lojal", "lyhörd", "medkänsla", "omhänderta",
    "omsorg", "omtänksam", "relation", "samarbet", "social", "stöd",
    "tillit", "tillsammans", "trygg", "vänlig", "varm", "ödmjuk",
];

const SV_MASCULINE: &[&str] = &[
    "aktiv", "ambiti", "analy", "beslutsam", "driv", "envis", "handlingskraft",
    "konkurren", "ledare", "logisk", "modig", "målinriktad", "objektiv",
    "orädd", "resultatorienter", "självgående", "självständig", "självsäker",
    "stark", "tävling", "utmaning", "vinnar", "äventyr", "överlägsen",
];

const SV_HYPHENATED: &[&str] = &[];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_are_valid() {
        let lists = WordLists::builtin();
        let languages: BTreeMap<_, _> = lists.languages.clone();
        assert!(WordLists::new(languages).is_ok());
        assert_eq!(
            lists.languages().collect::<Vec<_>>(),
            vec![("en", "english"), ("sv", "swedish")]
        );
    }

    #[test]
    fn builtin_hyphenated_prefixes_are_coded_words() {
        let lists = WordLists::builtin();
        let en = lists.get("en").unwrap();
        for prefix in &en.hyphenated {
            assert!(
                en.masculine.contains(prefix) || en.feminine.contains(prefix),
                "{prefix} is not in either gendered list"
            );
        }
    }

    #[test]
    fn unknown_language_is_a_configuration_error() {
        let err = WordLists::builtin().get("de").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnsupportedLanguage(code) if code == "de"));
    }

    #[test]
    fn loads_lists_from_json() {
        let json = r#"{
            "xx": {
                "name": "test",
                "masculine": ["lead", "lead"],
                "feminine": ["warm"]
            }
        }"#;
        let lists = WordLists::from_json_str(json).unwrap();
        let xx = lists.get("xx").unwrap();
        assert_eq!(xx.masculine.len(), 1);
        assert!(xx.hyphenated.is_empty());
        assert_eq!(lists.hyphen_rule(), HyphenRule::PreserveLeading);
    }

    #[test]
    fn rejects_uppercase_prefix() {
        let json = r#"{"xx": {"name": "test", "masculine": ["Lead"], "feminine": []}}"#;
        let err = WordLists::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidPrefix { list: "masculine", .. }
        ));
    }

    #[test]
    fn rejects_empty_prefix() {
        let json = r#"{"xx": {"name": "test", "masculine": [], "feminine": [], "hyphenated": [""]}}"#;
        let err = WordLists::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidPrefix { list: "hyphenated", .. }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = WordLists::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigurationError::Parse(_)));
    }
}
