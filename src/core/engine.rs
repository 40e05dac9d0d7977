// File: src/core/engine.rs
use crate::core::matcher::find_coded_words;
use crate::core::normalizer::Normalizer;
use crate::core::scorer::assess_coding;
use crate::core::types::{Analysis, JobAd, TallyEntry};
use crate::core::wordlists::WordLists;
use crate::error::{ConfigurationError, DecoderError, StorageError};
use crate::persistence::{load_from_disk, save_to_disk};
use crate::store::{AdStore, IdentityGenerator, RandomHex};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Runs the analysis pipeline against shared word lists and keeps the
/// resulting advertisements in an [`AdStore`].
pub struct DecoderEngine {
    word_lists: Arc<WordLists>,
    store: AdStore,
    store_path: Option<PathBuf>,
}

impl DecoderEngine {
    pub fn new(word_lists: Arc<WordLists>) -> Self {
        Self {
            word_lists,
            store: AdStore::new(),
            store_path: None,
        }
    }

    /// Opens the store snapshot at `path`, or starts empty if no file exists
    /// there yet. Any other failure is returned so that a later save cannot
    /// overwrite a snapshot that merely failed to load.
    pub fn from_file_or_new(
        path: impl AsRef<Path>,
        word_lists: Arc<WordLists>,
    ) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let store = match load_from_disk(path) {
            Ok(store) => store,
            Err(StorageError::Unavailable(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "no store snapshot yet, starting empty");
                AdStore::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self {
            word_lists,
            store,
            store_path: Some(path.to_path_buf()),
        })
    }

    /// Normalizes `text`, matches it against both gendered lists of `language`
    /// and labels the result. Pure: the store is not touched.
    pub fn analyze(&self, text: &str, language: &str) -> Result<Analysis, ConfigurationError> {
        analyze(&self.word_lists, text, language)
    }

    /// Analyses a new advertisement, stores it under a fresh identity and
    /// tallies its coded words.
    pub fn submit(&self, text: &str, language: &str) -> Result<JobAd, DecoderError> {
        self.submit_with(&mut RandomHex, text, language)
    }

    pub fn submit_with<G: IdentityGenerator + ?Sized>(
        &self,
        ids: &mut G,
        text: &str,
        language: &str,
    ) -> Result<JobAd, DecoderError> {
        let analysis = self.analyze(text, language)?;
        let ad = self
            .store
            .insert_new(ids, |hash| JobAd::new(hash, language, text, analysis));
        tracing::info!(hash = %ad.hash, language, coding = %ad.coding, "advertisement submitted");
        Ok(ad)
    }

    /// Re-runs the analysis of a stored advertisement with the current word
    /// lists and rebuilds its tally.
    pub fn reanalyse(&self, hash: &str) -> Result<JobAd, DecoderError> {
        let stored = self
            .store
            .get(hash)
            .ok_or_else(|| StorageError::NotFound(hash.to_string()))?;
        let analysis = self.analyze(&stored.ad_text, &stored.language)?;
        let ad = self.store.replace_analysis(hash, analysis)?;
        tracing::info!(hash, coding = %ad.coding, "advertisement reanalysed");
        Ok(ad)
    }

    pub fn job_ad(&self, hash: &str) -> Option<JobAd> {
        self.store.get(hash)
    }

    pub fn tally(&self, hash: &str) -> Vec<(String, TallyEntry)> {
        self.store.tally(hash)
    }

    pub fn store(&self) -> &AdStore {
        &self.store
    }

    pub fn save_store(&self) -> Result<(), StorageError> {
        match &self.store_path {
            Some(path) => save_to_disk(&self.store, path),
            None => Ok(()), // Nothing to do without a path
        }
    }
}

/// The analysis entry point: text and language in, coded words and label out.
pub fn analyze(lists: &WordLists, text: &str, language: &str) -> Result<Analysis, ConfigurationError> {
    let words = lists.get(language)?;
    let tokens = Normalizer::new(words, lists.hyphen_rule()).normalize(text);

    let masculine = find_coded_words(&tokens, &words.masculine);
    let feminine = find_coded_words(&tokens, &words.feminine);
    let coding = assess_coding(masculine.count, feminine.count);

    tracing::debug!(
        language,
        tokens = tokens.len(),
        masculine = masculine.count,
        feminine = feminine.count,
        %coding,
        "analysed advertisement text"
    );

    Ok(Analysis {
        masculine_words: masculine.words,
        masculine_count: masculine.count,
        feminine_words: feminine.words,
        feminine_count: feminine.count,
        coding,
    })
}
