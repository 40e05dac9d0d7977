// File: src/store.rs
use crate::core::types::{AdHash, Analysis, JobAd, TallyEntry};
use crate::error::StorageError;
use crate::tally::{retally, WordTally};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Source of candidate advertisement identities. Candidates may collide;
/// the store keeps asking until it gets a free one.
pub trait IdentityGenerator {
    fn candidate(&mut self) -> AdHash;
}

/// 8 random bytes rendered as 16 lowercase hex characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomHex;

impl IdentityGenerator for RandomHex {
    fn candidate(&mut self) -> AdHash {
        hex::encode(rand::random::<[u8; 8]>())
    }
}

/// Everything the store holds. This is also the on-disk snapshot format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    pub ads: HashMap<AdHash, JobAd>,
    pub tallies: WordTally,
}

/// Advertisements and their word tallies behind one lock. Writers hold the
/// write lock for the whole identity check or delete-and-recount sequence,
/// so two analyses of the same advertisement cannot interleave.
#[derive(Debug)]
pub struct AdStore {
    state: RwLock<StoreState>,
}

impl AdStore {
    pub fn new() -> Self {
        Self::from_state(StoreState::default())
    }

    pub fn from_state(state: StoreState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// A consistent copy of the current contents.
    pub fn snapshot(&self) -> StoreState {
        self.state.read().clone()
    }

    /// Stores a new advertisement under a fresh identity and tallies its words.
    /// `build` receives the identity once it is known to be unused.
    pub fn insert_new<G, F>(&self, ids: &mut G, build: F) -> JobAd
    where
        G: IdentityGenerator + ?Sized,
        F: FnOnce(AdHash) -> JobAd,
    {
        let mut state = self.state.write();
        let hash = loop {
            let candidate = ids.candidate();
            if !state.ads.contains_key(&candidate) {
                break candidate;
            }
            tracing::debug!(hash = %candidate, "advertisement identity collision, retrying");
        };

        let ad = build(hash);
        let StoreState { ads, tallies } = &mut *state;
        retally(tallies, &ad.hash, &ad.masculine_words, &ad.feminine_words);
        ads.insert(ad.hash.clone(), ad.clone());
        ad
    }

    /// Replaces the analysis of an existing advertisement and rebuilds its tally.
    pub fn replace_analysis(&self, hash: &str, analysis: Analysis) -> Result<JobAd, StorageError> {
        let mut state = self.state.write();
        let StoreState { ads, tallies } = &mut *state;
        let ad = ads
            .get_mut(hash)
            .ok_or_else(|| StorageError::NotFound(hash.to_string()))?;
        ad.apply(analysis);
        retally(tallies, hash, &ad.masculine_words, &ad.feminine_words);
        Ok(ad.clone())
    }

    pub fn get(&self, hash: &str) -> Option<JobAd> {
        self.state.read().ads.get(hash).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().ads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Word counters of one advertisement, ordered by word.
    pub fn tally(&self, hash: &str) -> Vec<(String, TallyEntry)> {
        self.state
            .read()
            .tallies
            .for_ad(hash)
            .map(|words| {
                words
                    .iter()
                    .map(|(word, entry)| (word.clone(), *entry))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for AdStore {
    fn default() -> Self {
        Self::new()
    }
}
