// src/lib.rs

pub mod core;
pub mod error;
pub mod persistence;
pub mod store;
pub mod tally;
pub use crate::core::engine::{analyze, DecoderEngine};
pub use crate::core::types::{Analysis, CodingLabel, Gender, JobAd};
pub use crate::core::wordlists::{HyphenRule, WordLists};
pub use crate::error::{ConfigurationError, DecoderError, StorageError};
