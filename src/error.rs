// File: src/error.rs
use thiserror::Error;

/// Problems with the word list configuration or the requested language.
/// None of these are retryable; the caller has to fix its input or config.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("invalid prefix {prefix:?} in {list} list for language {language}: {reason}")]
    InvalidPrefix {
        language: String,
        list: &'static str,
        prefix: String,
        reason: &'static str,
    },

    #[error("failed to read word lists: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse word lists: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures of the advertisement store and its on-disk snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("store snapshot is corrupt: {0}")]
    Corrupt(#[from] bincode::Error),

    #[error("advertisement not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum DecoderError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
