// src/core/mod.rs
pub mod engine;
pub mod matcher;
pub mod normalizer;
pub mod scorer;
pub mod types;
pub mod wordlists;
