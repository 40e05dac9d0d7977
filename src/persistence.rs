// File: src/persistence.rs
use crate::error::StorageError;
use crate::store::{AdStore, StoreState};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a snapshot of the store next to `path` and atomically moves it into
/// place, so a crash never leaves a half-written file behind.
pub fn save_to_disk(store: &AdStore, path: &Path) -> Result<(), StorageError> {
    let parent_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let state = store.snapshot();

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    tracing::info!(path = %path.display(), ads = state.ads.len(), "store saved");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<AdStore, StorageError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: StoreState = bincode::deserialize_from(reader)?;
    tracing::debug!(path = %path.display(), ads = state.ads.len(), "store loaded");
    Ok(AdStore::from_state(state))
}
