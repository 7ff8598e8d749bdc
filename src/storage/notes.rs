//! Note collection codec and load/save over a [`KeyValueStore`].
//!
//! Encoding is compact JSON with a fixed field order, so re-saving a
//! collection this crate wrote reproduces the same bytes. Coordinates are
//! `f32`: values written elsewhere are normalized on the first save (`0`
//! becomes `0.0`, extra `f64` digits are dropped) and stable after that.
//! Timestamps are integer milliseconds; ISO date strings do not load.

use super::error::StorageResult;
use super::kv::KeyValueStore;
use crate::profile_scope;
use crate::types::Note;

/// Serialize the full collection as a JSON array.
pub fn encode_notes(notes: &[Note]) -> StorageResult<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Parse a JSON array of note records.
pub fn decode_notes(raw: &str) -> StorageResult<Vec<Note>> {
    Ok(serde_json::from_str(raw)?)
}

/// Load the collection stored under `key`.
///
/// Never fails: a missing value is an empty board, and unreadable or
/// malformed data is logged and also treated as an empty board.
pub fn load_notes(store: &dyn KeyValueStore, key: &str) -> Vec<Note> {
    profile_scope!("load_notes");

    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "No saved notes, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read saved notes");
            return Vec::new();
        }
    };

    match decode_notes(&raw) {
        Ok(notes) => {
            tracing::debug!(key, count = notes.len(), "Loaded notes");
            notes
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to parse saved notes");
            Vec::new()
        }
    }
}

/// Rewrite the whole collection under `key`.
pub fn save_notes(store: &mut dyn KeyValueStore, key: &str, notes: &[Note]) -> StorageResult<()> {
    profile_scope!("save_notes");

    let encoded = encode_notes(notes)?;
    store.set(key, &encoded)
}
