use physio_core::models::Snapshot;
use tracing::{info, warn};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Parse a stored snapshot, failing on anything that is not
/// `{ "patients": [...] }` with well-formed patients.
pub fn parse_snapshot(raw: &str) -> Result<Snapshot, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

/// Load the snapshot under `key`.
///
/// Never fails: an absent key, an unreadable store, or malformed contents
/// all yield an empty snapshot (the latter two with a warning).
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Snapshot {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Snapshot::default(),
        Err(e) => {
            warn!(key, error = %e, "failed to read stored state, starting empty");
            return Snapshot::default();
        }
    };

    match parse_snapshot(&raw) {
        Ok(snapshot) => {
            info!(key, patients = snapshot.patients.len(), "state loaded");
            snapshot
        }
        Err(e) => {
            warn!(key, error = %e, "discarding malformed stored state");
            Snapshot::default()
        }
    }
}

/// Serialize and write the snapshot under `key`.
pub fn save_state<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    snapshot: &Snapshot,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(snapshot)?;
    store.set(key, &body)?;
    info!(key, patients = snapshot.patients.len(), "state saved");
    Ok(())
}
