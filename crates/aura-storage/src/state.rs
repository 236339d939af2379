use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load a JSON document. A missing key is `Ok(None)`.
pub fn load_state<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(body) = store.get(key)? else {
        return Ok(None);
    };
    let value: T = serde_json::from_slice(&body)?;
    Ok(Some(value))
}

/// Save a JSON document, replacing the previous one.
pub fn save_state<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put(key, body)
}

/// Load a JSON document, treating unreadable or corrupt data as absent.
///
/// Dashboard reads never fail: the failure is logged and the caller renders
/// the empty state.
pub fn load_state_or_none<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    match load_state(store, key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to load stored state, treating as absent");
            None
        }
    }
}
