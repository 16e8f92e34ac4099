//! Session cache for fetched data.
//!
//! Provides sessionStorage-based caching for the current browser session.
//! Cache is automatically cleared when the tab/window is closed.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;

/// Cache operation errors.
#[derive(Debug, Clone)]
pub enum CacheError {
    /// sessionStorage not available.
    StorageUnavailable,
    /// Failed to serialize data to JSON.
    SerializationFailed,
    /// Failed to write to storage (usually quota exceeded).
    WriteFailed,
}

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}

/// Remove a cached entry (used before retrying a failed load).
pub fn remove(key: &str) {
    if let Some(storage) = dom::session_storage() {
        let _ = storage.remove_item(key);
    }
}
