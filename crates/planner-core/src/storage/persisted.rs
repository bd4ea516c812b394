//! A value that lives in memory and is mirrored to a [`StorageBackend`].
//!
//! Loading falls back to the supplied initial value when nothing is stored or
//! the stored text no longer deserializes. Every `set` writes through to the
//! backend; a failed write is logged and dropped, and the in-memory value is
//! kept. Nothing in here returns an error to the caller.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::StorageBackend;
use crate::error::StorageError;

/// In-memory state with best-effort durability under a string key.
pub struct Persisted<T> {
    key: String,
    value: T,
    initial: T,
    backend: Arc<dyn StorageBackend>,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Acquire the value stored under `key`, or `initial` if there is none
    /// or it cannot be read back.
    pub fn load(backend: Arc<dyn StorageBackend>, key: impl Into<String>, initial: T) -> Self {
        let key = key.into();
        let value = match backend.read(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    tracing::debug!(key = %key, "loaded persisted value");
                    value
                }
                Err(e) => {
                    tracing::warn!(
                        key = %key,
                        error = %e,
                        "stored value unreadable, using default"
                    );
                    initial.clone()
                }
            },
            Ok(None) => {
                tracing::debug!(key = %key, "no persisted value, using default");
                initial.clone()
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "storage read failed, using default");
                initial.clone()
            }
        };

        Self {
            key,
            value,
            initial,
            backend,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current in-memory value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and try to persist it.
    pub fn set(&mut self, value: T) {
        self.value = value;
        if let Err(e) = self.persist() {
            tracing::warn!(
                key = %self.key,
                error = %e,
                "failed to persist value, keeping in-memory copy"
            );
        }
    }

    /// Derive the next value from the current one and [`set`](Self::set) it.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next);
    }

    /// Drop the persisted entry and go back to the initial value.
    ///
    /// The initial value is not written; the key stays absent until the next `set`.
    pub fn clear(&mut self) {
        if let Err(e) = self.backend.remove(&self.key) {
            tracing::warn!(
                key = %self.key,
                error = %e,
                "failed to remove persisted value"
            );
        }
        self.value = self.initial.clone();
    }

    fn persist(&self) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&self.value).map_err(|source| {
            StorageError::Serialize {
                key: self.key.clone(),
                source,
            }
        })?;
        self.backend.write(&self.key, &content)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
