// cartflow_core/src/store/backend.rs

//! The durable key-value seam standing in for browser local storage.

use crate::error::CartResult;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Flat string-keyed storage. One key holds the serialized cart, one
/// optionally holds the last order record.
///
/// Operations are synchronous, matching the storage model of the target
/// runtime: a mutation is durable the moment `set` returns. Backend
/// failures (quota, I/O) surface as `CartError::Storage`.
pub trait KeyValueBackend: Send + Sync + std::fmt::Debug {
  fn get(&self, key: &str) -> CartResult<Option<String>>;
  fn set(&self, key: &str, value: &str) -> CartResult<()>;
  fn remove(&self, key: &str) -> CartResult<()>;
}

/// Process-local backend used by tests, demos, and headless embeddings.
#[derive(Debug, Default)]
pub struct MemoryBackend {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
  pub fn new() -> Self {
    MemoryBackend::default()
  }

  /// Raw insert bypassing `CartStore` validation. Handy for seeding
  /// corrupt payloads when exercising the self-healing read path.
  pub fn seed(&self, key: &str, value: &str) {
    self.entries.write().insert(key.to_string(), value.to_string());
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.entries.read().contains_key(key)
  }

  pub fn raw(&self, key: &str) -> Option<String> {
    self.entries.read().get(key).cloned()
  }
}

impl KeyValueBackend for MemoryBackend {
  fn get(&self, key: &str) -> CartResult<Option<String>> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> CartResult<()> {
    self.entries.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> CartResult<()> {
    self.entries.write().remove(key);
    Ok(())
  }
}
