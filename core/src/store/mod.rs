// cartflow_core/src/store/mod.rs

//! Durable cart persistence: the key-value seam and the cart store.

pub mod backend;
pub mod cart_store;

pub use backend::{KeyValueBackend, MemoryBackend};
pub use cart_store::{CartStore, StoreConfig};
