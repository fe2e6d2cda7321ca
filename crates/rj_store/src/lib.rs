use rj_core::{AppConfig, Error, NewsStore, Result};
use std::sync::Arc;

pub mod backends;

pub use backends::firestore::FirestoreStore;
pub use backends::memory::MemoryStore;

pub fn create_store(kind: &str, config: &AppConfig) -> Result<Arc<dyn NewsStore>> {
    match kind {
        "firestore" => Ok(Arc::new(FirestoreStore::new(config)?)),
        "memory" => Ok(Arc::new(MemoryStore::new())),
        other => Err(Error::Store(format!("Unknown store backend: {}", other))),
    }
}
