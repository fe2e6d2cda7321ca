use rj_core::{NewsItem, NewsStore, Soft};
use std::sync::Arc;
use tracing::{info, warn};

/// Stage one: pull tagged documents from the store.
pub struct Fetcher {
    store: Arc<dyn NewsStore>,
    collection: String,
}

impl Fetcher {
    pub fn new(store: Arc<dyn NewsStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Fail-soft: a store error becomes `Degraded` and the pipeline carries
    /// on with an empty batch.
    pub async fn fetch(&self) -> Soft<Vec<NewsItem>> {
        match self.store.fetch_tagged(&self.collection).await {
            Ok(items) => {
                info!("📦 Retrieved {} tagged items", items.len());
                Soft::Ok(items)
            }
            Err(e) => {
                warn!("❌ Error fetching data from {}: {}", self.store.name(), e);
                Soft::Degraded
            }
        }
    }
}
