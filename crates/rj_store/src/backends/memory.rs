use async_trait::async_trait;
use rj_core::{NewsItem, NewsStore, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process news store for tests and offline runs.
#[derive(Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<NewsItem>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, collection: &str, item: NewsItem) {
        let mut collections = self.collections.write().await;
        collections.entry(collection.to_string()).or_default().push(item);
    }
}

#[async_trait]
impl NewsStore for MemoryStore {
    fn name(&self) -> &str {
        "Memory"
    }

    async fn fetch_tagged(&self, collection: &str) -> Result<Vec<NewsItem>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|items| items.iter().filter(|item| item.is_tagged()).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_returns_only_tagged_items_in_insertion_order() {
        let store = MemoryStore::new();
        store
            .insert("news", NewsItem::new("First", "A").with_tag(true))
            .await;
        store
            .insert("news", NewsItem::new("Skipped", "B").with_tag(false))
            .await;
        store.insert("news", NewsItem::new("Untagged", "C")).await;
        store
            .insert("news", NewsItem::new("Second", "D").with_tag(true))
            .await;

        let items = store.fetch_tagged("news").await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("First"));
        assert_eq!(items[1].title.as_deref(), Some("Second"));
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let store = MemoryStore::new();
        store
            .insert("news", NewsItem::new("A", "B").with_tag(true))
            .await;

        let items = store.fetch_tagged("sports").await.unwrap();
        assert!(items.is_empty());
    }
}
