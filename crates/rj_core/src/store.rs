use crate::types::NewsItem;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait NewsStore: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch every document in `collection` whose boolean `tag` field is
    /// true, in whatever order the store returns them.
    async fn fetch_tagged(&self, collection: &str) -> Result<Vec<NewsItem>>;
}
