use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GenerativeModel: Send + Sync {
    fn name(&self) -> &str;

    /// Run one blocking completion for `prompt` and return the generated
    /// text as-is.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
