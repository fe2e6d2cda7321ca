use async_trait::async_trait;
use rj_core::{GenerativeModel, Result};

/// Offline stand-in model that echoes its prompt back, so prompt assembly
/// stays inspectable in tests and dry runs.
#[derive(Debug, Default)]
pub struct DummyModel;

#[async_trait]
impl GenerativeModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(prompt.to_string())
    }
}
