use crate::prompt;
use rj_core::{GenerativeModel, NewsItem, Soft};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Stage two: filter the batch, build the prompt, ask the model.
pub struct Composer {
    model: Arc<dyn GenerativeModel>,
}

impl Composer {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Fail-soft: a model error becomes `Degraded` (an empty transcript).
    /// An empty batch is not special-cased; the prompt announces 0 stories.
    pub async fn compose(&self, batch: &[NewsItem]) -> Soft<String> {
        let dropped = batch.len() - prompt::composable(batch).len();
        if dropped > 0 {
            debug!("Dropped {} records missing title or content", dropped);
        }

        let prompt = prompt::build_prompt(batch);
        match self.model.generate(&prompt).await {
            Ok(text) => {
                info!("🗒️ Transcript generated ({} chars)", text.len());
                Soft::Ok(text)
            }
            Err(e) => {
                warn!("❌ Error generating transcript with {}: {}", self.model.name(), e);
                Soft::Degraded
            }
        }
    }
}
