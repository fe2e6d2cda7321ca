use rj_core::{AppConfig, Error, GenerativeModel, Result};
use std::sync::Arc;

pub mod dummy;
pub mod gemini;

pub fn create_model(kind: &str, config: &AppConfig) -> Result<Arc<dyn GenerativeModel>> {
    match kind {
        "gemini" => Ok(Arc::new(gemini::GeminiModel::new(config)?)),
        "dummy" => Ok(Arc::new(dummy::DummyModel)),
        other => Err(Error::Inference(format!("Unknown model backend: {}", other))),
    }
}
