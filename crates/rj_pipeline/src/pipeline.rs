use crate::{Composer, Fetcher, Synthesizer};
use rj_core::{AudioArtifact, Result};
use std::path::PathBuf;
use tracing::info;

/// The whole show: fetch → compose → synthesize, strictly in that order,
/// each stage's output feeding the next. Holds no state across runs.
pub struct Pipeline {
    fetcher: Fetcher,
    composer: Composer,
    synthesizer: Synthesizer,
    output: PathBuf,
}

impl Pipeline {
    pub fn new(
        fetcher: Fetcher,
        composer: Composer,
        synthesizer: Synthesizer,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            composer,
            synthesizer,
            output: output.into(),
        }
    }

    pub async fn run(&self) -> Result<AudioArtifact> {
        let batch = self.fetcher.fetch().await.into_inner();
        info!("===== retrieval done =====");

        let transcript = self.composer.compose(&batch).await.into_inner();
        info!("===== transcript done =====");

        let artifact = self.synthesizer.synthesize_to(&transcript, &self.output).await?;
        info!("===== synthesis done =====");

        Ok(artifact)
    }
}
