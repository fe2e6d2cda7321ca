use rj_core::{AudioArtifact, Result, SpeechService, VoiceSpec};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Stage three: render the transcript as audio and write the one output
/// file. Unlike the first two stages this one has no fail-soft wrapper:
/// producing no audio is the failure signal an operator actually sees, so
/// synthesis and I/O errors propagate.
pub struct Synthesizer {
    service: Arc<dyn SpeechService>,
    voice: VoiceSpec,
}

impl Synthesizer {
    pub fn new(service: Arc<dyn SpeechService>, voice: VoiceSpec) -> Self {
        Self { service, voice }
    }

    pub async fn synthesize_to(&self, text: &str, path: &Path) -> Result<AudioArtifact> {
        let audio = self.service.synthesize(text, &self.voice).await?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Truncates any previous run's output. The handle closes when `out`
        // drops, on the error path included.
        let mut out = File::create(path)?;
        out.write_all(&audio)?;

        info!("🔉 Audio content written to {}", path.display());
        Ok(AudioArtifact {
            path: path.to_path_buf(),
            bytes: audio.len() as u64,
        })
    }
}
