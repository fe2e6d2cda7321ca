use crate::types::VoiceSpec;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SpeechService: Send + Sync {
    fn name(&self) -> &str;

    /// Render `text` (the empty string is allowed) with the given voice and
    /// return the raw encoded audio bytes.
    async fn synthesize(&self, text: &str, voice: &VoiceSpec) -> Result<Vec<u8>>;
}
