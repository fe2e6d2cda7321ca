use clap::Parser;
use rj_core::{AppConfig, Result, SpeechService, VoiceGender};
use rj_pipeline::{Composer, Fetcher, Pipeline, Synthesizer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn tagged news into a spoken radio segment", long_about = None)]
struct Cli {
    /// Service-account key file; supplies the project id
    #[arg(long)]
    key_file: Option<PathBuf>,

    /// Store backend. Available: firestore (default), memory
    #[arg(long, default_value = "firestore")]
    store: String,

    /// Model backend. Available: gemini (default), dummy
    #[arg(long, default_value = "gemini")]
    model: String,

    /// Collection holding the tagged news documents
    #[arg(long)]
    collection: Option<String>,

    /// Where the MP3 lands
    #[arg(long)]
    output: Option<PathBuf>,

    /// Named voice for synthesis
    #[arg(long)]
    voice: Option<String>,

    /// Voice locale, e.g. en-IN
    #[arg(long)]
    language: Option<String>,

    /// Voice gender hint: female, male or neutral
    #[arg(long)]
    gender: Option<VoiceGender>,
}

impl Cli {
    fn into_config(self) -> Result<(AppConfig, String, String)> {
        let mut config = match &self.key_file {
            Some(path) => AppConfig::from_key_file(path)?,
            None => AppConfig::from_env(),
        };
        if let Some(collection) = self.collection {
            config.collection = collection;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(voice) = self.voice {
            config.voice.name = voice;
        }
        if let Some(language) = self.language {
            config.voice.language_code = language;
        }
        if let Some(gender) = self.gender {
            config.voice.gender = gender;
        }
        Ok((config, self.store, self.model))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let (config, store_kind, model_kind) = Cli::parse().into_config()?;

    let store = rj_store::create_store(&store_kind, &config)?;
    info!("💾 Store backend initialized ({})", store.name());

    let model = rj_inference::create_model(&model_kind, &config)?;
    info!("🧠 Generative model initialized ({})", model.name());

    let speech = Arc::new(rj_speech::GoogleSpeech::new(&config)?);
    info!("🎙️ Speech service initialized ({})", speech.name());

    let pipeline = Pipeline::new(
        Fetcher::new(store, config.collection.clone()),
        Composer::new(model),
        Synthesizer::new(speech, config.voice.clone()),
        config.output.clone(),
    );

    let artifact = pipeline.run().await?;
    info!(
        "✨ Broadcast segment ready: {} ({} bytes)",
        artifact.path.display(),
        artifact.bytes
    );
    Ok(())
}
