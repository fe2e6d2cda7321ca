pub mod config;
pub mod error;
pub mod models;
pub mod soft;
pub mod speech;
pub mod store;
pub mod types;

pub use config::AppConfig;
pub use error::Error;
pub use models::GenerativeModel;
pub use soft::Soft;
pub use speech::SpeechService;
pub use store::NewsStore;
pub use types::{AudioArtifact, NewsItem, VoiceGender, VoiceSpec};

pub type Result<T> = std::result::Result<T, Error>;
