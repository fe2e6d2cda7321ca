use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Client;
use rj_core::{AppConfig, Error, Result, SpeechService, VoiceSpec};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig<'a>,
}

#[derive(Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
    ssml_gender: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig<'a> {
    audio_encoding: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

/// Google Cloud Text-to-Speech over REST, MP3 output.
pub struct GoogleSpeech {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl fmt::Debug for GoogleSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleSpeech")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl GoogleSpeech {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: "https://texttospeech.googleapis.com/v1/text:synthesize".to_string(),
            access_token: config.access_token()?.to_string(),
        })
    }
}

#[async_trait]
impl SpeechService for GoogleSpeech {
    fn name(&self) -> &str {
        "Google Text-to-Speech"
    }

    async fn synthesize(&self, text: &str, voice: &VoiceSpec) -> Result<Vec<u8>> {
        let request = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: &voice.language_code,
                name: &voice.name,
                ssml_gender: voice.gender.as_str(),
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
            },
        };

        let response: SynthesizeResponse = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let audio = STANDARD
            .decode(response.audio_content.as_bytes())
            .map_err(|e| Error::Synthesis(format!("Invalid audio payload: {}", e)))?;
        debug!("Synthesized {} bytes of MP3 audio", audio.len());
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_the_wire_format() {
        let voice = VoiceSpec::default();
        let request = SynthesizeRequest {
            input: SynthesisInput { text: "And that's the news." },
            voice: VoiceSelection {
                language_code: &voice.language_code,
                name: &voice.name,
                ssml_gender: voice.gender.as_str(),
            },
            audio_config: AudioConfig { audio_encoding: "MP3" },
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "input": { "text": "And that's the news." },
                "voice": {
                    "languageCode": "en-IN",
                    "name": "en-IN-Chirp3-HD-Zephyr",
                    "ssmlGender": "FEMALE"
                },
                "audioConfig": { "audioEncoding": "MP3" }
            })
        );
    }

    #[test]
    fn audio_payload_is_base64_decoded() {
        let response: SynthesizeResponse =
            serde_json::from_value(json!({ "audioContent": "SUQzBAA=" })).unwrap();
        let audio = STANDARD.decode(response.audio_content.as_bytes()).unwrap();
        assert_eq!(audio, b"ID3\x04\x00");
    }

    #[test]
    fn service_requires_a_token() {
        assert!(GoogleSpeech::new(&AppConfig::default()).is_err());
    }
}
