use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::str::FromStr;

/// A news document pulled from the broadcast store.
///
/// Only `title` and `content` matter to the pipeline; everything else the
/// store attached (the boolean `tag` among them) lands in `extra`. Both
/// fields are optional on purpose: presence is what the composer filters
/// on, so an empty string is still a present field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            extra: Map::new(),
        }
    }

    pub fn with_tag(mut self, tag: bool) -> Self {
        self.extra.insert("tag".to_string(), Value::Bool(tag));
        self
    }

    /// Whether the document is selected for the next broadcast segment.
    pub fn is_tagged(&self) -> bool {
        self.extra.get("tag").and_then(Value::as_bool).unwrap_or(false)
    }
}

/// The one file the pipeline leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioArtifact {
    pub path: PathBuf,
    pub bytes: u64,
}

/// How the speech service should render the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSpec {
    pub language_code: String,
    pub name: String,
    pub gender: VoiceGender,
}

impl Default for VoiceSpec {
    fn default() -> Self {
        Self {
            language_code: "en-IN".to_string(),
            name: "en-IN-Chirp3-HD-Zephyr".to_string(),
            gender: VoiceGender::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoiceGender {
    Female,
    Male,
    Neutral,
}

impl VoiceGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceGender::Female => "FEMALE",
            VoiceGender::Male => "MALE",
            VoiceGender::Neutral => "NEUTRAL",
        }
    }
}

impl FromStr for VoiceGender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "female" => Ok(VoiceGender::Female),
            "male" => Ok(VoiceGender::Male),
            "neutral" => Ok(VoiceGender::Neutral),
            other => Err(format!("Unknown voice gender: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn news_item_deserializes_loose_documents() {
        let item: NewsItem = serde_json::from_value(json!({
            "title": "Flood warning",
            "content": "Rivers rising in the north.",
            "tag": true,
            "source": "wire"
        }))
        .unwrap();

        assert_eq!(item.title.as_deref(), Some("Flood warning"));
        assert!(item.is_tagged());
        assert_eq!(item.extra.get("source"), Some(&json!("wire")));
    }

    #[test]
    fn missing_fields_stay_absent() {
        let item: NewsItem = serde_json::from_value(json!({ "title": "Solo" })).unwrap();
        assert!(item.title.is_some());
        assert!(item.content.is_none());
        assert!(!item.is_tagged());
    }

    #[test]
    fn empty_string_is_present_not_absent() {
        let item: NewsItem =
            serde_json::from_value(json!({ "title": "T", "content": "" })).unwrap();
        assert_eq!(item.content.as_deref(), Some(""));
    }

    #[test]
    fn voice_gender_round_trip() {
        assert_eq!("female".parse::<VoiceGender>().unwrap(), VoiceGender::Female);
        assert_eq!(VoiceGender::Neutral.as_str(), "NEUTRAL");
        assert!("robot".parse::<VoiceGender>().is_err());
    }
}
