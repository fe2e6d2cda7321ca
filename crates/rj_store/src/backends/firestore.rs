use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use reqwest::Client;
use rj_core::{AppConfig, NewsItem, NewsStore, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

lazy_static! {
    // One connection pool for the process. Building a second FirestoreStore
    // reuses it instead of re-initializing.
    static ref HTTP: Client = Client::new();
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunQueryRequest {
    structured_query: StructuredQuery,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StructuredQuery {
    from: Vec<CollectionSelector>,
    #[serde(rename = "where")]
    filter: QueryFilter,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector {
    collection_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryFilter {
    field_filter: FieldFilter,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldFilter {
    field: FieldReference,
    op: String,
    value: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReference {
    field_path: String,
}

#[derive(Deserialize)]
struct RunQueryResult {
    // runQuery streams one element per matched document; elements carrying
    // only read metadata have no document.
    document: Option<FirestoreDocument>,
}

#[derive(Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: Map<String, Value>,
}

/// News store backed by Google Firestore's REST API.
pub struct FirestoreStore {
    project_id: String,
    access_token: String,
    base_url: String,
}

impl FirestoreStore {
    pub fn new(config: &AppConfig) -> Result<Self> {
        if config.project_id.is_empty() {
            return Err(rj_core::Error::Config(
                "Firestore needs a project id (key file or GOOGLE_CLOUD_PROJECT)".to_string(),
            ));
        }
        let access_token = config.access_token()?.to_string();
        info!("✅ Connected to Firestore (project {})", config.project_id);
        Ok(Self {
            project_id: config.project_id.clone(),
            access_token,
            base_url: "https://firestore.googleapis.com/v1".to_string(),
        })
    }

    fn run_query_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents:runQuery",
            self.base_url, self.project_id
        )
    }

    fn tagged_query(collection: &str) -> RunQueryRequest {
        RunQueryRequest {
            structured_query: StructuredQuery {
                from: vec![CollectionSelector {
                    collection_id: collection.to_string(),
                }],
                filter: QueryFilter {
                    field_filter: FieldFilter {
                        field: FieldReference {
                            field_path: "tag".to_string(),
                        },
                        op: "EQUAL".to_string(),
                        value: json!({ "booleanValue": true }),
                    },
                },
            },
        }
    }
}

#[async_trait]
impl NewsStore for FirestoreStore {
    fn name(&self) -> &str {
        "Firestore"
    }

    async fn fetch_tagged(&self, collection: &str) -> Result<Vec<NewsItem>> {
        let request = Self::tagged_query(collection);
        let results: Vec<RunQueryResult> = HTTP
            .post(self.run_query_url())
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut items = Vec::new();
        for result in results {
            if let Some(document) = result.document {
                items.push(decode_document(document.fields)?);
            }
        }
        debug!("Firestore returned {} documents from {}", items.len(), collection);
        Ok(items)
    }
}

fn decode_document(fields: Map<String, Value>) -> Result<NewsItem> {
    let mut flat = Map::new();
    for (name, value) in fields {
        flat.insert(name, decode_value(&value));
    }
    Ok(serde_json::from_value(Value::Object(flat))?)
}

/// Unwrap one level of Firestore's typed value envelope
/// (`{"stringValue": "…"}` and friends) into a plain JSON value.
fn decode_value(value: &Value) -> Value {
    let Some(envelope) = value.as_object() else {
        return Value::Null;
    };
    if let Some(s) = envelope.get("stringValue") {
        return s.clone();
    }
    if let Some(b) = envelope.get("booleanValue") {
        return b.clone();
    }
    if let Some(n) = envelope.get("integerValue") {
        // Firestore serializes int64 as a decimal string
        if let Some(parsed) = n.as_str().and_then(|s| s.parse::<i64>().ok()) {
            return json!(parsed);
        }
        return n.clone();
    }
    if let Some(n) = envelope.get("doubleValue") {
        return n.clone();
    }
    if let Some(t) = envelope.get("timestampValue") {
        if let Some(parsed) = t.as_str().and_then(|s| DateTime::parse_from_rfc3339(s).ok()) {
            return Value::String(parsed.with_timezone(&Utc).to_rfc3339());
        }
        return t.clone();
    }
    if let Some(map) = envelope.get("mapValue") {
        let mut flat = Map::new();
        if let Some(fields) = map.get("fields").and_then(Value::as_object) {
            for (name, nested) in fields {
                flat.insert(name.clone(), decode_value(nested));
            }
        }
        return Value::Object(flat);
    }
    if let Some(array) = envelope.get("arrayValue") {
        let values = array
            .get("values")
            .and_then(Value::as_array)
            .map(|values| values.iter().map(decode_value).collect())
            .unwrap_or_default();
        return Value::Array(values);
    }
    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_query_serializes_the_fixed_filter() {
        let request = FirestoreStore::tagged_query("news");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body["structuredQuery"]["from"][0]["collectionId"],
            json!("news")
        );
        let filter = &body["structuredQuery"]["where"]["fieldFilter"];
        assert_eq!(filter["field"]["fieldPath"], json!("tag"));
        assert_eq!(filter["op"], json!("EQUAL"));
        assert_eq!(filter["value"]["booleanValue"], json!(true));
    }

    #[test]
    fn decodes_typed_values_into_a_flat_record() {
        let fields: Map<String, Value> = serde_json::from_value(json!({
            "title": { "stringValue": "Monsoon update" },
            "content": { "stringValue": "Heavy rain expected." },
            "tag": { "booleanValue": true },
            "priority": { "integerValue": "3" },
            "published": { "timestampValue": "2024-06-01T10:00:00Z" }
        }))
        .unwrap();

        let item = decode_document(fields).unwrap();
        assert_eq!(item.title.as_deref(), Some("Monsoon update"));
        assert_eq!(item.content.as_deref(), Some("Heavy rain expected."));
        assert!(item.is_tagged());
        assert_eq!(item.extra.get("priority"), Some(&json!(3)));
        assert_eq!(
            item.extra.get("published"),
            Some(&json!("2024-06-01T10:00:00+00:00"))
        );
    }

    #[test]
    fn document_without_content_keeps_the_field_absent() {
        let fields: Map<String, Value> = serde_json::from_value(json!({
            "title": { "stringValue": "Headline only" },
            "tag": { "booleanValue": true }
        }))
        .unwrap();

        let item = decode_document(fields).unwrap();
        assert!(item.title.is_some());
        assert!(item.content.is_none());
    }

    #[test]
    fn empty_string_field_survives_decoding_as_present() {
        let fields: Map<String, Value> = serde_json::from_value(json!({
            "title": { "stringValue": "T" },
            "content": { "stringValue": "" }
        }))
        .unwrap();

        let item = decode_document(fields).unwrap();
        assert_eq!(item.content.as_deref(), Some(""));
    }

    #[test]
    fn nested_and_array_values_decode_recursively() {
        let decoded = decode_value(&json!({
            "mapValue": { "fields": {
                "tags": { "arrayValue": { "values": [
                    { "stringValue": "weather" },
                    { "stringValue": "local" }
                ]}}
            }}
        }));
        assert_eq!(decoded, json!({ "tags": ["weather", "local"] }));
    }

    #[test]
    fn store_requires_project_and_token() {
        let config = AppConfig::default();
        assert!(FirestoreStore::new(&config).is_err());

        let config = AppConfig {
            project_id: "radio-jockey-testing-site".to_string(),
            ..AppConfig::default()
        };
        // Project set but no token
        assert!(FirestoreStore::new(&config).is_err());
    }
}
