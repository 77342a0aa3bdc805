use {
    crate::{
        config::{FIRESTORE_DEFAULT_BASE_URL, FIRESTORE_ENV, LABS_STORE},
        data::{DocumentKey, DocumentStore, StoreError, StoreRead},
    },
    async_trait::async_trait,
    reqwest::StatusCode,
    serde::Deserialize,
    serde_json::Value,
    std::{collections::HashMap, time::Duration},
};

/// Credentials and endpoint for the Firestore REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub api_key: String,
    pub project_id: String,
    pub base_url: String,
}

impl FirestoreConfig {
    /// `None` when the API key or project id is missing. That is "unconfigured",
    /// not an error.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let api_key = present(FIRESTORE_ENV.api_key)?;
        let project_id = present(FIRESTORE_ENV.project_id)?;
        let base_url = present(FIRESTORE_ENV.base_url)
            .unwrap_or_else(|| FIRESTORE_DEFAULT_BASE_URL.to_string());

        Some(Self {
            api_key,
            project_id,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn document_url(&self, key: &DocumentKey) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url, self.project_id, key.collection, key.document
        )
    }
}

/// Reads documents through the Firestore REST v1 endpoint.
pub struct FirestoreStore {
    client: reqwest::Client,
    config: FirestoreConfig,
}

impl FirestoreStore {
    pub fn new(config: FirestoreConfig) -> Result<Self, StoreError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = LABS_STORE.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn read_number(&self, key: &DocumentKey, field: &str) -> Result<StoreRead, StoreError> {
        let url = self.config.document_url(key);
        let resp = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        classify(status, &body, field)
    }
}

/// Map a REST response onto a read: 404 is a missing document, any other
/// non-success status is an error, success bodies are decoded.
pub(crate) fn classify(
    status: StatusCode,
    body: &str,
    field: &str,
) -> Result<StoreRead, StoreError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(StoreRead::NotFound);
    }
    if !status.is_success() {
        return Err(StoreError::Http {
            status: status.as_u16(),
        });
    }
    decode_number(body, field)
}

#[derive(Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: HashMap<String, FirestoreValue>,
}

// Firestore tags every value with its type; int64 travels as a JSON string.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirestoreValue {
    double_value: Option<Value>,
    integer_value: Option<Value>,
}

impl FirestoreValue {
    fn as_number(&self) -> Option<f64> {
        if let Some(v) = &self.double_value {
            return v.as_f64();
        }
        match &self.integer_value {
            Some(Value::String(s)) => s.parse::<i64>().ok().map(|i| i as f64),
            Some(v) => v.as_i64().map(|i| i as f64),
            None => None,
        }
    }
}

/// Decode a Firestore document body and pull out `field` as a number.
pub(crate) fn decode_number(body: &str, field: &str) -> Result<StoreRead, StoreError> {
    let doc: FirestoreDocument =
        serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))?;

    Ok(doc
        .fields
        .get(field)
        .and_then(FirestoreValue::as_number)
        .map_or(StoreRead::Malformed, StoreRead::Found))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_value_is_found() {
        let body = r#"{"name":"x","fields":{"score":{"doubleValue":71.5}}}"#;
        assert_eq!(decode_number(body, "score"), Ok(StoreRead::Found(71.5)));
    }

    #[test]
    fn integer_value_arrives_as_string() {
        let body = r#"{"fields":{"score":{"integerValue":"88"}}}"#;
        assert_eq!(decode_number(body, "score"), Ok(StoreRead::Found(88.0)));
    }

    #[test]
    fn wrong_type_is_malformed() {
        let body = r#"{"fields":{"score":{"stringValue":"88"}}}"#;
        assert_eq!(decode_number(body, "score"), Ok(StoreRead::Malformed));
    }

    #[test]
    fn missing_field_or_fields_is_malformed() {
        let body = r#"{"fields":{"other":{"doubleValue":1.0}}}"#;
        assert_eq!(decode_number(body, "score"), Ok(StoreRead::Malformed));
        assert_eq!(decode_number("{}", "score"), Ok(StoreRead::Malformed));
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        assert!(matches!(
            decode_number("<html>", "score"),
            Err(StoreError::Decode(_))
        ));
    }

    #[test]
    fn ok_status_decodes_body() {
        let body = r#"{"fields":{"score":{"doubleValue":64.25}}}"#;
        assert_eq!(
            classify(StatusCode::OK, body, "score"),
            Ok(StoreRead::Found(64.25))
        );
        assert_eq!(
            classify(StatusCode::OK, "{}", "score"),
            Ok(StoreRead::Malformed)
        );
    }

    #[test]
    fn not_found_status_is_missing_document() {
        let body = r#"{"error":{"code":404,"status":"NOT_FOUND"}}"#;
        assert_eq!(
            classify(StatusCode::NOT_FOUND, body, "score"),
            Ok(StoreRead::NotFound)
        );
    }

    #[test]
    fn other_failures_keep_their_status() {
        for status in [
            StatusCode::FORBIDDEN,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            // Error bodies are never decoded, even when they look like a document.
            let body = r#"{"fields":{"score":{"doubleValue":1.0}}}"#;
            assert_eq!(
                classify(status, body, "score"),
                Err(StoreError::Http {
                    status: status.as_u16()
                })
            );
        }
    }

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn config_needs_key_and_project() {
        assert_eq!(FirestoreConfig::from_lookup(env(&[])), None);
        assert_eq!(
            FirestoreConfig::from_lookup(env(&[("LABS_FIREBASE_API_KEY", "k")])),
            None
        );
        assert_eq!(
            FirestoreConfig::from_lookup(env(&[
                ("LABS_FIREBASE_API_KEY", "k"),
                ("LABS_FIREBASE_PROJECT_ID", " ")
            ])),
            None
        );

        let cfg = FirestoreConfig::from_lookup(env(&[
            ("LABS_FIREBASE_API_KEY", "k"),
            ("LABS_FIREBASE_PROJECT_ID", "p"),
            ("LABS_FIREBASE_BASE_URL", "http://localhost:8080/v1/"),
        ]))
        .expect("configured");
        assert_eq!(
            cfg.document_url(&DocumentKey::labs()),
            "http://localhost:8080/v1/projects/p/databases/(default)/documents/qspi-crt/labs"
        );
    }
}
