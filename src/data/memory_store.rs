use {
    crate::data::{DocumentKey, DocumentStore, StoreError, StoreRead},
    async_trait::async_trait,
    serde_json::Value,
    std::{collections::HashMap, time::Duration},
};

/// In-process document store. Backs `--override` and the tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    docs: HashMap<DocumentKey, HashMap<String, Value>>,
    latency: Option<Duration>,
    fail_with: Option<StoreError>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a single document whose `field` holds `value`.
    pub fn with_number(key: DocumentKey, field: &str, value: f64) -> Self {
        Self::new().insert(key, field, Value::from(value))
    }

    pub fn insert(mut self, key: DocumentKey, field: &str, value: Value) -> Self {
        self.docs
            .entry(key)
            .or_default()
            .insert(field.to_string(), value);
        self
    }

    /// Insert an empty document (exists, but has no fields).
    pub fn insert_empty(mut self, key: DocumentKey) -> Self {
        self.docs.entry(key).or_default();
        self
    }

    /// Every read sleeps this long before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Every read fails with `err`.
    pub fn failing(mut self, err: StoreError) -> Self {
        self.fail_with = Some(err);
        self
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn read_number(&self, key: &DocumentKey, field: &str) -> Result<StoreRead, StoreError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }

        let Some(doc) = self.docs.get(key) else {
            return Ok(StoreRead::NotFound);
        };
        Ok(doc
            .get(field)
            .and_then(Value::as_f64)
            .map_or(StoreRead::Malformed, StoreRead::Found))
    }
}
