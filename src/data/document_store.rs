use {
    crate::config::LABS_STORE,
    async_trait::async_trait,
    std::fmt,
    thiserror::Error,
};

/// Two-part address of a document: (collection id, document id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    pub collection: String,
    pub document: String,
}

impl DocumentKey {
    pub fn new(collection: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            document: document.into(),
        }
    }

    /// The fixed document holding the score override.
    pub fn labs() -> Self {
        Self::new(LABS_STORE.collection, LABS_STORE.document)
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.document)
    }
}

/// Outcome of reading one numeric field from a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreRead {
    Found(f64),
    NotFound,
    /// Document exists but the field is absent or not a number.
    Malformed,
}

impl StoreRead {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Found(v) => Some(v),
            Self::NotFound | Self::Malformed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("store answered HTTP {status}")]
    Http { status: u16 },
    #[error("could not decode document: {0}")]
    Decode(String),
    #[error("read timed out after {0} ms")]
    Timeout(u64),
    #[error("fetch worker failed: {0}")]
    Runtime(String),
}

/// Abstract read-only interface to the remote document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read `field` of the document at `key` as a number.
    async fn read_number(&self, key: &DocumentKey, field: &str) -> Result<StoreRead, StoreError>;
}
