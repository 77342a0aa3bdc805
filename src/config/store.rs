//! Remote document store settings for the score override.

/// Where the override lives and which sector it replaces.
pub struct LabsStoreConfig {
    /// Collection id of the override document
    pub collection: &'static str,
    /// Document id inside `collection`
    pub document: &'static str,
    /// Numeric field read from the document
    pub field: &'static str,
    /// Sector whose scores the override replaces
    pub designated_sector: &'static str,
    /// Request timeout. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

pub const LABS_STORE: LabsStoreConfig = LabsStoreConfig {
    collection: "qspi-crt",
    document: "labs",
    field: "score",
    designated_sector: "semiconductor",
    timeout_ms: None,
};

/// Environment variables holding the Firestore credentials.
pub struct FirestoreEnv {
    pub api_key: &'static str,
    pub project_id: &'static str,
    pub base_url: &'static str,
}

pub const FIRESTORE_ENV: FirestoreEnv = FirestoreEnv {
    api_key: "LABS_FIREBASE_API_KEY",
    project_id: "LABS_FIREBASE_PROJECT_ID",
    base_url: "LABS_FIREBASE_BASE_URL",
};

pub const FIRESTORE_DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
