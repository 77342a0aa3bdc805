//! File persistence configuration

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading display preferences
    pub state_path: &'static str,
    /// Storage key for the preferences blob
    pub preferences_key: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".labs_states.json",
        preferences_key: "labs-preferences",
    },
};
