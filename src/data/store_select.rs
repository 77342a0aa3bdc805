// Picks the document store for this session before the GUI starts

use {
    crate::{
        Cli,
        config::LABS_STORE,
        data::{DocumentKey, DocumentStore, FirestoreConfig, FirestoreStore, MemoryStore},
    },
    std::sync::Arc,
};

/// `None` means "unconfigured": the board runs on static scores.
/// Priority: `--offline`, then `--override`, then Firestore from the environment.
pub fn select_store(args: &Cli) -> Option<Arc<dyn DocumentStore>> {
    match (args.offline, args.score_override, FirestoreConfig::from_env()) {
        (true, _, _) => {
            log::info!("Offline: score override disabled");
            None
        }
        (false, Some(value), _) => {
            log::info!("Using fixed score override {}", value);
            Some(Arc::new(MemoryStore::with_number(
                DocumentKey::labs(),
                LABS_STORE.field,
                value,
            )))
        }
        (false, None, Some(config)) => match FirestoreStore::new(config) {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                log::warn!("Firestore client setup failed, using static scores: {}", e);
                None
            }
        },
        (false, None, None) => None,
    }
}
