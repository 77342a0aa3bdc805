//! Configuration module for the labs board.

// Can all be private now because we have a public re-export.
mod analysis;
mod debug;
mod persistence;
mod store;

// Re-export commonly used items
pub use analysis::{MOMENTUM_WEIGHTS, MomentumWeights};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use store::{FIRESTORE_DEFAULT_BASE_URL, FIRESTORE_ENV, LABS_STORE, LabsStoreConfig};
