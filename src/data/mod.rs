mod document_store;
mod firestore;
mod memory_store;
mod override_fetch;
mod store_select;

pub use {
    document_store::{DocumentKey, DocumentStore, StoreError, StoreRead},
    firestore::{FirestoreConfig, FirestoreStore},
    memory_store::MemoryStore,
    override_fetch::{FetchOutcome, FetchState, OverrideFetch, fetch_override},
    store_select::select_store,
};
