//! Persistence through an injected key-value store.
//!
//! Values are JSON-encoded. Reads degrade to defaults; writes report a
//! `StoreError` that callers may log and ignore.

pub mod error;
pub mod store;
pub mod session;

pub use error::StoreError;
pub use store::{load_json, save_json, KeyValueStore, MemoryStore};
pub use session::SessionStore;
