//! Persistence errors.

/// Failure to write to a store.
///
/// Reads never fail: missing or corrupt values degrade to defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The value could not be encoded.
    Serialize(String),
    /// The backing store refused the operation.
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Serialize(msg) => write!(f, "cannot encode value: {msg}"),
            StoreError::Backend(msg) => write!(f, "store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err.to_string())
    }
}
