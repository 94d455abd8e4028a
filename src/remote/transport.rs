//! Remote transport trait.
//!
//! Implementations handle the actual network communication with whatever
//! backend-as-a-service the operator's account lives on. Rows cross this
//! boundary as JSON values in the backend's snake_case schema; the typed
//! translation happens one layer up in [`super::store::RemoteStore`].

use async_trait::async_trait;
use serde_json::Value;

/// Classifies transport failures for logging. Every kind triggers the same
/// local fallback; none is retried by this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Network,
    Auth,
    Backend,
}

/// Transport-level error (wraps arbitrary error strings from the client
/// library underneath).
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: String,
    pub kind: TransportErrorKind,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: TransportErrorKind::Network,
        }
    }

    pub fn with_kind(message: impl Into<String>, kind: TransportErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// Raw row operations against one backend table.
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    /// Fetch every row in `table`, newest first by creation time.
    async fn list_all(&self, table: &str) -> Result<Vec<Value>, TransportError>;

    /// Insert `row` and return the stored row as the backend now holds it,
    /// server-assigned `id` and timestamps included.
    async fn insert(&self, table: &str, row: Value) -> Result<Value, TransportError>;

    /// Overwrite the business fields of the row with `id`.
    async fn update(&self, table: &str, id: &str, row: Value) -> Result<(), TransportError>;

    /// Delete the row with `id`.
    async fn delete(&self, table: &str, id: &str) -> Result<(), TransportError>;

    /// Delete every row in `table`.
    async fn delete_all(&self, table: &str) -> Result<(), TransportError>;
}
