use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Failure in the local cache. The cache lives on the device, so none of
/// these are connectivity problems; they indicate a broken storage medium
/// or corrupt persisted data.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Corrupt cache data in bucket \"{bucket}\": {source}")]
    Corrupt {
        bucket: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode records for bucket \"{bucket}\": {source}")]
    Encode {
        bucket: String,
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

// ---------------------------------------------------------------------------
// RemoteError
// ---------------------------------------------------------------------------

/// The remote operation being attempted when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    List,
    Insert,
    Update,
    Delete,
    DeleteAll,
}

impl fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RemoteOp::List => "list",
            RemoteOp::Insert => "insert",
            RemoteOp::Update => "update",
            RemoteOp::Delete => "delete",
            RemoteOp::DeleteAll => "delete_all",
        };
        write!(f, "{name}")
    }
}

/// Failure in the remote store adapter.
///
/// `Unavailable` means no transport is configured — the adapter failed fast
/// and no I/O was attempted. `Operation` means a configured transport call
/// failed (network, auth, backend validation, or an undecodable response).
/// Neither variant is retried at this layer.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Remote store is not configured")]
    Unavailable,

    #[error("Remote {op} on \"{table}\" failed: {message}")]
    Operation {
        op: RemoteOp,
        table: &'static str,
        message: String,
    },
}

impl RemoteError {
    pub(crate) fn operation(op: RemoteOp, table: &'static str, message: impl Into<String>) -> Self {
        RemoteError::Operation {
            op,
            table,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file \"{path}\": {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file \"{path}\": {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ---------------------------------------------------------------------------
// FleetbookError — top-level rollup
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum FleetbookError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias — the default error type is `FleetbookError`.
pub type Result<T, E = FleetbookError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
