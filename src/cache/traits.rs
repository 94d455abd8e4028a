//! Cache backend trait.
//!
//! `CacheBackend` is the narrow raw I/O trait implemented by concrete
//! backends (in-memory, SQLite). It knows nothing about entities — a bucket
//! is an opaque string blob, one per collection, holding that collection's
//! serialized record array. The typed operations live in
//! [`super::store::LocalCache`].

use crate::error::CacheError;

/// Low-level bucket storage — raw blob I/O with no record semantics.
///
/// Implementors must be `Send + Sync` so the cache can be shared across
/// tasks. All methods take `&self`; backends handle their own locking.
pub trait CacheBackend: Send + Sync {
    /// Fetch a bucket's raw contents. Returns `None` if the bucket has
    /// never been written (distinct from a bucket holding an empty array).
    fn read_bucket(&self, bucket: &str) -> Result<Option<String>, CacheError>;

    /// Persist (insert or replace) a bucket's raw contents.
    fn write_bucket(&self, bucket: &str, contents: &str) -> Result<(), CacheError>;

    /// Drop a bucket entirely. Removing a bucket that does not exist is a
    /// no-op.
    fn remove_bucket(&self, bucket: &str) -> Result<(), CacheError>;
}
