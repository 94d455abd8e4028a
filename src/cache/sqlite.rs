//! SQLite cache backend.
//!
//! Implements `CacheBackend` using rusqlite (bundled). One `buckets` table
//! keyed by bucket name; the connection sits behind a `parking_lot::Mutex`
//! since every operation is a single statement.

use parking_lot::Mutex;
use rusqlite::{params, Connection};

use crate::error::CacheError;

use super::traits::CacheBackend;

pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    /// Open (and if necessary create) a file-backed cache database.
    pub fn open(path: &str) -> Result<Self, CacheError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory cache database (useful for tests).
    pub fn open_in_memory() -> Result<Self, CacheError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, CacheError> {
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;
             PRAGMA busy_timeout=5000;",
        )?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS buckets (
                name     TEXT PRIMARY KEY,
                contents TEXT NOT NULL
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute `f` with a shared reference to the underlying connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T, CacheError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn).map_err(CacheError::from)
    }
}

impl CacheBackend for SqliteBackend {
    fn read_bucket(&self, bucket: &str) -> Result<Option<String>, CacheError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached("SELECT contents FROM buckets WHERE name = ?1")?;
        match stmt.query_row(params![bucket], |row| row.get::<_, String>(0)) {
            Ok(contents) => Ok(Some(contents)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_bucket(&self, bucket: &str, contents: &str) -> Result<(), CacheError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO buckets (name, contents) VALUES (?1, ?2)",
                params![bucket, contents],
            )
            .map(|_| ())
        })
    }

    fn remove_bucket(&self, bucket: &str) -> Result<(), CacheError> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM buckets WHERE name = ?1", params![bucket])
                .map(|_| ())
        })
    }
}
