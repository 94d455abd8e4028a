//! The generic repository — one write path and one read path shared by
//! every entity type.
//!
//! Records live in two places: the always-available local cache and a
//! best-effort remote backend. The repository keeps the local side current
//! no matter what the remote side does:
//!
//! - **add** — try the remote insert first; on success mirror the confirmed
//!   record (remote id, remote timestamps) into the cache, otherwise store
//!   the record locally under a minted local id.
//! - **update / delete** — only remote-native ids are sent to the remote
//!   store; the local mutation is applied regardless of the remote outcome.
//! - **get_all** — fetch both sides concurrently, merge remote-wins, order
//!   newest first.
//! - **reset_all** — best-effort remote wipe, unconditional local clear.
//!
//! Remote failures never surface from these methods; they degrade to the
//! local-only path and leave a log line. Cache failures are the real
//! errors, and every method returns them.
//!
//! No retries, no background promotion of local-only records, no locking
//! across the two stores. A failed remote update or delete leaves the
//! remote row stale until some later successful call touches it; the local
//! mirror stays current for reads throughout.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::cache::{CacheBackend, LocalCache};
use crate::entity::Entity;
use crate::error::{CacheError, RemoteError, RemoteOp, Result};
use crate::identity::is_remote_native;
use crate::remote::RemoteStore;

pub mod merge;

pub struct Repository<E, B> {
    cache: Arc<LocalCache<B>>,
    remote: RemoteStore,
    _entity: PhantomData<E>,
}

impl<E: Entity, B: CacheBackend> Repository<E, B> {
    pub fn new(cache: Arc<LocalCache<B>>, remote: RemoteStore) -> Self {
        Self {
            cache,
            remote,
            _entity: PhantomData,
        }
    }

    /// The merged view of both stores, newest first.
    ///
    /// Both fetches run concurrently and both are awaited. A remote failure
    /// degrades the result to local records only; a cache failure is
    /// returned.
    pub async fn get_all(&self) -> Result<Vec<E>, CacheError> {
        let remote_fut = self.remote.list_all::<E>();
        let local_fut = async { self.cache.get_all::<E>() };
        let (remote, local) = tokio::join!(remote_fut, local_fut);

        let local = local?;
        let remote = match remote {
            Ok(records) => records,
            Err(e) => {
                note_remote_degraded::<E>(RemoteOp::List, &e);
                Vec::new()
            }
        };
        Ok(merge::merge_remote_wins(local, remote))
    }

    /// The newest `limit` records, returned oldest-first for chronological
    /// display.
    pub async fn get_all_limited(&self, limit: usize) -> Result<Vec<E>, CacheError> {
        let merged = self.get_all().await?;
        Ok(merge::limit_chronological(merged, limit))
    }

    /// Store a new record.
    ///
    /// The record goes to the remote store first; when that succeeds the
    /// confirmed record — remote id and timestamps included — is mirrored
    /// into the cache and returned. When it fails (or no remote store is
    /// configured) the record is cached as-is, minting a local id when it
    /// arrived without one, and stays local-only indefinitely.
    pub async fn add(&self, entity: E) -> Result<E, CacheError> {
        match self.remote.insert(&entity).await {
            Ok(confirmed) => {
                self.cache.upsert(&confirmed)?;
                Ok(confirmed)
            }
            Err(e) => {
                note_remote_degraded::<E>(RemoteOp::Insert, &e);
                self.cache.add(entity)
            }
        }
    }

    /// Replace an existing record, matched by id.
    ///
    /// Remote-native ids get a best-effort remote update; locally minted
    /// ids never reach the remote store — the backend has no such row. The
    /// cache is updated regardless. Returns whether a local record matched.
    pub async fn update(&self, entity: &E) -> Result<bool, CacheError> {
        if is_remote_native(entity.id()) {
            if let Err(e) = self.remote.update(entity).await {
                note_remote_degraded::<E>(RemoteOp::Update, &e);
            }
        }
        let replaced = self.cache.update(entity)?;
        if !replaced {
            tracing::debug!(
                table = E::TABLE,
                id = %entity.id(),
                "update matched no cached record"
            );
        }
        Ok(replaced)
    }

    /// Remove a record by id, with the same routing rule as [`update`].
    /// Returns whether a local record matched.
    ///
    /// [`update`]: Repository::update
    pub async fn delete(&self, id: &str) -> Result<bool, CacheError> {
        if is_remote_native(id) {
            if let Err(e) = self.remote.delete::<E>(id).await {
                note_remote_degraded::<E>(RemoteOp::Delete, &e);
            }
        }
        self.cache.delete::<E>(id)
    }

    /// Wipe the collection on both sides. The remote wipe is best-effort;
    /// the local clear always happens. Not undoable.
    pub async fn reset_all(&self) -> Result<(), CacheError> {
        if let Err(e) = self.remote.delete_all::<E>().await {
            note_remote_degraded::<E>(RemoteOp::DeleteAll, &e);
        }
        self.cache.clear::<E>()
    }
}

/// One log line per degraded remote call. An unconfigured store is the
/// expected state on fresh installs and logs at debug; a configured store
/// failing is worth a warning.
fn note_remote_degraded<E: Entity>(op: RemoteOp, err: &RemoteError) {
    match err {
        RemoteError::Unavailable => {
            tracing::debug!(
                table = E::TABLE,
                op = %op,
                "remote store unconfigured; continuing local-only"
            );
        }
        err => {
            tracing::warn!(
                table = E::TABLE,
                op = %op,
                error = %err,
                "remote call failed; continuing local-only"
            );
        }
    }
}
