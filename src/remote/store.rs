//! Typed adapter over the remote transport.
//!
//! Translates entities to and from the backend's snake_case rows and tags
//! every failure with the operation and table it came from. The store also
//! owns the "not configured" state: built without a transport, every call
//! fails fast with [`RemoteError::Unavailable`] before any I/O.
//!
//! Nothing here touches the local cache, and nothing here retries.

use std::sync::Arc;

use crate::entity::{Entity, RemoteRow};
use crate::error::{RemoteError, RemoteOp};

use super::transport::RemoteTransport;

#[derive(Clone)]
pub struct RemoteStore {
    transport: Option<Arc<dyn RemoteTransport>>,
}

impl RemoteStore {
    pub fn new(transport: Arc<dyn RemoteTransport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// A store with no backend. Fresh installs run in this state until the
    /// operator enters credentials.
    pub fn unconfigured() -> Self {
        Self { transport: None }
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    fn transport(&self) -> Result<&Arc<dyn RemoteTransport>, RemoteError> {
        self.transport.as_ref().ok_or(RemoteError::Unavailable)
    }

    /// Fetch the whole remote collection.
    ///
    /// A single undecodable row fails the entire list — schema drift should
    /// degrade the read to local-only, not silently drop records.
    pub async fn list_all<E: Entity>(&self) -> Result<Vec<E>, RemoteError> {
        let rows = self
            .transport()?
            .list_all(E::TABLE)
            .await
            .map_err(|e| RemoteError::operation(RemoteOp::List, E::TABLE, e.to_string()))?;
        rows.into_iter()
            .map(|row| {
                serde_json::from_value::<RemoteRow<E::Row>>(row)
                    .map(E::from_remote)
                    .map_err(|e| {
                        RemoteError::operation(
                            RemoteOp::List,
                            E::TABLE,
                            format!("undecodable row: {e}"),
                        )
                    })
            })
            .collect()
    }

    /// Insert the entity's business fields; returns the confirmed entity
    /// carrying the backend's id and timestamps.
    pub async fn insert<E: Entity>(&self, entity: &E) -> Result<E, RemoteError> {
        let transport = self.transport()?;
        let payload = encode_row::<E>(entity, RemoteOp::Insert)?;
        let stored = transport
            .insert(E::TABLE, payload)
            .await
            .map_err(|e| RemoteError::operation(RemoteOp::Insert, E::TABLE, e.to_string()))?;
        serde_json::from_value::<RemoteRow<E::Row>>(stored)
            .map(E::from_remote)
            .map_err(|e| {
                RemoteError::operation(
                    RemoteOp::Insert,
                    E::TABLE,
                    format!("undecodable response row: {e}"),
                )
            })
    }

    /// Overwrite the business fields of the remote row matching the
    /// entity's id.
    pub async fn update<E: Entity>(&self, entity: &E) -> Result<(), RemoteError> {
        let transport = self.transport()?;
        let payload = encode_row::<E>(entity, RemoteOp::Update)?;
        transport
            .update(E::TABLE, entity.id(), payload)
            .await
            .map_err(|e| RemoteError::operation(RemoteOp::Update, E::TABLE, e.to_string()))
    }

    pub async fn delete<E: Entity>(&self, id: &str) -> Result<(), RemoteError> {
        self.transport()?
            .delete(E::TABLE, id)
            .await
            .map_err(|e| RemoteError::operation(RemoteOp::Delete, E::TABLE, e.to_string()))
    }

    pub async fn delete_all<E: Entity>(&self) -> Result<(), RemoteError> {
        self.transport()?
            .delete_all(E::TABLE)
            .await
            .map_err(|e| RemoteError::operation(RemoteOp::DeleteAll, E::TABLE, e.to_string()))
    }
}

fn encode_row<E: Entity>(entity: &E, op: RemoteOp) -> Result<serde_json::Value, RemoteError> {
    serde_json::to_value(entity.to_row())
        .map_err(|e| RemoteError::operation(op, E::TABLE, format!("unencodable row: {e}")))
}
