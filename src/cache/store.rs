//! Typed record operations over a raw bucket backend.
//!
//! Each entity type occupies one bucket (named after its table) holding the
//! whole collection as a JSON array — the working sets here are a few
//! hundred records at most, so every operation is a read-modify-write of
//! that array. One `LocalCache` serves all entity types; the type parameter
//! on each method picks the bucket.

use crate::entity::Entity;
use crate::error::CacheError;
use crate::identity::new_local_id;

use super::traits::CacheBackend;

pub struct LocalCache<B> {
    backend: B,
}

impl<B: CacheBackend> LocalCache<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// All records of `E`, in insertion order. A bucket that was never
    /// written reads as an empty collection.
    pub fn get_all<E: Entity>(&self) -> Result<Vec<E>, CacheError> {
        self.load::<E>()
    }

    /// Append a record, minting a local id first when the record arrives
    /// without one. Returns the record as stored.
    pub fn add<E: Entity>(&self, mut entity: E) -> Result<E, CacheError> {
        if entity.id().is_empty() {
            entity.set_id(new_local_id());
        }
        let mut records = self.load::<E>()?;
        records.push(entity.clone());
        self.save::<E>(&records)?;
        Ok(entity)
    }

    /// Replace the record with the same id, or append when no record has
    /// it. This is how a remote-confirmed record lands in the cache under
    /// its server-assigned id.
    pub fn upsert<E: Entity>(&self, entity: &E) -> Result<(), CacheError> {
        let mut records = self.load::<E>()?;
        match records.iter_mut().find(|r| r.id() == entity.id()) {
            Some(slot) => *slot = entity.clone(),
            None => records.push(entity.clone()),
        }
        self.save::<E>(&records)
    }

    /// Replace the record with the same id. Returns `false` (without
    /// writing) when no record has it — update never creates.
    pub fn update<E: Entity>(&self, entity: &E) -> Result<bool, CacheError> {
        let mut records = self.load::<E>()?;
        match records.iter_mut().find(|r| r.id() == entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                self.save::<E>(&records)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with `id`. Returns `false` when no record has it.
    pub fn delete<E: Entity>(&self, id: &str) -> Result<bool, CacheError> {
        let mut records = self.load::<E>()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save::<E>(&records)?;
        Ok(true)
    }

    /// Drop the whole collection.
    pub fn clear<E: Entity>(&self) -> Result<(), CacheError> {
        self.backend.remove_bucket(E::TABLE)
    }

    fn load<E: Entity>(&self) -> Result<Vec<E>, CacheError> {
        match self.backend.read_bucket(E::TABLE)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| CacheError::Corrupt {
                bucket: E::TABLE.to_string(),
                source: e,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save<E: Entity>(&self, records: &[E]) -> Result<(), CacheError> {
        let raw = serde_json::to_string(records).map_err(|e| CacheError::Encode {
            bucket: E::TABLE.to_string(),
            source: e,
        })?;
        self.backend.write_bucket(E::TABLE, &raw)
    }
}
