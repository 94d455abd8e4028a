//! Merge and ordering rules for the read path.
//!
//! Pure functions over already-fetched record lists; the repository fetches,
//! these decide. Remote wins on id collision, and ordering uses each
//! record's own best-available key — creation instant when the remote
//! backend assigned one, otherwise the business date.

use std::cmp::Ordering;
use std::collections::HashMap;

use time::OffsetDateTime;

use crate::entity::Entity;

// ============================================================================
// Merge
// ============================================================================

/// Collapse the two sides into one record per id, newest first.
///
/// The local list seeds the map; remote records then overwrite, so on a
/// shared id every field value comes from the remote side. Records only one
/// side knows about survive untouched.
pub fn merge_remote_wins<E: Entity>(local: Vec<E>, remote: Vec<E>) -> Vec<E> {
    let mut by_id: HashMap<String, E> = HashMap::with_capacity(local.len() + remote.len());
    for record in local {
        by_id.insert(record.id().to_string(), record);
    }
    for record in remote {
        by_id.insert(record.id().to_string(), record);
    }
    let mut merged: Vec<E> = by_id.into_values().collect();
    sort_newest_first(&mut merged);
    merged
}

// ============================================================================
// Ordering
// ============================================================================

/// The instant a record sorts by: its remote creation time when it has one,
/// else its business date taken as UTC midnight. Each record falls back
/// individually — a list may compare creation instants against dates.
fn sort_key<E: Entity>(record: &E) -> Option<OffsetDateTime> {
    record
        .created_at()
        .or_else(|| record.business_date().map(|d| d.midnight().assume_utc()))
}

/// Newest first; records with no key at all sort last. Ties break by id so
/// the ordering is total and repeat reads come back identical.
pub fn sort_newest_first<E: Entity>(records: &mut [E]) {
    records.sort_by(|a, b| match (sort_key(a), sort_key(b)) {
        (Some(ka), Some(kb)) => kb.cmp(&ka).then_with(|| a.id().cmp(b.id())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id().cmp(b.id()),
    });
}

/// Oldest first; records with no key sort first. The mirror of
/// [`sort_newest_first`], used for chronological display.
pub fn sort_oldest_first<E: Entity>(records: &mut [E]) {
    records.sort_by(|a, b| match (sort_key(a), sort_key(b)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb).then_with(|| a.id().cmp(b.id())),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.id().cmp(b.id()),
    });
}

/// Keep the newest `limit` records, then flip them oldest-first.
///
/// Expects `records` already newest-first (the shape
/// [`merge_remote_wins`] returns).
pub fn limit_chronological<E: Entity>(mut records: Vec<E>, limit: usize) -> Vec<E> {
    records.truncate(limit);
    sort_oldest_first(&mut records);
    records
}

// ============================================================================
// Tests
// ============================================================================
