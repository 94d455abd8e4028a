//! Record identity: classifying where an id was minted, and minting new
//! local ids.
//!
//! Records created while the remote backend was reachable carry its UUID
//! primary key. Records created offline carry a locally minted
//! `"<epoch-millis>-<suffix>"` id instead. Every routing decision that
//! depends on id provenance goes through [`is_remote_native`] — there is
//! exactly one definition of "looks like a remote id" in this crate.

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

// ---------------------------------------------------------------------------
// Remote-native classification
// ---------------------------------------------------------------------------

static UUID_REGEX: OnceLock<regex::Regex> = OnceLock::new();

fn uuid_regex() -> &'static regex::Regex {
    UUID_REGEX.get_or_init(|| {
        regex::Regex::new(
            r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
        )
        .expect("uuid regex is valid")
    })
}

/// Returns `true` when `id` has the canonical hyphenated UUID shape the
/// remote backend assigns, `false` for locally minted ids.
///
/// The match is anchored: local ids also contain hyphens, so a substring
/// match would misclassify them. Case is ignored because remote backends
/// differ in the case they echo back.
pub fn is_remote_native(id: &str) -> bool {
    uuid_regex().is_match(id)
}

/// Where a record's authoritative copy lives, derived from its id shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// The remote backend assigned this id; the remote row is authoritative.
    RemoteConfirmed,
    /// Minted on this device; the record exists only in the local cache.
    LocalOnly,
}

/// [`is_remote_native`] as an enum, for callers that want to show or branch
/// on sync state rather than test a bool.
pub fn provenance(id: &str) -> Provenance {
    if is_remote_native(id) {
        Provenance::RemoteConfirmed
    } else {
        Provenance::LocalOnly
    }
}

// ---------------------------------------------------------------------------
// Local id minting
// ---------------------------------------------------------------------------

const SUFFIX_LEN: usize = 9;
const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Mint an id for a record created without remote help.
///
/// Shape is `"<epoch-millis>-<suffix>"`: the millisecond timestamp keeps
/// ids roughly sortable by creation time, the random suffix keeps two
/// creations in the same millisecond from colliding. The result can never
/// satisfy [`is_remote_native`].
pub fn new_local_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{millis}-{}", random_suffix())
}

/// `SUFFIX_LEN` base-36 characters drawn from UUID v4 randomness
/// (`getrandom`/OS CSPRNG), the same entropy source used elsewhere for
/// collision-sensitive identifiers.
fn random_suffix() -> String {
    let mut bits = uuid::Uuid::new_v4().as_u128();
    let mut out = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        out.push(SUFFIX_ALPHABET[(bits % 36) as usize] as char);
        bits /= 36;
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
