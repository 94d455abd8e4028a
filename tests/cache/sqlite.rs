//! Tests for `SqliteBackend` — raw bucket I/O plus durability across a
//! close-and-reopen, which is the property the memory backend cannot give.

use fleetbook::cache::{CacheBackend, LocalCache, SqliteBackend};
use fleetbook::{DailyMileage, Order};
use time::macros::date;

// ============================================================================
// Test helpers
// ============================================================================

fn make_backend() -> SqliteBackend {
    SqliteBackend::open_in_memory().expect("open in-memory DB")
}

fn make_order(id: &str, customer: &str) -> Order {
    Order {
        id: id.to_string(),
        order_type: "delivery".to_string(),
        customer: customer.to_string(),
        amount: 12000.0,
        date: Some(date!(2024 - 04 - 01)),
        ..Default::default()
    }
}

// ============================================================================
// Raw bucket I/O
// ============================================================================

#[test]
fn read_bucket_returns_none_for_missing_bucket() {
    let backend = make_backend();
    assert_eq!(backend.read_bucket("orders").unwrap(), None);
}

#[test]
fn write_then_read_round_trips() {
    let backend = make_backend();
    backend.write_bucket("orders", r#"[{"id":"a"}]"#).unwrap();
    assert_eq!(
        backend.read_bucket("orders").unwrap().as_deref(),
        Some(r#"[{"id":"a"}]"#)
    );
}

#[test]
fn write_overwrites_existing_bucket() {
    let backend = make_backend();
    backend.write_bucket("orders", "[]").unwrap();
    backend.write_bucket("orders", r#"["x"]"#).unwrap();
    assert_eq!(
        backend.read_bucket("orders").unwrap().as_deref(),
        Some(r#"["x"]"#)
    );
}

#[test]
fn buckets_are_independent() {
    let backend = make_backend();
    backend.write_bucket("orders", "[1]").unwrap();
    backend.write_bucket("spareparts", "[2]").unwrap();
    backend.remove_bucket("orders").unwrap();
    assert_eq!(backend.read_bucket("orders").unwrap(), None);
    assert_eq!(
        backend.read_bucket("spareparts").unwrap().as_deref(),
        Some("[2]")
    );
}

#[test]
fn remove_missing_bucket_is_a_noop() {
    let backend = make_backend();
    backend.remove_bucket("never-written").unwrap();
}

// ============================================================================
// Durability
// ============================================================================

#[test]
fn contents_survive_close_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fleet.db");
    let path = path.to_str().unwrap();

    {
        let backend = SqliteBackend::open(path).unwrap();
        backend.write_bucket("orders", r#"[{"id":"kept"}]"#).unwrap();
    }

    let reopened = SqliteBackend::open(path).unwrap();
    assert_eq!(
        reopened.read_bucket("orders").unwrap().as_deref(),
        Some(r#"[{"id":"kept"}]"#)
    );
}

#[test]
fn typed_records_survive_close_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fleet.db");
    let path = path.to_str().unwrap();

    let stored = {
        let cache = LocalCache::new(SqliteBackend::open(path).unwrap());
        cache.add(make_order("", "Ibu Sari")).unwrap()
    };

    let cache = LocalCache::new(SqliteBackend::open(path).unwrap());
    let all: Vec<Order> = cache.get_all().unwrap();
    assert_eq!(all, vec![stored]);
}

// ============================================================================
// Typed operations over SQLite
// ============================================================================

#[test]
fn typed_crud_works_over_sqlite() {
    let cache = LocalCache::new(make_backend());

    let stored = cache.add(make_order("", "first")).unwrap();
    assert!(cache.update(&make_order(&stored.id, "renamed")).unwrap());
    let all: Vec<Order> = cache.get_all().unwrap();
    assert_eq!(all[0].customer, "renamed");

    assert!(cache.delete::<Order>(&stored.id).unwrap());
    assert!(cache.get_all::<Order>().unwrap().is_empty());
}

#[test]
fn collections_keep_separate_buckets() {
    let cache = LocalCache::new(make_backend());
    cache.add(make_order("", "a")).unwrap();
    cache
        .add(DailyMileage {
            mileage: 55,
            date: Some(date!(2024 - 04 - 02)),
            ..Default::default()
        })
        .unwrap();

    cache.clear::<Order>().unwrap();
    assert!(cache.get_all::<Order>().unwrap().is_empty());
    assert_eq!(cache.get_all::<DailyMileage>().unwrap().len(), 1);
}
