//! End-to-end: a record created while the backend is unreachable stays
//! local-only; once the backend is reachable again, new records come back
//! confirmed, and both kinds coexist in one merged view.

use std::sync::Arc;

use fleetbook::cache::{LocalCache, MemoryBackend};
use fleetbook::identity::{is_remote_native, provenance, Provenance};
use fleetbook::{Order, RemoteStore, Repository};
use time::macros::date;

use super::mock::MockTransport;

#[tokio::test]
async fn offline_then_online_produces_mixed_provenance() {
    let cache = Arc::new(LocalCache::new(MemoryBackend::new()));

    // Phase 1: backend unreachable.
    let offline: Repository<Order, _> = Repository::new(
        Arc::clone(&cache),
        RemoteStore::new(Arc::new(MockTransport::unreachable("no route to host"))),
    );

    let first = offline
        .add(Order {
            order_type: "delivery".to_string(),
            customer: "Warung Sari".to_string(),
            amount: 50000.0,
            date: Some(date!(2024 - 03 - 01)),
            ..Default::default()
        })
        .await
        .unwrap();

    let all = offline.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!is_remote_native(&all[0].id));
    assert!(all[0].created_at.is_none());

    // Phase 2: backend reachable, same cache underneath.
    let transport = Arc::new(MockTransport::new());
    let online: Repository<Order, _> =
        Repository::new(Arc::clone(&cache), RemoteStore::new(transport.clone()));

    let second = online
        .add(Order {
            order_type: "ride".to_string(),
            customer: "Pak Budi".to_string(),
            amount: 15000.0,
            date: Some(date!(2024 - 03 - 02)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(is_remote_native(&second.id));
    assert!(second.created_at.is_some());

    // The backend now lists the row it accepted.
    let confirmed_row = serde_json::json!({
        "id": second.id,
        "created_at": "2024-03-02T09:00:00Z",
        "updated_at": "2024-03-02T09:00:00Z",
        "order_type": "ride",
        "customer": "Pak Budi",
        "amount": 15000.0,
        "date": "2024-03-02",
    });
    transport.on_list_all(move |_| Ok(vec![confirmed_row.clone()]));

    let all = online.get_all().await.unwrap();
    assert_eq!(all.len(), 2);

    // Confirmed record first (it has the newer key), local-only one after.
    assert_eq!(all[0].id, second.id);
    assert_eq!(provenance(&all[0].id), Provenance::RemoteConfirmed);
    assert!(all[0].created_at.is_some());
    assert_eq!(all[1].id, first.id);
    assert_eq!(provenance(&all[1].id), Provenance::LocalOnly);
    assert!(all[1].created_at.is_none());
}
