//! Shared mock transport for repository tests.
//!
//! Records every call and lets each test inject per-operation responses.
//! Defaults behave like a healthy, empty backend: lists are empty, writes
//! succeed, and inserts echo the row back with a server-assigned UUID and
//! timestamps.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use fleetbook::{RemoteTransport, TransportError};

// ============================================================================
// Call log
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListAll { table: String },
    Insert { table: String, row: Value },
    Update { table: String, id: String, row: Value },
    Delete { table: String, id: String },
    DeleteAll { table: String },
}

impl Call {
    pub fn table(&self) -> &str {
        match self {
            Call::ListAll { table }
            | Call::Insert { table, .. }
            | Call::Update { table, .. }
            | Call::Delete { table, .. }
            | Call::DeleteAll { table } => table,
        }
    }
}

// ============================================================================
// Mock transport
// ============================================================================

type ListResponse = dyn Fn(&str) -> Result<Vec<Value>, TransportError> + Send + Sync;
type InsertResponse = dyn Fn(&str, &Value) -> Result<Value, TransportError> + Send + Sync;
type UpdateResponse = dyn Fn(&str, &str, &Value) -> Result<(), TransportError> + Send + Sync;
type DeleteResponse = dyn Fn(&str, &str) -> Result<(), TransportError> + Send + Sync;
type DeleteAllResponse = dyn Fn(&str) -> Result<(), TransportError> + Send + Sync;

#[allow(clippy::type_complexity)]
struct MockTransportInner {
    calls: Vec<Call>,
    list_response: Option<Box<ListResponse>>,
    insert_response: Option<Box<InsertResponse>>,
    update_response: Option<Box<UpdateResponse>>,
    delete_response: Option<Box<DeleteResponse>>,
    delete_all_response: Option<Box<DeleteAllResponse>>,
}

pub struct MockTransport {
    inner: Mutex<MockTransportInner>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MockTransportInner {
                calls: Vec::new(),
                list_response: None,
                insert_response: None,
                update_response: None,
                delete_response: None,
                delete_all_response: None,
            }),
        }
    }

    /// A transport where every operation fails with `message`. Simulates an
    /// unreachable backend (as opposed to an unconfigured one).
    pub fn unreachable(message: &str) -> Self {
        let transport = Self::new();
        {
            let mut inner = transport.inner.lock();
            let msg = message.to_string();
            inner.list_response = {
                let msg = msg.clone();
                Some(Box::new(move |_| Err(TransportError::new(msg.clone()))))
            };
            inner.insert_response = {
                let msg = msg.clone();
                Some(Box::new(move |_, _| Err(TransportError::new(msg.clone()))))
            };
            inner.update_response = {
                let msg = msg.clone();
                Some(Box::new(move |_, _, _| Err(TransportError::new(msg.clone()))))
            };
            inner.delete_response = {
                let msg = msg.clone();
                Some(Box::new(move |_, _| Err(TransportError::new(msg.clone()))))
            };
            inner.delete_all_response =
                Some(Box::new(move |_| Err(TransportError::new(msg.clone()))));
        }
        transport
    }

    pub fn on_list_all(
        &self,
        f: impl Fn(&str) -> Result<Vec<Value>, TransportError> + Send + Sync + 'static,
    ) {
        self.inner.lock().list_response = Some(Box::new(f));
    }

    pub fn on_insert(
        &self,
        f: impl Fn(&str, &Value) -> Result<Value, TransportError> + Send + Sync + 'static,
    ) {
        self.inner.lock().insert_response = Some(Box::new(f));
    }

    pub fn on_update(
        &self,
        f: impl Fn(&str, &str, &Value) -> Result<(), TransportError> + Send + Sync + 'static,
    ) {
        self.inner.lock().update_response = Some(Box::new(f));
    }

    pub fn on_delete(
        &self,
        f: impl Fn(&str, &str) -> Result<(), TransportError> + Send + Sync + 'static,
    ) {
        self.inner.lock().delete_response = Some(Box::new(f));
    }

    pub fn on_delete_all(
        &self,
        f: impl Fn(&str) -> Result<(), TransportError> + Send + Sync + 'static,
    ) {
        self.inner.lock().delete_all_response = Some(Box::new(f));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }
}

/// What a healthy backend does to an inserted row: assign a UUID primary
/// key and creation timestamps, echo everything back.
pub fn confirm_row(row: &Value) -> Value {
    let mut obj = row.as_object().cloned().unwrap_or_default();
    let now = OffsetDateTime::now_utc().format(&Rfc3339).unwrap();
    obj.insert(
        "id".to_string(),
        Value::String(uuid::Uuid::new_v4().to_string()),
    );
    obj.insert("created_at".to_string(), Value::String(now.clone()));
    obj.insert("updated_at".to_string(), Value::String(now));
    Value::Object(obj)
}

#[async_trait]
impl RemoteTransport for MockTransport {
    async fn list_all(&self, table: &str) -> Result<Vec<Value>, TransportError> {
        let mut inner = self.inner.lock();
        inner.calls.push(Call::ListAll {
            table: table.to_string(),
        });
        match inner.list_response {
            Some(ref f) => f(table),
            None => Ok(Vec::new()),
        }
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, TransportError> {
        let mut inner = self.inner.lock();
        inner.calls.push(Call::Insert {
            table: table.to_string(),
            row: row.clone(),
        });
        match inner.insert_response {
            Some(ref f) => f(table, &row),
            None => Ok(confirm_row(&row)),
        }
    }

    async fn update(&self, table: &str, id: &str, row: Value) -> Result<(), TransportError> {
        let mut inner = self.inner.lock();
        inner.calls.push(Call::Update {
            table: table.to_string(),
            id: id.to_string(),
            row: row.clone(),
        });
        match inner.update_response {
            Some(ref f) => f(table, id, &row),
            None => Ok(()),
        }
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), TransportError> {
        let mut inner = self.inner.lock();
        inner.calls.push(Call::Delete {
            table: table.to_string(),
            id: id.to_string(),
        });
        match inner.delete_response {
            Some(ref f) => f(table, id),
            None => Ok(()),
        }
    }

    async fn delete_all(&self, table: &str) -> Result<(), TransportError> {
        let mut inner = self.inner.lock();
        inner.calls.push(Call::DeleteAll {
            table: table.to_string(),
        });
        match inner.delete_all_response {
            Some(ref f) => f(table),
            None => Ok(()),
        }
    }
}
