//! Customer orders — the revenue side of the ledger.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{iso_date, Entity, RemoteRow};

/// A paid job: a delivery run or a passenger ride.
///
/// Serialized with camelCase keys for the device cache. `created_at` /
/// `updated_at` are only ever assigned by the remote backend; a record
/// created offline carries neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: String,

    /// Free-form kind label, e.g. `"delivery"` or `"ride"`.
    pub order_type: String,

    pub customer: String,

    pub amount: f64,

    #[serde(with = "iso_date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

/// `orders` table schema on the remote backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub order_type: String,
    pub customer: String,
    pub amount: f64,
    #[serde(with = "iso_date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entity for Order {
    const TABLE: &'static str = "orders";
    type Row = OrderRow;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> Option<OffsetDateTime> {
        self.created_at
    }

    fn business_date(&self) -> Option<Date> {
        self.date
    }

    fn to_row(&self) -> OrderRow {
        OrderRow {
            order_type: self.order_type.clone(),
            customer: self.customer.clone(),
            amount: self.amount,
            date: self.date,
            note: self.note.clone(),
        }
    }

    fn from_remote(row: RemoteRow<OrderRow>) -> Self {
        Order {
            id: row.id,
            order_type: row.fields.order_type,
            customer: row.fields.customer,
            amount: row.fields.amount,
            date: row.fields.date,
            note: row.fields.note,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
