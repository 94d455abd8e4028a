//! The six record kinds an operator tracks, and the contract that lets one
//! generic repository serve all of them.
//!
//! Each entity lives in two serialized shapes:
//!
//! - **Local JSON** — the entity struct itself, camelCase keys, exactly what
//!   the device cache stores and the app reads back.
//! - **Remote row** — a per-entity `*Row` struct with snake_case keys, the
//!   shape the remote backend speaks. The row struct *is* the field-mapping
//!   table; [`Entity::to_row`] and [`Entity::from_remote`] are the only two
//!   translation points and both are pure.
//!
//! Server-managed columns (`id`, `created_at`, `updated_at`) never appear in
//! the row structs. Outbound payloads therefore cannot leak them, and
//! inbound rows carry them in the [`RemoteRow`] envelope instead.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use time::{Date, OffsetDateTime};

mod fuel;
mod mileage;
mod motorcycle;
mod oil;
mod order;
mod sparepart;

pub use fuel::{FuelExpense, FuelExpenseRow};
pub use mileage::{DailyMileage, DailyMileageRow};
pub use motorcycle::{Motorcycle, MotorcycleRow};
pub use oil::{OilChange, OilChangeRow};
pub use order::{Order, OrderRow};
pub use sparepart::{Sparepart, SparepartRow};

// ---------------------------------------------------------------------------
// Entity contract
// ---------------------------------------------------------------------------

/// Per-type knowledge the generic repository needs: where the records live,
/// how they translate to the remote schema, and how they sort.
pub trait Entity:
    Clone + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Remote table name; doubles as the local cache bucket name.
    const TABLE: &'static str;

    /// Business fields in the remote backend's snake_case schema.
    type Row: Serialize + DeserializeOwned + Send + Sync;

    fn id(&self) -> &str;

    /// Replace the id. Used when a freshly created record is assigned a
    /// locally minted id.
    fn set_id(&mut self, id: String);

    /// Remote creation instant. `None` for records the remote backend has
    /// never seen.
    fn created_at(&self) -> Option<OffsetDateTime>;

    /// The date the record is *about* (order date, refuel date, ...), used
    /// to sort records that carry no `created_at`. `None` for kinds without
    /// a business date.
    fn business_date(&self) -> Option<Date>;

    /// Map the business fields into the remote schema.
    fn to_row(&self) -> Self::Row;

    /// Rebuild the entity from a remote row and its server-managed columns.
    fn from_remote(row: RemoteRow<Self::Row>) -> Self;
}

// ---------------------------------------------------------------------------
// RemoteRow
// ---------------------------------------------------------------------------

/// A row as the remote backend returns it: server-managed columns plus the
/// entity's business fields flattened alongside them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteRow<R> {
    pub id: String,

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

    #[serde(flatten)]
    pub fields: R,
}

// ---------------------------------------------------------------------------
// Date (de)serialization
// ---------------------------------------------------------------------------

/// `YYYY-MM-DD` for optional business dates, on both the camelCase and the
/// snake_case side. The remote backend's DATE columns and the app's date
/// pickers both speak this form.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::format_description::FormatItem;
    use time::macros::format_description;
    use time::Date;

    const FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => {
                let text = d.format(FORMAT).map_err(serde::ser::Error::custom)?;
                serializer.serialize_some(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => Date::parse(&text, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
