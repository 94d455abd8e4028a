//! Spare part purchases and installations.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{iso_date, Entity, RemoteRow};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sparepart {
    #[serde(default)]
    pub id: String,

    pub name: String,

    pub price_per_item: f64,

    pub quantity: u32,

    /// Odometer reading when the part went on the bike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_installed: Option<u32>,

    #[serde(with = "iso_date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,

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

/// `spareparts` table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparepartRow {
    pub name: String,
    pub price_per_item: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_installed: Option<u32>,
    #[serde(with = "iso_date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
}

impl Entity for Sparepart {
    const TABLE: &'static str = "spareparts";
    type Row = SparepartRow;

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

    fn to_row(&self) -> SparepartRow {
        SparepartRow {
            name: self.name.clone(),
            price_per_item: self.price_per_item,
            quantity: self.quantity,
            mileage_installed: self.mileage_installed,
            date: self.date,
        }
    }

    fn from_remote(row: RemoteRow<SparepartRow>) -> Self {
        Sparepart {
            id: row.id,
            name: row.fields.name,
            price_per_item: row.fields.price_per_item,
            quantity: row.fields.quantity,
            mileage_installed: row.fields.mileage_installed,
            date: row.fields.date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
