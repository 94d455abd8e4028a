//! Oil change log.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{iso_date, Entity, RemoteRow};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OilChange {
    #[serde(default)]
    pub id: String,

    pub oil_brand: String,

    pub cost: f64,

    pub mileage_at_change: u32,

    /// Odometer value at which the next change is due.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_change_mileage: Option<u32>,

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

/// `oil_changes` table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OilChangeRow {
    pub oil_brand: String,
    pub cost: f64,
    pub mileage_at_change: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_change_mileage: Option<u32>,
    #[serde(with = "iso_date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
}

impl Entity for OilChange {
    const TABLE: &'static str = "oil_changes";
    type Row = OilChangeRow;

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

    fn to_row(&self) -> OilChangeRow {
        OilChangeRow {
            oil_brand: self.oil_brand.clone(),
            cost: self.cost,
            mileage_at_change: self.mileage_at_change,
            next_change_mileage: self.next_change_mileage,
            date: self.date,
        }
    }

    fn from_remote(row: RemoteRow<OilChangeRow>) -> Self {
        OilChange {
            id: row.id,
            oil_brand: row.fields.oil_brand,
            cost: row.fields.cost,
            mileage_at_change: row.fields.mileage_at_change,
            next_change_mileage: row.fields.next_change_mileage,
            date: row.fields.date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
