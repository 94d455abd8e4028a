//! The motorcycles themselves. The only record kind without a business
//! date: offline-created bikes sort after anything with a timestamp.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{Entity, RemoteRow};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motorcycle {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

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

/// `motorcycles` table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorcycleRow {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl Entity for Motorcycle {
    const TABLE: &'static str = "motorcycles";
    type Row = MotorcycleRow;

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
        None
    }

    fn to_row(&self) -> MotorcycleRow {
        MotorcycleRow {
            name: self.name.clone(),
            brand: self.brand.clone(),
            plate_number: self.plate_number.clone(),
            year: self.year,
        }
    }

    fn from_remote(row: RemoteRow<MotorcycleRow>) -> Self {
        Motorcycle {
            id: row.id,
            name: row.fields.name,
            brand: row.fields.brand,
            plate_number: row.fields.plate_number,
            year: row.fields.year,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
