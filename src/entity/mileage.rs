//! Daily mileage entries. One per riding day; the app usually shows only
//! the most recent handful.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{iso_date, Entity, RemoteRow};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMileage {
    #[serde(default)]
    pub id: String,

    /// Kilometers ridden that day.
    pub mileage: u32,

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

/// `daily_mileages` table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMileageRow {
    pub mileage: u32,
    #[serde(with = "iso_date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entity for DailyMileage {
    const TABLE: &'static str = "daily_mileages";
    type Row = DailyMileageRow;

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

    fn to_row(&self) -> DailyMileageRow {
        DailyMileageRow {
            mileage: self.mileage,
            date: self.date,
            note: self.note.clone(),
        }
    }

    fn from_remote(row: RemoteRow<DailyMileageRow>) -> Self {
        DailyMileage {
            id: row.id,
            mileage: row.fields.mileage,
            date: row.fields.date,
            note: row.fields.note,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
