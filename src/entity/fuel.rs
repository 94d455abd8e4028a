//! Fuel purchases.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{iso_date, Entity, RemoteRow};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelExpense {
    #[serde(default)]
    pub id: String,

    /// Total paid, in the operator's currency.
    pub amount: f64,

    pub liters: f64,

    pub price_per_liter: f64,

    /// Odometer reading at the pump, when the operator bothered to note it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer: Option<u32>,

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

/// `fuel_expenses` table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelExpenseRow {
    pub amount: f64,
    pub liters: f64,
    pub price_per_liter: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer: Option<u32>,
    #[serde(with = "iso_date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
}

impl Entity for FuelExpense {
    const TABLE: &'static str = "fuel_expenses";
    type Row = FuelExpenseRow;

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

    fn to_row(&self) -> FuelExpenseRow {
        FuelExpenseRow {
            amount: self.amount,
            liters: self.liters,
            price_per_liter: self.price_per_liter,
            odometer: self.odometer,
            date: self.date,
        }
    }

    fn from_remote(row: RemoteRow<FuelExpenseRow>) -> Self {
        FuelExpense {
            id: row.id,
            amount: row.fields.amount,
            liters: row.fields.liters,
            price_per_liter: row.fields.price_per_liter,
            odometer: row.fields.odometer,
            date: row.fields.date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
