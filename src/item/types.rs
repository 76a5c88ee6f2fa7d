//! FridgeItem record and calendar-date validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Textual format both date fields must conform to: four-digit year,
/// two-digit month, two-digit day, dash-separated.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date field failed calendar-date parsing.
#[derive(Debug, Error)]
#[error("field `{field}` is not a valid YYYY-MM-DD date: {value:?}")]
pub struct DateError {
    /// Which of the two date fields was rejected.
    pub field: &'static str,
    /// The offending input, kept for logging.
    pub value: String,
}

/// Inventory record exchanged between caller and upstream store.
///
/// The upstream store is the system of record; this service receives,
/// validates, forwards and discards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FridgeItem {
    pub name: String,
    pub expiration: String,
    pub category: String,
    pub unit: String,
    pub purchased: String,
    pub location: String,
    pub quantity: i64,
    pub user_id: String,
}

impl FridgeItem {
    /// Validate both date fields and rewrite them to the canonical
    /// zero-padded form of the same calendar date.
    ///
    /// Rejecting here guarantees the upstream store never sees a record with
    /// a date it would have to reject itself.
    pub fn normalized(mut self) -> Result<Self, DateError> {
        self.expiration = normalize_date("expiration", &self.expiration)?;
        self.purchased = normalize_date("purchased", &self.purchased)?;
        Ok(self)
    }
}

fn normalize_date(field: &'static str, value: &str) -> Result<String, DateError> {
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DateError {
        field,
        value: value.to_string(),
    })?;
    Ok(date.format(DATE_FORMAT).to_string())
}
