//! Customer and city entities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Customer record as served by the backend. Created and mutated
/// server-side; this client only reads and displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub active: bool,
    pub phone_number: String,
    pub city_name: String,
    pub registration_date: NaiveDate,
    pub verified: bool,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Reference data for the registration city selector. Fetched once per
/// form mount, never written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub city_id: i64,
    pub name: String,
}
