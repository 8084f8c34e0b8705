//! Transfer Model

use serde::{Deserialize, Serialize};

/// Airport/city transfer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    #[serde(default)]
    pub from_location: String,
    #[serde(default)]
    pub to_location: String,
    #[serde(default)]
    pub vehicle_type: String,
    pub price: i64,
    #[serde(default)]
    pub capacity: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Transfer {
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.from_location.to_lowercase().contains(&q)
            || self.to_location.to_lowercase().contains(&q)
            || self.vehicle_type.to_lowercase().contains(&q)
    }
}

/// Create transfer payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransferCreate {
    pub from_location: String,
    pub to_location: String,
    pub vehicle_type: String,
    pub price: i64,
    pub capacity: Option<i32>,
}

/// Update transfer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferUpdate {
    pub id: String,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub vehicle_type: Option<String>,
    pub price: Option<i64>,
    pub capacity: Option<i32>,
    pub is_active: Option<bool>,
}
