//! Flight Package Model

use serde::{Deserialize, Serialize};

/// Flight + stay package entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPackage {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub airline: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub seats_total: i32,
    #[serde(default)]
    pub seats_taken: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl FlightPackage {
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q)
            || self.origin.to_lowercase().contains(&q)
            || self.destination.to_lowercase().contains(&q)
    }
}

/// Create flight package payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FlightPackageCreate {
    pub title: String,
    pub origin: String,
    pub destination: String,
    pub airline: Option<String>,
    pub price: i64,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub seats_total: Option<i32>,
}

/// Update flight package payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPackageUpdate {
    pub id: String,
    pub title: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub airline: Option<String>,
    pub price: Option<i64>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub seats_total: Option<i32>,
    pub is_active: Option<bool>,
}
