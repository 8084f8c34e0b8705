//! Group Tour Model

use serde::{Deserialize, Serialize};

/// Group tour entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub destination: String,
    /// Hotel the group stays at (no referential integrity client-side)
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub room_types: Vec<String>,
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
    /// Day-by-day program (nested sub-collection)
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

fn default_true() -> bool {
    true
}

impl Group {
    pub fn seats_left(&self) -> i32 {
        (self.seats_total - self.seats_taken).max(0)
    }

    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.destination.to_lowercase().contains(&q)
    }
}

/// One day of a group itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create group payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupCreate {
    pub name: String,
    pub destination: String,
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub room_types: Vec<String>,
    pub price: i64,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub seats_total: Option<i32>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

/// Update group payload (`POST /groups/update`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdate {
    pub id: String,
    pub name: Option<String>,
    pub destination: Option<String>,
    pub hotel_id: Option<String>,
    pub room_types: Option<Vec<String>>,
    pub price: Option<i64>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub seats_total: Option<i32>,
    pub is_active: Option<bool>,
    pub itinerary: Option<Vec<ItineraryDay>>,
}
