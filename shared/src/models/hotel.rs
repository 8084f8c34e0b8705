//! Hotel Model

use serde::{Deserialize, Serialize};

/// Hotel entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub stars: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Per-room-type price tiers (nested sub-collection)
    #[serde(default)]
    pub rates: Vec<RoomRate>,
}

fn default_true() -> bool {
    true
}

impl Hotel {
    /// Case-insensitive match against the list view's search box.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.city.to_lowercase().contains(&q)
            || self.country.to_lowercase().contains(&q)
    }

    /// Nightly price for a room type, if the hotel offers it.
    pub fn rate_for(&self, room_type: &str) -> Option<i64> {
        self.rates
            .iter()
            .find(|r| r.room_type.eq_ignore_ascii_case(room_type))
            .map(|r| r.price_per_night)
    }
}

/// One price tier of a hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRate {
    pub room_type: String,
    pub price_per_night: i64,
}

/// Create hotel payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HotelCreate {
    pub name: String,
    pub city: String,
    pub country: String,
    pub stars: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub rates: Vec<RoomRate>,
}

/// Update hotel payload (same endpoint as create; `id` marks it an update)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelUpdate {
    pub id: String,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub stars: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
    pub rates: Option<Vec<RoomRate>>,
}
