//! Group Program Model
//!
//! A group program is a scheduled departure with selectable transport.
//! The backend has no native reservation type for it yet; the checkout flow
//! books it through the FlightPackage wire type (see `rahal-client`).

use serde::{Deserialize, Serialize};

/// Group program entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupProgram {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub destination: String,
    pub price: i64,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Transport choices with per-option price deltas (nested sub-collection)
    #[serde(default)]
    pub transport_options: Vec<TransportOption>,
}

fn default_true() -> bool {
    true
}

impl GroupProgram {
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.destination.to_lowercase().contains(&q)
    }

    /// Final price for a transport choice (base price + option delta).
    pub fn price_with_transport(&self, option_name: &str) -> i64 {
        let delta = self
            .transport_options
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(option_name))
            .map(|o| o.price_delta)
            .unwrap_or(0);
        self.price + delta
    }
}

/// One transport choice of a group program
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    pub name: String,
    #[serde(default)]
    pub price_delta: i64,
}

/// Create group program payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupProgramCreate {
    pub title: String,
    pub destination: String,
    pub price: i64,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    #[serde(default)]
    pub transport_options: Vec<TransportOption>,
}

/// Update group program payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupProgramUpdate {
    pub id: String,
    pub title: Option<String>,
    pub destination: Option<String>,
    pub price: Option<i64>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub is_active: Option<bool>,
    pub transport_options: Option<Vec<TransportOption>>,
}
