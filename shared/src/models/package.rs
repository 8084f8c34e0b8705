//! Package Model

use serde::{Deserialize, Serialize};

/// Tour/umrah package entity (brochure item, not directly bookable)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub duration_days: i32,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Package {
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Create package payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PackageCreate {
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub duration_days: Option<i32>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    pub image: Option<String>,
}

/// Update package payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageUpdate {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub duration_days: Option<i32>,
    pub inclusions: Option<Vec<String>>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
}
