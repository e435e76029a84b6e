// src/models/dealership.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dealership {
    pub id: i64,                   // Stable dealership ID
    #[serde(default)]
    pub full_name: String,         // Display name
    #[serde(default)]
    pub state: String,             // State code or name, e.g. "CA"
    #[serde(flatten)]
    pub extra: Map<String, Value>, // city, address, zip, lat, long, short_name...
}

impl Dealership {
    /// Case-insensitive state match.
    pub fn in_state(&self, state: &str) -> bool {
        self.state == state || self.state.to_lowercase() == state.to_lowercase()
    }
}
