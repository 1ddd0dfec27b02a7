use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ConvoyStatus {
    EnRoute,
    Idle,
    Halted,
    Other(String),
}

impl ConvoyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ConvoyStatus::EnRoute => "en_route",
            ConvoyStatus::Idle => "idle",
            ConvoyStatus::Halted => "halted",
            ConvoyStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for ConvoyStatus {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "en_route" => ConvoyStatus::EnRoute,
            "idle" => ConvoyStatus::Idle,
            "halted" => ConvoyStatus::Halted,
            _ => ConvoyStatus::Other(value),
        }
    }
}

impl From<ConvoyStatus> for String {
    fn from(value: ConvoyStatus) -> Self {
        value.as_str().to_string()
    }
}

impl Display for ConvoyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
