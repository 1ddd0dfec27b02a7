use std::time::Duration;

/// tunables for a [`super::MapViewModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewModelConfig {
    /// how long sync completion messages stay visible
    pub status_message_ttl: Duration,
}

impl Default for MapViewModelConfig {
    fn default() -> Self {
        Self {
            status_message_ttl: Duration::from_secs(3),
        }
    }
}
