use convoy_core::model::{Checkpoint, Convoy, EntityId};
use geo::Coord;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Checkpoint,
    ChokePoint,
    CommsRelay,
    Convoy,
}

/// a point feature on the map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: EntityId,
    pub label: String,
    pub position: Coord<f64>,
    pub kind: MarkerKind,
}

impl Marker {
    pub fn checkpoint(checkpoint: &Checkpoint) -> Self {
        let kind = if checkpoint.is_choke_point {
            MarkerKind::ChokePoint
        } else {
            MarkerKind::Checkpoint
        };
        Self {
            id: checkpoint.id.clone(),
            label: checkpoint.name.clone(),
            position: checkpoint.coord(),
            kind,
        }
    }

    pub fn comms_relay(checkpoint: &Checkpoint) -> Self {
        Self {
            id: checkpoint.id.clone(),
            label: format!("{} (comms relay)", checkpoint.name),
            position: checkpoint.coord(),
            kind: MarkerKind::CommsRelay,
        }
    }

    pub fn convoy(convoy: &Convoy) -> Self {
        Self {
            id: convoy.id.clone(),
            label: format!("{} [{}]", convoy.name, convoy.status.as_str()),
            position: convoy.coord(),
            kind: MarkerKind::Convoy,
        }
    }
}
