/// notifications pushed to subscribers of a [`super::SyncCache`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// the checkpoint collection changed; selection lists and the checkpoint
    /// layer need rebuilding
    CheckpointsChanged { changed: usize, total: usize },
    /// the online flag flipped
    ConnectivityChanged { online: bool },
    FleetRefreshed { vehicles: usize },
}
