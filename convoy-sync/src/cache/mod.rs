mod cache_snapshot;
mod checkpoint_store;
mod fleet_panel;
mod reconcile_outcome;
mod sync_cache;
mod sync_event;

pub use cache_snapshot::CacheSnapshot;
pub use checkpoint_store::{CheckpointStore, DeltaSummary};
pub use fleet_panel::{FleetPanel, FleetSnapshot, FleetState};
pub use reconcile_outcome::ReconcileOutcome;
pub use sync_cache::SyncCache;
pub use sync_event::SyncEvent;
