use std::sync::RwLock;

use chrono::Utc;
use convoy_core::{
    model::{Checkpoint, Convoy, EntityId, PlannedRoute, SyncCursor},
    util::lock_ops,
    wire::SyncRequest,
    DashboardError,
};
use tokio::sync::{broadcast, Mutex};

use super::{
    CacheSnapshot, CheckpointStore, FleetPanel, FleetState, ReconcileOutcome, SyncEvent,
};
use crate::{api::DashboardApi, health::Connectivity};

const EVENT_CAPACITY: usize = 64;

/// checkpoints, planned routes and the sync cursor. these are only written by
/// `bootstrap()`, `reconcile()` and `restore()`; everything else reads
/// snapshots.
#[derive(Debug, Default)]
struct ReferenceData {
    checkpoints: CheckpointStore,
    planned_routes: Vec<PlannedRoute>,
    cursor: SyncCursor,
}

/// local mirror of the reference data served by the navigation and
/// operations services.
///
/// reference data (checkpoints + cursor), fleet, convoys and connectivity
/// live in separate slices so that `refresh_fleet()` and `probe_health()`
/// can run while a `reconcile()` is suspended on the network.
pub struct SyncCache<A> {
    api: A,
    reference: RwLock<ReferenceData>,
    fleet: RwLock<FleetState>,
    convoys: RwLock<Vec<Convoy>>,
    connectivity: Connectivity,
    /// held by the one reconcile allowed in flight
    reconcile_guard: Mutex<()>,
    /// serializes bootstrap and reconcile exchanges against each other
    exchange_guard: Mutex<()>,
    events: broadcast::Sender<SyncEvent>,
}

impl<A: DashboardApi> SyncCache<A> {
    pub fn new(api: A) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            api,
            reference: RwLock::new(ReferenceData::default()),
            fleet: RwLock::new(FleetState::default()),
            convoys: RwLock::new(vec![]),
            connectivity: Connectivity::default(),
            reconcile_guard: Mutex::new(()),
            exchange_guard: Mutex::new(()),
            events,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.events.subscribe()
    }

    /// replaces the checkpoint collection with the offline-data bundle. the
    /// cursor is left alone. on failure the previously cached data remains
    /// available and the connectivity indicator is lowered.
    ///
    /// waits behind a reconcile in flight rather than interleaving with it.
    pub async fn bootstrap(&self) -> Result<(), DashboardError> {
        let _exchange = self.exchange_guard.lock().await;
        let snapshot = match self.api.offline_data().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("bootstrap failed, serving cached data: {e}");
                self.record_failure(&e);
                return Err(e);
            }
        };
        let route_count = snapshot.planned_routes.len();
        let (changed, total) = {
            let mut reference = lock_ops::write(&self.reference);
            let changed = reference.checkpoints.replace_all(snapshot.checkpoints);
            reference.planned_routes = snapshot.planned_routes;
            (changed, reference.checkpoints.len())
        };
        log::info!("bootstrap complete. {total} checkpoints, {route_count} routes cached");
        self.record_success();
        if changed {
            self.emit(SyncEvent::CheckpointsChanged { changed: total, total });
        }
        Ok(())
    }

    /// requests every checkpoint changed since the cursor and merges it by
    /// id. the cursor only advances once the whole exchange has succeeded,
    /// so a failed call is retried over the same window next time.
    ///
    /// at most one reconcile runs at a time: a call made while another is
    /// in flight returns [`ReconcileOutcome::Coalesced`] without a request.
    /// a call made during a bootstrap waits for it and then runs.
    pub async fn reconcile(&self) -> Result<ReconcileOutcome, DashboardError> {
        let Ok(_in_flight) = self.reconcile_guard.try_lock() else {
            log::debug!("reconcile already in flight, coalescing trigger");
            return Ok(ReconcileOutcome::Coalesced);
        };
        let _exchange = self.exchange_guard.lock().await;
        let request = SyncRequest::from(self.cursor());
        log::debug!("reconciling from cursor {}", request.last_sync_timestamp);
        let delta = match self.api.sync(&request).await {
            Ok(delta) => delta,
            Err(e) => {
                log::warn!("reconcile failed, cursor left at {}: {e}", self.cursor());
                self.record_failure(&e);
                return Err(e);
            }
        };
        let (summary, cursor, total) = {
            let mut reference = lock_ops::write(&self.reference);
            let summary = reference.checkpoints.apply_delta(delta.updated_checkpoints);
            reference.cursor = reference.cursor.advance(delta.server_time);
            (summary, reference.cursor, reference.checkpoints.len())
        };
        log::info!(
            "reconcile complete: {} received, {} changed, {} stale, {} rejected; cursor now {cursor}",
            summary.received(),
            summary.changed,
            summary.stale,
            summary.rejected
        );
        self.record_success();
        if summary.changed > 0 {
            self.emit(SyncEvent::CheckpointsChanged {
                changed: summary.changed,
                total,
            });
        }
        Ok(ReconcileOutcome::Applied { summary, cursor })
    }

    /// fetches the fleet in full. failures never clear what the panel shows:
    /// the last good fleet stays visible as stale, or the panel reports that
    /// no data has been received yet.
    pub async fn refresh_fleet(&self) -> FleetPanel {
        match self.api.fleet_status().await {
            Ok(vehicles) => {
                let count = vehicles.len();
                lock_ops::write(&self.fleet).loaded(vehicles, Utc::now());
                self.record_success();
                self.emit(SyncEvent::FleetRefreshed { vehicles: count });
            }
            Err(e) => {
                log::warn!("fleet refresh failed: {e}");
                lock_ops::write(&self.fleet).failed(e.clone());
                self.record_failure(&e);
            }
        }
        self.fleet_panel()
    }

    /// fetches active convoys, replacing the previous list. positions are
    /// time-sensitive, so callers fetch on every overlay activation. convoys
    /// reporting an impossible position are left out.
    pub async fn refresh_convoys(&self) -> Result<Vec<Convoy>, DashboardError> {
        match self.api.active_convoys().await {
            Ok(convoys) => {
                let convoys = convoys
                    .into_iter()
                    .filter(|convoy| match convoy.validate() {
                        Ok(()) => true,
                        Err(e) => {
                            log::warn!("skipping convoy record: {e}");
                            false
                        }
                    })
                    .collect::<Vec<_>>();
                *lock_ops::write(&self.convoys) = convoys.clone();
                self.record_success();
                Ok(convoys)
            }
            Err(e) => {
                log::warn!("active convoy fetch failed: {e}");
                self.record_failure(&e);
                Err(e)
            }
        }
    }

    /// lightweight liveness check; sets and returns the online flag.
    pub async fn probe_health(&self) -> bool {
        let online = match self.api.health_check().await {
            Ok(status) if status.is_ok() => true,
            Ok(status) => {
                log::warn!("health check reported {status:?}");
                false
            }
            Err(e) => {
                log::warn!("health check failed: {e}");
                false
            }
        };
        if self.connectivity.set_online(online) {
            log::info!("connectivity changed, online={online}");
            self.emit(SyncEvent::ConnectivityChanged { online });
        }
        online
    }

    pub fn checkpoints(&self) -> Vec<Checkpoint> {
        lock_ops::read(&self.reference).checkpoints.to_vec()
    }

    pub fn checkpoint(&self, id: &EntityId) -> Option<Checkpoint> {
        lock_ops::read(&self.reference).checkpoints.get(id).cloned()
    }

    pub fn checkpoint_count(&self) -> usize {
        lock_ops::read(&self.reference).checkpoints.len()
    }

    pub fn planned_routes(&self) -> Vec<PlannedRoute> {
        lock_ops::read(&self.reference).planned_routes.clone()
    }

    pub fn cursor(&self) -> SyncCursor {
        lock_ops::read(&self.reference).cursor
    }

    pub fn fleet_panel(&self) -> FleetPanel {
        lock_ops::read(&self.fleet).panel()
    }

    pub fn convoys(&self) -> Vec<Convoy> {
        lock_ops::read(&self.convoys).clone()
    }

    pub fn is_online(&self) -> bool {
        self.connectivity.is_online()
    }

    /// true while offline, or while the last cache operation failed and no
    /// later one has succeeded. cached data is still served in this state.
    pub fn is_degraded(&self) -> bool {
        self.connectivity.is_degraded()
    }

    pub fn last_failure(&self) -> Option<DashboardError> {
        self.connectivity.last_failure()
    }

    pub fn snapshot(&self) -> CacheSnapshot {
        let reference = lock_ops::read(&self.reference);
        CacheSnapshot {
            cursor: reference.cursor,
            checkpoints: reference.checkpoints.to_vec(),
            planned_routes: reference.planned_routes.clone(),
            fleet: lock_ops::read(&self.fleet).last_good().cloned(),
        }
    }

    /// loads a previously saved snapshot, replacing reference data, cursor
    /// and last good fleet.
    pub fn restore(&self, snapshot: CacheSnapshot) {
        let total = {
            let mut reference = lock_ops::write(&self.reference);
            reference.checkpoints = CheckpointStore::new(snapshot.checkpoints);
            reference.planned_routes = snapshot.planned_routes;
            reference.cursor = snapshot.cursor;
            reference.checkpoints.len()
        };
        lock_ops::write(&self.fleet).restore(snapshot.fleet);
        log::info!("restored {total} checkpoints from snapshot, cursor {}", snapshot.cursor);
        self.emit(SyncEvent::CheckpointsChanged { changed: total, total });
    }

    fn record_success(&self) {
        if self.connectivity.record_success() {
            self.emit(SyncEvent::ConnectivityChanged { online: true });
        }
    }

    fn record_failure(&self, error: &DashboardError) {
        if self.connectivity.record_failure(error) {
            self.emit(SyncEvent::ConnectivityChanged { online: false });
        }
    }

    fn emit(&self, event: SyncEvent) {
        if self.events.send(event).is_err() {
            log::trace!("no sync event subscribers");
        }
    }
}
