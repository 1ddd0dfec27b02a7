use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::{api::DashboardApi, cache::SyncCache};

/// probes server liveness on a fixed period, forever. the probe shares no
/// lock with `reconcile()` so it neither blocks nor is blocked by a sync in
/// flight. a probe that outlives its period delays the next tick instead of
/// bursting.
pub async fn run_health_probe<A: DashboardApi>(cache: &SyncCache<A>, period: Duration) {
    log::info!("starting health probe, interval: {period:?}");
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        let online = cache.probe_health().await;
        log::trace!("health probe complete, online={online}");
    }
}
