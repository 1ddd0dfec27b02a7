use std::time::Duration;

use convoy_map::{MapSurface, MapViewModel};
use convoy_sync::{health::run_health_probe, DashboardApi, ReconcileOutcome};
use tokio::time::MissedTickBehavior;

use super::report;

/// keeps the dashboard live for `duration`: the health probe, periodic
/// reconciles and the sync event follower all run on the current task.
pub async fn run_watch<A: DashboardApi, S: MapSurface>(
    vm: &MapViewModel<A, S>,
    duration: Duration,
    reconcile_every: Duration,
    probe_interval: Duration,
) {
    let events = vm.cache().subscribe();
    if let Err(e) = vm.load_offline_data().await {
        log::warn!("starting watch on cached data: {e}");
    }
    log::info!(
        "watching for {}, reconciling every {}",
        humantime::format_duration(duration),
        humantime::format_duration(reconcile_every)
    );
    let watch = async {
        tokio::join!(
            run_health_probe(vm.cache(), probe_interval),
            vm.follow(events),
            reconcile_periodically(vm, reconcile_every),
        )
    };
    if tokio::time::timeout(duration, watch).await.is_err() {
        log::info!("watch finished");
    }
    let view = vm.view();
    println!("{}", report::header(&view));
    println!("LAST SYNC: {}", vm.cache().cursor());
}

async fn reconcile_periodically<A: DashboardApi, S: MapSurface>(
    vm: &MapViewModel<A, S>,
    period: Duration,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        match vm.sync_now().await {
            Ok(ReconcileOutcome::Applied { summary, cursor }) => {
                log::info!("reconciled {} checkpoints, cursor at {cursor}", summary.changed)
            }
            Ok(ReconcileOutcome::Coalesced) => log::debug!("reconcile already in flight"),
            Err(e) => log::warn!("reconcile failed, retrying in {period:?}: {e}"),
        }
        vm.refresh_convoys().await;
    }
}
