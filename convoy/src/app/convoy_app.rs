use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use clap::{Parser, Subcommand};
use convoy_map::{LayerStore, MapViewModel, Overlay};
use convoy_sync::{HttpDashboardApi, SyncCache};

use super::{report, snapshot_file, watch, ConvoyAppError, DashboardConfig};

type DashboardViewModel = MapViewModel<HttpDashboardApi, LayerStore>;

/// command line operations dashboard for convoy route planning over a
/// checkpoint network
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ConvoyApp {
    /// TOML configuration file. any setting can also be given as a
    /// CONVOY_-prefixed environment variable, e.g. CONVOY_BASE_URL
    #[arg(short, long)]
    pub config: Option<String>,
    /// select the dashboard operation to run
    #[command(subcommand)]
    pub op: ConvoyOperation,
}

impl ConvoyApp {
    pub fn run(&self) -> Result<(), ConvoyAppError> {
        let config = DashboardConfig::load(self.config.as_deref())?;
        self.op.run(&config)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConvoyOperation {
    /// downloads the full checkpoint and planned route bundle
    Bootstrap,
    /// fetches the checkpoints changed since the last successful sync
    Sync,
    /// computes a risk-scored route between two checkpoints
    Route {
        /// origin checkpoint id
        origin: String,
        /// destination checkpoint id
        destination: String,
        /// overlays to switch on (comms_relay, active_convoys, intel_analytics).
        /// may be repeated
        #[arg(short, long, value_parser = parse_overlay)]
        overlay: Vec<Overlay>,
        /// writes the resulting map layers to a GeoJSON file
        #[arg(short, long)]
        geojson: Option<String>,
    },
    /// fetches the current fleet status
    Fleet,
    /// fetches active convoy positions
    Convoys,
    /// checks whether the server is reachable
    Health,
    /// probes server health and reconciles on a schedule, reporting as
    /// changes arrive
    Watch {
        /// how long to watch. provide in human-readable time values
        /// 30s, 2m, 1h...
        #[arg(short, long, value_parser = parse_duration, default_value = "1m")]
        duration: Duration,
        /// time between reconciles
        #[arg(short, long, value_parser = parse_duration, default_value = "30s")]
        reconcile_every: Duration,
    },
    /// prints the effective configuration as TOML
    PrintConfig,
}

impl ConvoyOperation {
    pub fn run(&self, config: &DashboardConfig) -> Result<(), ConvoyAppError> {
        if let ConvoyOperation::PrintConfig = self {
            return print_config(config);
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ConvoyAppError::RuntimeError(e.to_string()))?;
        runtime.block_on(self.run_dashboard(config))
    }

    /// operations whose results are worth keeping in the cache snapshot.
    fn updates_cache(&self) -> bool {
        matches!(
            self,
            ConvoyOperation::Bootstrap
                | ConvoyOperation::Sync
                | ConvoyOperation::Route { .. }
                | ConvoyOperation::Fleet
                | ConvoyOperation::Watch { .. }
        )
    }

    async fn run_dashboard(&self, config: &DashboardConfig) -> Result<(), ConvoyAppError> {
        let vm = build_view_model(config)?;
        let mut events = vm.cache().subscribe();
        let snapshot_path = config.snapshot_file.as_ref().map(PathBuf::from);
        if let Some(path) = &snapshot_path {
            if let Some(snapshot) = snapshot_file::read_snapshot(path)? {
                vm.cache().restore(snapshot);
            }
        }

        match self {
            ConvoyOperation::Bootstrap => {
                let _ = vm.load_offline_data().await;
                vm.apply_pending_events(&mut events);
                println!("{}", report::header(&vm.view()));
            }
            ConvoyOperation::Sync => {
                let _ = vm.sync_now().await;
                vm.apply_pending_events(&mut events);
                println!("{}", report::header(&vm.view()));
                println!("LAST SYNC: {}", vm.cache().cursor());
            }
            ConvoyOperation::Route {
                origin,
                destination,
                overlay,
                geojson,
            } => {
                if vm.load_offline_data().await.is_err() {
                    log::warn!(
                        "serving {} cached checkpoints",
                        vm.cache().checkpoint_count()
                    );
                }
                vm.apply_pending_events(&mut events);
                for o in overlay.iter() {
                    vm.set_overlay(*o, true).await;
                }
                if overlay.contains(&Overlay::IntelAnalytics) {
                    vm.cache().refresh_fleet().await;
                }
                let outcome = vm.generate_route(origin, destination).await;
                let view = vm.view();
                println!("{}", report::header(&view));
                println!("{}", report::route_outcome(&outcome, &view));
                if let Some(notice) = &view.convoy_notice {
                    println!("> {notice}");
                }
                if let Some(analytics) = &view.analytics {
                    println!("{}", report::analytics(analytics));
                }
                if let Some(geojson) = geojson {
                    write_geojson(&vm, Path::new(geojson))?;
                }
            }
            ConvoyOperation::Fleet => {
                let panel = vm.cache().refresh_fleet().await;
                println!("{}", report::fleet(&panel));
            }
            ConvoyOperation::Convoys => match vm.cache().refresh_convoys().await {
                Ok(convoys) => println!("{}", report::convoys(&convoys)),
                Err(e) => println!("> CONVOY FEED UNAVAILABLE: {e}"),
            },
            ConvoyOperation::Health => {
                let online = vm.cache().probe_health().await;
                println!("{}", if online { "ONLINE" } else { "OFFLINE MODE" });
            }
            ConvoyOperation::Watch {
                duration,
                reconcile_every,
            } => {
                vm.apply_pending_events(&mut events);
                let probe_interval = config.health_probe_interval()?;
                watch::run_watch(&vm, *duration, *reconcile_every, probe_interval).await;
            }
            ConvoyOperation::PrintConfig => print_config(config)?,
        }

        if let (Some(path), true) = (&snapshot_path, self.updates_cache()) {
            snapshot_file::write_snapshot(path, &vm.cache().snapshot())?;
        }
        Ok(())
    }
}

fn build_view_model(config: &DashboardConfig) -> Result<DashboardViewModel, ConvoyAppError> {
    let api = config
        .api_config()?
        .build()
        .map_err(ConvoyAppError::InvalidConfig)?;
    log::debug!("dashboard server at {}", api.base_url());
    let cache = Arc::new(SyncCache::new(api));
    Ok(MapViewModel::new(
        cache,
        LayerStore::new(),
        config.view_model_config()?,
    ))
}

fn write_geojson(vm: &DashboardViewModel, filepath: &Path) -> Result<(), ConvoyAppError> {
    let (contents, features) = vm.with_surface(|s| (s.to_geojson().to_string(), s.feature_count()));
    std::fs::write(filepath, contents).map_err(|e| ConvoyAppError::WriteError {
        filepath: filepath.to_string_lossy().to_string(),
        error: e.to_string(),
    })?;
    log::info!("wrote {features} map features to {}", filepath.display());
    Ok(())
}

fn print_config(config: &DashboardConfig) -> Result<(), ConvoyAppError> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| ConvoyAppError::InvalidConfig(format!("unable to serialize configuration: {e}")))?;
    println!("{toml}");
    Ok(())
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s).map_err(|e| format!("Invalid duration: {e}"))
}

fn parse_overlay(s: &str) -> Result<Overlay, String> {
    s.parse()
}
