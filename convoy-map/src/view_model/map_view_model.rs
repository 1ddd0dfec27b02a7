use std::sync::{Arc, Mutex};

use convoy_core::{
    model::{Checkpoint, EntityId, Route, RouteSegment},
    util::{geo_ops, lock_ops},
    DashboardError, ValidationError,
};
use convoy_sync::{DashboardApi, ReconcileOutcome, SyncCache, SyncEvent};
use geo::LineString;
use itertools::Itertools;
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};

use super::{MapView, MapViewModelConfig};
use crate::{
    layer::{redraw_markers, LayerGroup, MapSurface, Marker, RouteLine},
    overlay::{Overlay, OverlayState},
    panel::{
        retain_selection, AnalyticsPanel, CheckpointDetail, CheckpointOption, RoutePanel,
        StatusMessage,
    },
    session::{RouteOutcome, RouteTicket, SessionPhase},
};

#[derive(Debug, Clone)]
struct DisplayedRoute {
    origin: EntityId,
    destination: EntityId,
    route: Route,
    panel: RoutePanel,
}

impl DisplayedRoute {
    fn touches(&self, id: &EntityId) -> bool {
        &self.origin == id
            || &self.destination == id
            || self
                .route
                .segments
                .iter()
                .any(|s| &s.from == id || &s.to == id)
    }
}

#[derive(Debug, Default)]
struct ViewState {
    phase: SessionPhase,
    /// bumped by every selection and by reset. a route response is applied
    /// only if it belongs to the current session.
    session: u64,
    origin: Option<EntityId>,
    destination: Option<EntityId>,
    options: Vec<CheckpointOption>,
    displayed: Option<DisplayedRoute>,
    notice: Option<String>,
    overlays: OverlayState,
    /// bumped on each convoy overlay flip so a late fetch for an earlier
    /// activation is dropped
    convoy_generation: u64,
    convoy_notice: Option<String>,
    status: Option<StatusMessage>,
    detail: Option<EntityId>,
}

/// turns cache contents, selections and overlay flags into map layers and
/// panel content, and runs route sessions against the route collaborator.
///
/// state and surface sit behind their own locks, always taken in that
/// order and never held across an await. collaborator calls happen between
/// a synchronous begin step and a synchronous completion step, which is
/// where stale responses are detected.
pub struct MapViewModel<A, S> {
    cache: Arc<SyncCache<A>>,
    surface: Mutex<S>,
    state: Mutex<ViewState>,
    config: MapViewModelConfig,
}

impl<A: DashboardApi, S: MapSurface> MapViewModel<A, S> {
    pub fn new(cache: Arc<SyncCache<A>>, surface: S, config: MapViewModelConfig) -> Self {
        Self {
            cache,
            surface: Mutex::new(surface),
            state: Mutex::new(ViewState::default()),
            config,
        }
    }

    pub fn cache(&self) -> &SyncCache<A> {
        &self.cache
    }

    /// read access to the map surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let surface = lock_ops::lock(&self.surface);
        f(&surface)
    }

    pub fn select_origin(&self, id: &str) {
        lock_ops::lock(&self.state).origin = non_empty(id);
    }

    pub fn select_destination(&self, id: &str) {
        lock_ops::lock(&self.state).destination = non_empty(id);
    }

    /// requests a route between two checkpoint ids and displays it.
    ///
    /// # Arguments
    ///
    /// * `origin` - origin checkpoint id, as selected
    /// * `destination` - destination checkpoint id, as selected
    ///
    /// # Returns
    ///
    /// * what happened to the request. validation failures never reach the
    ///   collaborator, and a response that arrives after a newer selection is
    ///   dropped
    pub async fn generate_route(&self, origin: &str, destination: &str) -> RouteOutcome {
        let ticket = match self.begin_route(origin, destination) {
            Ok(ticket) => ticket,
            Err(e) => return RouteOutcome::Rejected(e),
        };
        let result = self.cache.api().smart_route(&ticket.request()).await;
        self.complete_route(ticket, result)
    }

    /// [`Self::generate_route`] for the current selections.
    pub async fn generate_selected_route(&self) -> RouteOutcome {
        let (origin, destination) = {
            let state = lock_ops::lock(&self.state);
            (
                state.origin.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                state
                    .destination
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            )
        };
        self.generate_route(&origin, &destination).await
    }

    /// starts a route session: records the selection, supersedes any request
    /// in flight and validates. a valid selection clears the segment layer
    /// and moves to `Requesting`; an invalid one returns to `Idle` with a
    /// message and leaves any displayed route in place.
    pub fn begin_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteTicket, ValidationError> {
        let mut state = lock_ops::lock(&self.state);
        state.session += 1;
        state.origin = non_empty(origin);
        state.destination = non_empty(destination);
        state.phase = SessionPhase::Validating;
        match RouteTicket::new(state.session, origin, destination) {
            Ok(ticket) => {
                log::info!(
                    "requesting route {} -> {} (session {})",
                    ticket.origin,
                    ticket.destination,
                    ticket.session
                );
                state.phase = SessionPhase::Requesting;
                state.notice = None;
                lock_ops::lock(&self.surface).clear_group(LayerGroup::RouteSegments);
                Ok(ticket)
            }
            Err(e) => {
                log::debug!("route selection rejected: {e}");
                state.phase = SessionPhase::Idle;
                state.notice = Some(e.to_string());
                // a superseded request may have cleared the segments already
                if let Some(displayed) = &state.displayed {
                    self.draw_route(&displayed.route);
                }
                Err(e)
            }
        }
    }

    /// applies a collaborator response to the session that requested it.
    pub fn complete_route(
        &self,
        ticket: RouteTicket,
        result: Result<Route, DashboardError>,
    ) -> RouteOutcome {
        let mut state = lock_ops::lock(&self.state);
        if ticket.session != state.session {
            log::debug!(
                "discarding route response for superseded session {} (current {})",
                ticket.session,
                state.session
            );
            return RouteOutcome::Superseded;
        }
        match result {
            Ok(route) => {
                let panel = RoutePanel::build(&ticket.origin, &ticket.destination, &route, |id| {
                    self.checkpoint_name(id)
                });
                let drawn = self.draw_route(&route);
                log::info!(
                    "displaying route {} -> {}: {} segments ({drawn} drawn), {}, {}",
                    ticket.origin,
                    ticket.destination,
                    route.segments.len(),
                    panel.distance,
                    panel.duration
                );
                state.phase = SessionPhase::Displaying;
                state.notice = None;
                state.displayed = Some(DisplayedRoute {
                    origin: ticket.origin,
                    destination: ticket.destination,
                    route,
                    panel: panel.clone(),
                });
                RouteOutcome::Displayed(panel)
            }
            Err(e) => {
                log::warn!(
                    "route request {} -> {} failed: {e}",
                    ticket.origin,
                    ticket.destination
                );
                state.phase = SessionPhase::Error;
                state.notice = Some(e.to_string());
                if let Some(displayed) = &state.displayed {
                    self.draw_route(&displayed.route);
                }
                RouteOutcome::Failed(e)
            }
        }
    }

    /// clears the route session and its layer, fits the map to every known
    /// checkpoint and closes the detail and analytics panels. valid in any
    /// phase; a request in flight is superseded.
    pub fn reset_navigation(&self) {
        let checkpoints = self.cache.checkpoints();
        let mut state = lock_ops::lock(&self.state);
        state.session += 1;
        state.phase = SessionPhase::Idle;
        state.origin = None;
        state.destination = None;
        state.displayed = None;
        state.notice = None;
        state.detail = None;
        state.overlays.set(Overlay::IntelAnalytics, false);
        let mut surface = lock_ops::lock(&self.surface);
        surface.clear_group(LayerGroup::RouteSegments);
        if let Some(bounds) = geo_ops::bounds_of(checkpoints.iter().map(Checkpoint::coord)) {
            surface.fit_bounds(bounds);
        }
        log::info!("navigation reset (session {})", state.session);
    }

    /// turns an overlay on or off, returning true if its state changed.
    /// switching the convoy overlay on always fetches fresh positions.
    pub async fn set_overlay(&self, overlay: Overlay, on: bool) -> bool {
        let convoy_fetch = {
            let mut state = lock_ops::lock(&self.state);
            if !state.overlays.set(overlay, on) {
                return false;
            }
            log::info!("overlay {overlay} {}", if on { "on" } else { "off" });
            match overlay {
                Overlay::CommsRelay => {
                    self.draw_checkpoints(&self.cache.checkpoints(), on);
                    None
                }
                Overlay::ActiveConvoys => {
                    state.convoy_generation += 1;
                    state.convoy_notice = None;
                    lock_ops::lock(&self.surface).clear_group(LayerGroup::Convoys);
                    on.then_some(state.convoy_generation)
                }
                Overlay::IntelAnalytics => None,
            }
        };
        if let Some(generation) = convoy_fetch {
            self.load_convoys(generation).await;
        }
        true
    }

    /// flips an overlay, returning its new state.
    pub async fn toggle_overlay(&self, overlay: Overlay) -> bool {
        let on = !lock_ops::lock(&self.state).overlays.is_active(overlay);
        self.set_overlay(overlay, on).await;
        on
    }

    /// re-fetches convoy positions if the convoy overlay is on.
    pub async fn refresh_convoys(&self) {
        let generation = {
            let mut state = lock_ops::lock(&self.state);
            if !state.overlays.is_active(Overlay::ActiveConvoys) {
                return;
            }
            state.convoy_generation += 1;
            state.convoy_generation
        };
        self.load_convoys(generation).await;
    }

    /// rebuilds the selection lists and the checkpoint layer from the cache.
    /// selections whose ids are gone are cleared; the rest are kept.
    pub fn refresh_checkpoints(&self) -> usize {
        let checkpoints = self.cache.checkpoints();
        let mut state = lock_ops::lock(&self.state);
        let options = CheckpointOption::list(&checkpoints);
        retain_selection(&mut state.origin, &options);
        retain_selection(&mut state.destination, &options);
        state.options = options;
        let detail_removed = state
            .detail
            .as_ref()
            .is_some_and(|id| !checkpoints.iter().any(|c| &c.id == id));
        if detail_removed {
            state.detail = None;
        }
        self.draw_checkpoints(&checkpoints, state.overlays.is_active(Overlay::CommsRelay))
    }

    /// redraws the checkpoint layer group, returning the number of markers.
    pub fn redraw_checkpoints(&self) -> usize {
        let checkpoints = self.cache.checkpoints();
        let state = lock_ops::lock(&self.state);
        self.draw_checkpoints(&checkpoints, state.overlays.is_active(Overlay::CommsRelay))
    }

    pub fn apply_sync_event(&self, event: &SyncEvent) {
        match event {
            SyncEvent::CheckpointsChanged { changed, total } => {
                log::debug!("{changed} of {total} checkpoints changed, rebuilding");
                self.refresh_checkpoints();
            }
            SyncEvent::ConnectivityChanged { online } => {
                log::info!("connectivity indicator now {}", online_label(*online));
            }
            SyncEvent::FleetRefreshed { vehicles } => {
                log::debug!("fleet refreshed with {vehicles} vehicles");
            }
        }
    }

    /// applies sync events until the cache goes away.
    pub async fn follow(&self, mut events: broadcast::Receiver<SyncEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.apply_sync_event(&event),
                Err(RecvError::Lagged(missed)) => {
                    log::warn!("missed {missed} sync events, rebuilding from cache");
                    self.refresh_checkpoints();
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    /// applies every event already queued on `events` without waiting.
    /// any number of checkpoint changes fold into a single rebuild.
    pub fn apply_pending_events(&self, events: &mut broadcast::Receiver<SyncEvent>) -> usize {
        let mut applied = 0;
        let mut checkpoints_changed = false;
        loop {
            match events.try_recv() {
                Ok(SyncEvent::CheckpointsChanged { .. }) => {
                    checkpoints_changed = true;
                    applied += 1;
                }
                Ok(event) => {
                    self.apply_sync_event(&event);
                    applied += 1;
                }
                Err(TryRecvError::Lagged(missed)) => {
                    log::warn!("missed {missed} sync events, rebuilding from cache");
                    checkpoints_changed = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        if checkpoints_changed {
            self.refresh_checkpoints();
        }
        applied
    }

    /// bootstraps the cache and posts the outcome as a status message. the
    /// checkpoint layer is rebuilt by whoever consumes the cache's events.
    pub async fn load_offline_data(&self) -> Result<(), DashboardError> {
        let result = self.cache.bootstrap().await;
        match &result {
            Ok(()) => {
                self.post_status(StatusMessage::transient(
                    format!(
                        "SYNC COMPLETE. {} Checkpoints, {} Routes cached.",
                        self.cache.checkpoint_count(),
                        self.cache.planned_routes().len()
                    ),
                    self.config.status_message_ttl,
                ));
            }
            Err(e) => self.post_status(StatusMessage::error(format!("SYNC FAILED: {e}"))),
        }
        result
    }

    /// reconciles the cache and posts the outcome as a status message. as
    /// with `load_offline_data`, rebuilds are driven by the cache's events.
    pub async fn sync_now(&self) -> Result<ReconcileOutcome, DashboardError> {
        let result = self.cache.reconcile().await;
        let ttl = self.config.status_message_ttl;
        match &result {
            Ok(ReconcileOutcome::Applied { summary, .. }) => {
                self.post_status(StatusMessage::transient(
                    format!("SYNC COMPLETE. {} Checkpoints updated.", summary.changed),
                    ttl,
                ));
            }
            Ok(ReconcileOutcome::Coalesced) => {
                self.post_status(StatusMessage::transient(String::from("SYNC IN PROGRESS."), ttl))
            }
            Err(e) => self.post_status(StatusMessage::error(format!("SYNC FAILED: {e}"))),
        }
        result
    }

    /// opens the detail panel for a cached checkpoint.
    pub fn open_checkpoint_detail(&self, id: &str) -> Option<CheckpointDetail> {
        let id = EntityId::new(id.trim());
        let checkpoint = self.cache.checkpoint(&id)?;
        let mut state = lock_ops::lock(&self.state);
        state.detail = Some(id);
        Some(self.detail_for(&state, checkpoint))
    }

    pub fn close_checkpoint_detail(&self) {
        lock_ops::lock(&self.state).detail = None;
    }

    /// a snapshot of the panels and session state.
    pub fn view(&self) -> MapView {
        let state = lock_ops::lock(&self.state);
        let analytics = state
            .overlays
            .is_active(Overlay::IntelAnalytics)
            .then(|| {
                AnalyticsPanel::build(
                    state.displayed.as_ref().map(|d| &d.route),
                    &self.cache.fleet_panel(),
                    &self.cache.convoys(),
                )
            });
        let detail = state
            .detail
            .as_ref()
            .and_then(|id| self.cache.checkpoint(id))
            .map(|checkpoint| self.detail_for(&state, checkpoint));
        MapView {
            phase: state.phase,
            notice: state.notice.clone(),
            origin: state.origin.clone(),
            destination: state.destination.clone(),
            options: state.options.clone(),
            route: state.displayed.as_ref().map(|d| d.panel.clone()),
            overlays: state.overlays.active(),
            analytics,
            convoy_notice: state.convoy_notice.clone(),
            status: state.status.clone().filter(StatusMessage::is_visible),
            online: self.cache.is_online(),
            degraded: self.cache.is_degraded(),
            detail,
        }
    }

    async fn load_convoys(&self, generation: u64) {
        let result = self.cache.refresh_convoys().await;
        let mut state = lock_ops::lock(&self.state);
        if state.convoy_generation != generation
            || !state.overlays.is_active(Overlay::ActiveConvoys)
        {
            log::debug!("discarding convoy positions fetched for an earlier activation");
            return;
        }
        match result {
            Ok(convoys) => {
                let mut surface = lock_ops::lock(&self.surface);
                let count = redraw_markers(
                    &mut *surface,
                    LayerGroup::Convoys,
                    convoys.iter().map(Marker::convoy),
                );
                log::debug!("drew {count} convoy markers");
                state.convoy_notice = None;
            }
            Err(e) => {
                lock_ops::lock(&self.surface).clear_group(LayerGroup::Convoys);
                state.convoy_notice = Some(format!("CONVOY FEED UNAVAILABLE: {e}"));
            }
        }
    }

    fn draw_checkpoints(&self, checkpoints: &[Checkpoint], comms_relay: bool) -> usize {
        let relays = checkpoints
            .iter()
            .filter(|c| comms_relay && c.is_comms_relay)
            .map(Marker::comms_relay);
        let markers = checkpoints.iter().map(Marker::checkpoint).chain(relays);
        let mut surface = lock_ops::lock(&self.surface);
        redraw_markers(&mut *surface, LayerGroup::Checkpoints, markers)
    }

    /// replaces the segment layer with `route` and fits the map to it.
    fn draw_route(&self, route: &Route) -> usize {
        let lines = route
            .segments
            .iter()
            .filter_map(|segment| self.segment_line(segment))
            .collect_vec();
        let bounds = geo_ops::bounds_of_lines(lines.iter().map(|l| &l.path));
        let mut surface = lock_ops::lock(&self.surface);
        surface.clear_group(LayerGroup::RouteSegments);
        let count = lines.len();
        for line in lines.into_iter() {
            surface.add_line(LayerGroup::RouteSegments, line);
        }
        if let Some(bounds) = bounds {
            surface.fit_bounds(bounds);
        }
        count
    }

    /// the polyline for a segment. segments without a path are drawn as a
    /// straight line between their endpoint checkpoints, if both resolve.
    fn segment_line(&self, segment: &RouteSegment) -> Option<RouteLine> {
        let path = if segment.has_path() {
            segment.path.clone()
        } else {
            let endpoints = self
                .cache
                .checkpoint(&segment.from)
                .zip(self.cache.checkpoint(&segment.to));
            match endpoints {
                Some((from, to)) => LineString::new(vec![from.coord(), to.coord()]),
                None => {
                    log::debug!(
                        "segment {} -> {} has no path and unknown endpoints, not drawn",
                        segment.from,
                        segment.to
                    );
                    return None;
                }
            }
        };
        let label = format!(
            "{} -> {}",
            self.checkpoint_name(&segment.from),
            self.checkpoint_name(&segment.to)
        );
        Some(RouteLine::new(
            segment.from.clone(),
            segment.to.clone(),
            label,
            path,
            segment.tari_score,
        ))
    }

    fn checkpoint_name(&self, id: &EntityId) -> String {
        self.cache
            .checkpoint(id)
            .map(|c| c.name)
            .unwrap_or_else(|| id.to_string())
    }

    fn detail_for(&self, state: &ViewState, checkpoint: Checkpoint) -> CheckpointDetail {
        let on_route = state
            .displayed
            .as_ref()
            .is_some_and(|d| d.touches(&checkpoint.id));
        CheckpointDetail::new(checkpoint, on_route, &self.cache.planned_routes())
    }

    fn post_status(&self, status: StatusMessage) {
        log::info!("{}", status.text);
        lock_ops::lock(&self.state).status = Some(status);
    }
}

fn non_empty(id: &str) -> Option<EntityId> {
    let id = EntityId::new(id.trim());
    (!id.is_empty()).then_some(id)
}

fn online_label(online: bool) -> &'static str {
    if online {
        "ONLINE"
    } else {
        "OFFLINE MODE"
    }
}
