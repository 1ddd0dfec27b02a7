//! plain-text rendering of dashboard panels for the terminal.
use convoy_core::model::{Convoy, FleetVehicle};
use convoy_map::{
    panel::{AnalyticsPanel, RoutePanel},
    MapView, RouteOutcome,
};
use convoy_sync::FleetPanel;
use itertools::Itertools;

pub fn header(view: &MapView) -> String {
    let connectivity = match (view.online, view.degraded) {
        (false, _) => "OFFLINE MODE",
        (true, true) => "ONLINE, DEGRADED",
        (true, false) => "ONLINE",
    };
    let mut line = format!("[{connectivity}] {}", view.phase);
    if let Some(status) = &view.status {
        line.push_str(&format!(" > {}", status.text));
    }
    line
}

pub fn route_outcome(outcome: &RouteOutcome, view: &MapView) -> String {
    match outcome {
        RouteOutcome::Displayed(panel) => route_panel(panel),
        RouteOutcome::Rejected(e) => format!("> {e}"),
        RouteOutcome::Failed(e) => {
            let mut lines = vec![format!("> ERROR: {e}")];
            if let Some(previous) = &view.route {
                lines.push(String::from("previous route still displayed:"));
                lines.push(route_panel(previous));
            }
            lines.join("\n")
        }
        RouteOutcome::Superseded => String::from("> route request superseded by a newer selection"),
    }
}

pub fn route_panel(panel: &RoutePanel) -> String {
    let average = panel
        .average_risk
        .map(|r| format!(", avg risk {r:.1}"))
        .unwrap_or_default();
    let mut lines = vec![format!(
        "ROUTE {} -> {}: {}, {}{average}",
        panel.origin_name, panel.destination_name, panel.distance, panel.duration
    )];
    for entry in panel.entries.iter() {
        let mut line = format!("  {entry} [{}]", entry.risk);
        if let Some(advisory) = entry.advisory {
            line.push_str(&format!(" !! {advisory}"));
        }
        lines.push(line);
    }
    if panel.alternative_count > 0 {
        lines.push(format!("  {} alternative route(s) available", panel.alternative_count));
    }
    lines.join("\n")
}

pub fn fleet(panel: &FleetPanel) -> String {
    let vehicle_lines = |vehicles: &[FleetVehicle]| {
        vehicles
            .iter()
            .map(|v| {
                let flag = if v.status.is_unavailable() { " *" } else { "" };
                format!(
                    "  {:<24} {:<16} {:>9.1} h{flag}",
                    v.name,
                    v.status.as_str(),
                    v.operating_hours
                )
            })
            .join("\n")
    };
    match panel {
        FleetPanel::NoData { error } => match error {
            Some(e) => format!("FLEET: no data received ({e})"),
            None => String::from("FLEET: no data received"),
        },
        FleetPanel::Current {
            vehicles,
            fetched_at,
        } => format!(
            "FLEET ({} vehicles, as of {})\n{}",
            vehicles.len(),
            fetched_at.format("%H:%M:%S"),
            vehicle_lines(vehicles.as_slice())
        ),
        FleetPanel::Stale {
            vehicles,
            fetched_at,
            error,
        } => format!(
            "FLEET STALE since {} ({error})\n{}",
            fetched_at.format("%H:%M:%S"),
            vehicle_lines(vehicles.as_slice())
        ),
    }
}

pub fn convoys(convoys: &[Convoy]) -> String {
    if convoys.is_empty() {
        return String::from("CONVOYS: none active");
    }
    let lines = convoys
        .iter()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .map(|c| {
            format!(
                "  {:<24} {:<10} ({:.4}, {:.4}) {} vehicles",
                c.name,
                c.status.as_str(),
                c.current_latitude,
                c.current_longitude,
                c.vehicles.len()
            )
        })
        .join("\n");
    format!("CONVOYS ({})\n{lines}", convoys.len())
}

pub fn analytics(panel: &AnalyticsPanel) -> String {
    let risk = match (panel.average_risk, panel.max_risk) {
        (Some(avg), Some(max)) => format!("avg TARI {avg:.1}, max TARI {max}"),
        _ => String::from("no route displayed"),
    };
    let fleet = panel
        .fleet_status_counts
        .iter()
        .map(|(status, count)| format!("{status}={count}"))
        .join(", ");
    let stale = if panel.fleet_stale { " (stale)" } else { "" };
    format!(
        "INTEL: {} segments, {risk}, {} high risk\n  fleet{stale}: [{fleet}]\n  active convoys: {}",
        panel.segment_count, panel.high_risk_segments, panel.convoy_count
    )
}

#[cfg(test)]
mod test {
    use convoy_core::{
        model::{EntityId, Route, RouteSegment, TariScore},
        wire::Endpoint,
        DashboardError,
    };

    use super::*;

    fn panel() -> RoutePanel {
        let route = Route::new(
            vec![RouteSegment::new(
                "1",
                "2",
                vec![],
                TariScore::try_from(4).expect("test failed"),
            )],
            45.2,
            72.0,
        );
        let name_of = |id: &EntityId| match id.as_str() {
            "1" => String::from("Base Alpha"),
            _ => String::from("Outpost Sierra"),
        };
        RoutePanel::build(&"1".into(), &"2".into(), &route, name_of)
    }

    #[test]
    fn test_route_panel() {
        let text = route_panel(&panel());
        assert_eq!(
            text,
            "ROUTE Base Alpha -> Outpost Sierra: 45.2 km, 1h 12m, avg risk 4.0\n  Base Alpha -> Outpost Sierra, Risk: 4 [HIGH] !! Possible Ambush / Steep Terrain"
        );
    }

    #[test]
    fn test_fleet_no_data() {
        let error = DashboardError::network(Endpoint::FleetStatus, "connection refused");
        let text = fleet(&FleetPanel::NoData { error: Some(error) });
        assert!(text.starts_with("FLEET: no data received"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn test_convoys_empty() {
        assert_eq!(convoys(&[]), "CONVOYS: none active");
    }
}
