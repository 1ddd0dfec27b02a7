use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use convoy_core::{
    model::{ConvoyStatus, EntityId, HealthStatus, SyncCursor, VehicleStatus},
    wire::{Endpoint, SmartRouteRequest, SyncRequest},
    DashboardError,
};
use convoy_sync::{DashboardApi, HttpDashboardApi, ReconcileOutcome, SyncCache};
use serde_json::{json, Value};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// serves the router on an ephemeral local port, returning its base url.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("test failed");
    let addr = listener.local_addr().expect("test failed");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> HttpDashboardApi {
    HttpDashboardApi::new(base_url, Duration::from_secs(2)).expect("test failed")
}

fn dashboard_server() -> Router {
    Router::new()
        .route(
            Endpoint::OfflineData.path(),
            get(|| async {
                Json(json!({
                    "checkpoints": [
                        {"id": 1, "name": "Base Alpha", "latitude": 34.50, "longitude": 69.10},
                        {"id": 2, "name": "Outpost Sierra", "latitude": 34.60, "longitude": 69.30, "is_comms_relay": true}
                    ],
                    "routes": [{"id": 7, "name": "Supply Run", "total_distance": 45.2}]
                }))
            }),
        )
        .route(
            Endpoint::Sync.path(),
            post(|Json(body): Json<Value>| async move {
                let since = body["last_sync_timestamp"].as_str().unwrap_or_default().to_string();
                let updated = if since.starts_with("1970") {
                    json!([{"id": 2, "name": "Outpost Sierra", "latitude": 34.61, "longitude": 69.31}])
                } else {
                    json!([])
                };
                Json(json!({
                    "current_server_time": "2024-03-01T12:00:00Z",
                    "updated_checkpoints": updated
                }))
            }),
        )
        .route(
            Endpoint::SmartRoute.path(),
            post(|Json(body): Json<Value>| async move {
                if body["start_checkpoint_id"] == body["end_checkpoint_id"] {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"error": "start and end checkpoints are identical"})),
                    );
                }
                (
                    StatusCode::OK,
                    Json(json!({
                        "primary_route": {
                            "segments": [{
                                "from": body["start_checkpoint_id"],
                                "to": body["end_checkpoint_id"],
                                "path": [[34.50, 69.10], [34.55, 69.20], [34.60, 69.30]],
                                "tari_score": 4
                            }],
                            "total_distance_km": 45.2,
                            "estimated_duration_mins": 72
                        },
                        "alternative_routes": [{}]
                    })),
                )
            }),
        )
        .route(
            Endpoint::ActiveConvoys.path(),
            get(|| async {
                Json(json!([{
                    "id": 3,
                    "name": "Convoy Bravo",
                    "status": "EN_ROUTE",
                    "current_latitude": 34.55,
                    "current_longitude": 69.20,
                    "vehicles": [{"id": 11, "name": "Truck 11", "status": "OPERATIONAL", "operating_hours": 1200.5}]
                }]))
            }),
        )
        .route(
            Endpoint::FleetStatus.path(),
            get(|| async {
                Json(json!([
                    {"id": 11, "name": "Truck 11", "status": "OPERATIONAL", "operating_hours": 1200.5},
                    {"id": 12, "name": "Truck 12", "status": "MAINTENANCE_DUE", "operating_hours": 4980.0, "last_maintenance_date": "2024-01-15"}
                ]))
            }),
        )
        .route(
            Endpoint::HealthCheck.path(),
            get(|| async { Json(json!({"status": "ok"})) }),
        )
}

#[tokio::test]
async fn test_reference_data_endpoints() {
    init_logging();
    let api = client(&serve(dashboard_server()).await);

    let offline = api.offline_data().await.expect("test failed");
    assert_eq!(offline.checkpoints.len(), 2);
    assert!(offline.checkpoints[1].is_comms_relay);
    assert_eq!(offline.planned_routes.len(), 1);

    let delta = api
        .sync(&SyncRequest::from(SyncCursor::default()))
        .await
        .expect("test failed");
    assert_eq!(delta.updated_checkpoints.len(), 1);
    assert_eq!(delta.server_time.to_rfc3339(), "2024-03-01T12:00:00+00:00");
}

#[tokio::test]
async fn test_smart_route() {
    init_logging();
    let api = client(&serve(dashboard_server()).await);

    let route = api
        .smart_route(&SmartRouteRequest {
            start_checkpoint_id: EntityId::from("1"),
            end_checkpoint_id: EntityId::from("2"),
        })
        .await
        .expect("test failed");

    assert_eq!(route.segments.len(), 1);
    assert_eq!(route.segments[0].tari_score.value(), 4);
    assert_eq!(route.alternative_count, 1);
    assert_eq!(route.distance_label(), "45.2 km");
    assert_eq!(route.duration_label(), "1h 12m");
}

#[tokio::test]
async fn test_operations_endpoints() {
    init_logging();
    let api = client(&serve(dashboard_server()).await);

    let (convoys, fleet, health) = futures::future::try_join3(
        api.active_convoys(),
        api.fleet_status(),
        api.health_check(),
    )
    .await
    .expect("test failed");

    assert_eq!(convoys[0].status, ConvoyStatus::EnRoute);
    assert_eq!(convoys[0].vehicles.len(), 1);
    assert_eq!(fleet[1].status, VehicleStatus::MaintenanceDue);
    assert!(fleet[1].last_maintenance_date.is_some());
    assert_eq!(health, HealthStatus::Ok);
}

#[tokio::test]
async fn test_error_body_becomes_server_error() {
    init_logging();
    let api = client(&serve(dashboard_server()).await);

    let result = api
        .smart_route(&SmartRouteRequest {
            start_checkpoint_id: EntityId::from("1"),
            end_checkpoint_id: EntityId::from("1"),
        })
        .await;

    match result {
        Err(DashboardError::ServerError {
            status, message, ..
        }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "start and end checkpoints are identical");
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_bodies() {
    init_logging();
    let router = Router::new()
        .route(
            Endpoint::Sync.path(),
            post(|| async { Json(json!({"updated_checkpoints": []})) }),
        )
        .route(
            Endpoint::FleetStatus.path(),
            get(|| async { "<html>gateway</html>" }),
        );
    let api = client(&serve(router).await);

    let sync = api.sync(&SyncRequest::from(SyncCursor::default())).await;
    assert!(matches!(
        sync,
        Err(DashboardError::MalformedResponseError { .. })
    ));
    let fleet = api.fleet_status().await;
    assert!(matches!(
        fleet,
        Err(DashboardError::MalformedResponseError { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    init_logging();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("test failed");
    let addr = listener.local_addr().expect("test failed");
    drop(listener);
    let api = client(&format!("http://{addr}"));

    let result = api.health_check().await;

    assert!(matches!(result, Err(DashboardError::NetworkError { .. })));
}

#[tokio::test]
async fn test_cache_reconciles_against_server() {
    init_logging();
    let cache = SyncCache::new(client(&serve(dashboard_server()).await));

    cache.bootstrap().await.expect("test failed");
    let first = cache.reconcile().await.expect("test failed");
    let second = cache.reconcile().await.expect("test failed");

    assert!(matches!(first, ReconcileOutcome::Applied { summary, .. } if summary.changed == 1));
    assert!(matches!(second, ReconcileOutcome::Applied { summary, .. } if summary.received() == 0));
    let sierra = cache.checkpoint(&EntityId::from("2")).expect("test failed");
    assert_eq!(sierra.latitude, 34.61);
    assert!(cache.probe_health().await);
}
