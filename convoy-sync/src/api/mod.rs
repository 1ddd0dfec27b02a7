mod dashboard_api;
mod http_dashboard_api;
mod http_dashboard_api_config;
#[cfg(any(test, feature = "test-util"))]
pub mod scripted;

pub use dashboard_api::DashboardApi;
pub use http_dashboard_api::HttpDashboardApi;
pub use http_dashboard_api_config::HttpDashboardApiConfig;
