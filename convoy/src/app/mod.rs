mod convoy_app;
mod convoy_app_error;
mod dashboard_config;
pub mod report;
pub mod snapshot_file;
mod watch;

pub use convoy_app::{ConvoyApp, ConvoyOperation};
pub use convoy_app_error::ConvoyAppError;
pub use dashboard_config::DashboardConfig;
