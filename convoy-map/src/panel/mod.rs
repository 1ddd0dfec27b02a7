mod analytics_panel;
mod checkpoint_detail;
mod route_panel;
mod selection;
mod status_message;

pub use analytics_panel::AnalyticsPanel;
pub use checkpoint_detail::CheckpointDetail;
pub use route_panel::{RoutePanel, SegmentEntry};
pub use selection::{retain_selection, CheckpointOption};
pub use status_message::{StatusLevel, StatusMessage};
