mod connectivity;
mod health_probe;

pub use connectivity::Connectivity;
pub use health_probe::run_health_probe;
