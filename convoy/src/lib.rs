//! Command line front end of the convoy operations dashboard.
pub mod app;
