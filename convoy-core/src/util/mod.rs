pub mod geo_ops;
pub mod lock_ops;
