mod map_view;
mod map_view_model;
mod map_view_model_config;

pub use map_view::MapView;
pub use map_view_model::MapViewModel;
pub use map_view_model_config::MapViewModelConfig;
