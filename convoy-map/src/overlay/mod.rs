mod overlay_kind;
mod overlay_state;

pub use overlay_kind::Overlay;
pub use overlay_state::OverlayState;
