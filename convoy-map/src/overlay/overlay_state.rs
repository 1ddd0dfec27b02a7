use std::collections::BTreeSet;

use super::Overlay;

/// the set of active overlays. visibility only; toggling never touches
/// cached data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    active: BTreeSet<Overlay>,
}

impl OverlayState {
    pub fn is_active(&self, overlay: Overlay) -> bool {
        self.active.contains(&overlay)
    }

    /// sets the flag, returning true if it changed.
    pub fn set(&mut self, overlay: Overlay, on: bool) -> bool {
        if on {
            self.active.insert(overlay)
        } else {
            self.active.remove(&overlay)
        }
    }

    pub fn active(&self) -> Vec<Overlay> {
        self.active.iter().copied().collect()
    }
}
