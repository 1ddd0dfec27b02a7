use std::sync::{
    atomic::{AtomicBool, Ordering},
    RwLock,
};

use convoy_core::{util::lock_ops, DashboardError};

/// online/degraded indicator shared by the health probe and the sync
/// operations. atomics keep the probe from ever waiting on a reconcile.
#[derive(Debug)]
pub struct Connectivity {
    online: AtomicBool,
    last_failure: RwLock<Option<DashboardError>>,
}

impl Default for Connectivity {
    fn default() -> Self {
        Self {
            online: AtomicBool::new(true),
            last_failure: RwLock::new(None),
        }
    }
}

impl Connectivity {
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    /// offline, or holding a failure no later operation has cleared.
    pub fn is_degraded(&self) -> bool {
        !self.is_online() || lock_ops::read(&self.last_failure).is_some()
    }

    /// sets the flag from a health probe, returning true if it flipped.
    /// the last operation failure is kept.
    pub fn set_online(&self, online: bool) -> bool {
        self.online.swap(online, Ordering::AcqRel) != online
    }

    /// records a successful operation, clearing the last failure. returns
    /// true if the flag flipped online.
    pub fn record_success(&self) -> bool {
        *lock_ops::write(&self.last_failure) = None;
        self.set_online(true)
    }

    /// records a failed operation. returns true if the flag flipped offline.
    pub fn record_failure(&self, error: &DashboardError) -> bool {
        *lock_ops::write(&self.last_failure) = Some(error.clone());
        error.is_connectivity_failure() && self.set_online(false)
    }

    pub fn last_failure(&self) -> Option<DashboardError> {
        lock_ops::read(&self.last_failure).clone()
    }
}
