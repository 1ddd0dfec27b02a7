use convoy_core::model::SyncCursor;

use super::DeltaSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// the delta was merged and the cursor moved to `cursor`
    Applied {
        summary: DeltaSummary,
        cursor: SyncCursor,
    },
    /// another reconcile was already in flight; no request was issued
    Coalesced,
}
