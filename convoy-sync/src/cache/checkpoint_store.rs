use std::collections::BTreeMap;

use convoy_core::model::{Checkpoint, EntityId};

/// per-id checkpoint mirror. ordering by id keeps every snapshot and redraw
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct CheckpointStore {
    checkpoints: BTreeMap<EntityId, Checkpoint>,
}

/// what a delta application did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeltaSummary {
    /// records that were new or differed from the cached copy
    pub changed: usize,
    /// records identical to the cached copy (redelivered on retry)
    pub unchanged: usize,
    /// records older than the cached copy, by server modification time
    pub stale: usize,
    /// records that parsed but failed validation and were skipped
    pub rejected: usize,
}

impl DeltaSummary {
    pub fn received(&self) -> usize {
        self.changed + self.unchanged + self.stale + self.rejected
    }
}

impl CheckpointStore {
    pub fn new(checkpoints: Vec<Checkpoint>) -> Self {
        let mut store = Self::default();
        store.replace_all(checkpoints);
        store
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn get(&self, id: &EntityId) -> Option<&Checkpoint> {
        self.checkpoints.get(id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.checkpoints.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Checkpoint> {
        self.checkpoints.values()
    }

    pub fn to_vec(&self) -> Vec<Checkpoint> {
        self.checkpoints.values().cloned().collect()
    }

    /// replaces the whole collection with a bulk snapshot. returns true if
    /// the contents differ from what was cached. duplicate ids in the
    /// snapshot resolve to the last occurrence; invalid records are skipped.
    pub fn replace_all(&mut self, checkpoints: Vec<Checkpoint>) -> bool {
        let next = checkpoints
            .into_iter()
            .filter(accept)
            .map(|c| (c.id.clone(), c))
            .collect::<BTreeMap<_, _>>();
        let changed = next != self.checkpoints;
        self.checkpoints = next;
        changed
    }

    /// upserts a delta by id. applying the same delta twice leaves the store
    /// as after the first application.
    pub fn apply_delta(&mut self, updated: Vec<Checkpoint>) -> DeltaSummary {
        let mut summary = DeltaSummary::default();
        for incoming in updated.into_iter() {
            if !accept(&incoming) {
                summary.rejected += 1;
                continue;
            }
            match self.checkpoints.get(&incoming.id) {
                Some(cached) if cached == &incoming => summary.unchanged += 1,
                Some(cached) if !incoming.supersedes(cached) => {
                    log::debug!(
                        "skipping stale update for checkpoint {} ({:?} older than {:?})",
                        incoming.id,
                        incoming.updated_at,
                        cached.updated_at
                    );
                    summary.stale += 1
                }
                _ => {
                    summary.changed += 1;
                    self.checkpoints.insert(incoming.id.clone(), incoming);
                }
            }
        }
        summary
    }
}

/// a record that fails validation is logged and dropped so the rest of its
/// batch still applies.
fn accept(checkpoint: &Checkpoint) -> bool {
    match checkpoint.validate() {
        Ok(()) => true,
        Err(e) => {
            log::warn!("skipping checkpoint record: {e}");
            false
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use convoy_core::model::Checkpoint;

    use super::*;

    fn cp(id: &str, name: &str) -> Checkpoint {
        Checkpoint::new(id, name, 34.0, 69.0)
    }

    #[test]
    fn test_replace_all_reports_change() {
        let mut store = CheckpointStore::default();
        assert!(store.replace_all(vec![cp("1", "Base Alpha")]));
        assert!(!store.replace_all(vec![cp("1", "Base Alpha")]));
        assert!(store.replace_all(vec![cp("2", "Outpost Sierra")]));
        assert!(!store.contains(&"1".into()));
    }

    #[test]
    fn test_apply_delta_upserts_by_id() {
        let mut store = CheckpointStore::new(vec![cp("1", "Base Alpha"), cp("2", "Outpost Sierra")]);
        let summary = store.apply_delta(vec![cp("2", "Outpost Sierra II"), cp("3", "FOB Delta")]);
        assert_eq!(summary.changed, 2);
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.get(&"2".into()).map(|c| c.name.as_str()),
            Some("Outpost Sierra II")
        );
    }

    #[test]
    fn test_apply_delta_twice_is_idempotent() {
        let mut store = CheckpointStore::new(vec![cp("1", "Base Alpha")]);
        let delta = vec![cp("1", "Base Alpha (relocated)"), cp("2", "Outpost Sierra")];
        let first = store.apply_delta(delta.clone());
        let after_first = store.to_vec();
        let second = store.apply_delta(delta);
        assert_eq!(first.changed, 2);
        assert_eq!(second.changed, 0);
        assert_eq!(second.unchanged, 2);
        assert_eq!(store.to_vec(), after_first);
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let mut store = CheckpointStore::new(vec![
            cp("1", "Base Alpha"),
            Checkpoint::new("9", "Nowhere", 95.0, 69.0),
        ]);
        assert_eq!(store.len(), 1);

        let summary = store.apply_delta(vec![
            cp("2", "Outpost Sierra"),
            Checkpoint::new("3", "FOB Delta", 34.0, 190.0),
        ]);

        assert_eq!(summary.changed, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.received(), 2);
        assert!(store.contains(&"2".into()));
        assert!(!store.contains(&"3".into()));
    }

    #[test]
    fn test_apply_delta_skips_older_records() {
        let mut newer = cp("1", "Base Alpha v2");
        newer.updated_at = Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap());
        let mut older = cp("1", "Base Alpha v1");
        older.updated_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());

        let mut store = CheckpointStore::new(vec![newer.clone()]);
        let summary = store.apply_delta(vec![older]);
        assert_eq!(summary.stale, 1);
        assert_eq!(store.get(&"1".into()), Some(&newer));
    }
}
