use convoy_core::model::{Checkpoint, EntityId};
use itertools::Itertools;
use serde::Serialize;

/// an entry of the origin/destination selection lists.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckpointOption {
    pub id: EntityId,
    pub name: String,
}

impl CheckpointOption {
    /// the selection list for the given cache contents, ordered by name.
    pub fn list(checkpoints: &[Checkpoint]) -> Vec<CheckpointOption> {
        checkpoints
            .iter()
            .map(|c| CheckpointOption {
                id: c.id.clone(),
                name: c.name.clone(),
            })
            .sorted_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)))
            .collect_vec()
    }
}

/// clears `selection` if its id is no longer among `options`. returns true
/// if the selection was cleared.
pub fn retain_selection(selection: &mut Option<EntityId>, options: &[CheckpointOption]) -> bool {
    match selection {
        Some(id) if !options.iter().any(|o| &o.id == id) => {
            log::debug!("selected checkpoint {id} no longer exists, clearing selection");
            *selection = None;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_list_is_sorted_by_name() {
        let options = CheckpointOption::list(&[
            Checkpoint::new("2", "Outpost Sierra", 0.0, 0.0),
            Checkpoint::new("1", "Base Alpha", 0.0, 0.0),
        ]);
        let names = options.iter().map(|o| o.name.as_str()).collect_vec();
        assert_eq!(names, vec!["Base Alpha", "Outpost Sierra"]);
    }

    #[test]
    fn test_retain_selection() {
        let options = CheckpointOption::list(&[Checkpoint::new("1", "Base Alpha", 0.0, 0.0)]);
        let mut kept = Some(EntityId::from("1"));
        let mut removed = Some(EntityId::from("2"));
        let mut empty = None;
        assert!(!retain_selection(&mut kept, &options));
        assert!(retain_selection(&mut removed, &options));
        assert!(!retain_selection(&mut empty, &options));
        assert_eq!(kept, Some(EntityId::from("1")));
        assert_eq!(removed, None);
    }
}
