use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};

/// identifier of a server-side record. the navigation service issues UUIDs
/// while fixtures and older deployments use integers, so both deserialize
/// into the same opaque string.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// an empty id is how an unset selection arrives from a form or CLI.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntityId {
    Text(String),
    Integer(i64),
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<EntityId, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawEntityId::deserialize(deserializer)? {
            RawEntityId::Text(s) => Ok(EntityId(s)),
            RawEntityId::Integer(i) => Ok(EntityId(i.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::EntityId;

    #[test]
    fn test_deserialize_string_and_integer() {
        let ids: Vec<EntityId> =
            serde_json::from_str(r#"["7d7c1f5e-4a0e-4c55-9b1c-2f1b8e6e9d10", 42]"#)
                .expect("test failed");
        assert_eq!(ids[0].as_str(), "7d7c1f5e-4a0e-4c55-9b1c-2f1b8e6e9d10");
        assert_eq!(ids[1], EntityId::from("42"));
    }

    #[test]
    fn test_blank_is_empty() {
        assert!(EntityId::from("").is_empty());
        assert!(EntityId::from("  ").is_empty());
        assert!(!EntityId::from("1").is_empty());
    }
}
