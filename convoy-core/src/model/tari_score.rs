use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Terrain And Route Intelligence score attached to a route segment, an
/// integer from 1 (benign) to 5 (most dangerous).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct TariScore(u8);

impl TariScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self.0 {
            4..=Self::MAX => RiskLevel::High,
            2..=3 => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }

    /// segments at or above HIGH risk carry a field advisory.
    pub fn advisory(&self) -> Option<&'static str> {
        match self.risk_level() {
            RiskLevel::High => Some("Possible Ambush / Steep Terrain"),
            _ => None,
        }
    }
}

impl TryFrom<u8> for TariScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "tari_score {value} outside of expected range [{}, {}]",
                Self::MIN,
                Self::MAX
            ))
        }
    }
}

impl From<TariScore> for u8 {
    fn from(value: TariScore) -> Self {
        value.0
    }
}

impl Display for TariScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_range() {
        assert!(TariScore::try_from(0).is_err());
        assert!(TariScore::try_from(6).is_err());
        for v in 1..=5 {
            assert_eq!(TariScore::try_from(v).expect("test failed").value(), v);
        }
    }

    #[test]
    fn test_risk_bands() {
        let level = |v: u8| TariScore::try_from(v).expect("test failed").risk_level();
        assert_eq!(level(1), RiskLevel::Low);
        assert_eq!(level(2), RiskLevel::Moderate);
        assert_eq!(level(3), RiskLevel::Moderate);
        assert_eq!(level(4), RiskLevel::High);
        assert_eq!(level(5), RiskLevel::High);
    }

    #[test]
    fn test_deserialize_out_of_range_fails() {
        let result = serde_json::from_str::<TariScore>("9");
        assert!(result.is_err());
    }
}
