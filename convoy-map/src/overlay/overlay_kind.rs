use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// independently toggled map overlays.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    /// highlights checkpoints that relay communications
    CommsRelay,
    /// live convoy positions, fetched fresh on every activation
    ActiveConvoys,
    /// the route and fleet analytics panel
    IntelAnalytics,
}

impl Overlay {
    pub const ALL: [Overlay; 3] = [
        Overlay::CommsRelay,
        Overlay::ActiveConvoys,
        Overlay::IntelAnalytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Overlay::CommsRelay => "comms_relay",
            Overlay::ActiveConvoys => "active_convoys",
            Overlay::IntelAnalytics => "intel_analytics",
        }
    }
}

impl Display for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Overlay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "comms_relay" | "commsrelay" | "comms" => Ok(Overlay::CommsRelay),
            "active_convoys" | "activeconvoys" | "convoys" => Ok(Overlay::ActiveConvoys),
            "intel_analytics" | "intelanalytics" | "analytics" => Ok(Overlay::IntelAnalytics),
            other => Err(format!(
                "unknown overlay '{other}', expected one of [{}]",
                Overlay::ALL.map(|o| o.as_str()).join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Overlay;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("commsRelay".parse::<Overlay>(), Ok(Overlay::CommsRelay));
        assert_eq!("active-convoys".parse::<Overlay>(), Ok(Overlay::ActiveConvoys));
        assert_eq!("analytics".parse::<Overlay>(), Ok(Overlay::IntelAnalytics));
        assert!("weather".parse::<Overlay>().is_err());
    }
}
