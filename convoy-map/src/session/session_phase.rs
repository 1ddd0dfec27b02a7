use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// where the current route session stands.
///
/// ```text
/// Idle -> Validating -> Requesting -> Displaying
///           |               |
///           v               v
///          Idle           Error
/// ```
///
/// a new selection from any phase starts again at `Validating`; reset
/// returns to `Idle`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Idle,
    Validating,
    Requesting,
    Displaying,
    Error,
}

impl Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionPhase::Idle => "IDLE",
            SessionPhase::Validating => "VALIDATING",
            SessionPhase::Requesting => "CALCULATING OPTIMAL PATH",
            SessionPhase::Displaying => "DISPLAYING",
            SessionPhase::Error => "ERROR",
        };
        write!(f, "{s}")
    }
}
