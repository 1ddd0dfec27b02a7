use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// marks the last successful reconciliation point with the navigation
/// service. starts at the Unix epoch so the first sync requests everything.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SyncCursor(DateTime<Utc>);

impl Default for SyncCursor {
    fn default() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl SyncCursor {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self(timestamp)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn is_epoch(&self) -> bool {
        self.0 == DateTime::<Utc>::UNIX_EPOCH
    }

    /// the cursor after a successful sync that reported `server_time`. the
    /// cursor never moves backwards, a server clock that reports an earlier
    /// time leaves it where it is.
    pub fn advance(self, server_time: DateTime<Utc>) -> SyncCursor {
        if server_time < self.0 {
            log::warn!(
                "server reported time {} earlier than sync cursor {}, keeping cursor",
                server_time.to_rfc3339(),
                self
            );
            self
        } else {
            SyncCursor(server_time)
        }
    }
}

impl Display for SyncCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::SyncCursor;

    #[test]
    fn test_default_is_epoch() {
        let cursor = SyncCursor::default();
        assert!(cursor.is_epoch());
        assert_eq!(cursor.to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_advance_forward() {
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let cursor = SyncCursor::default().advance(t);
        assert_eq!(cursor.timestamp(), t);
    }

    #[test]
    fn test_advance_never_regresses() {
        let later = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap();
        let cursor = SyncCursor::new(later).advance(earlier);
        assert_eq!(cursor.timestamp(), later);
    }

    #[test]
    fn test_serializes_as_iso8601() {
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let json = serde_json::to_string(&SyncCursor::new(t)).expect("test failed");
        assert_eq!(json, "\"2024-05-01T12:00:00Z\"");
    }
}
