use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// a status line shown after a sync. info messages hide themselves once
/// their time to live has elapsed; errors stay until replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    posted_at: Instant,
    ttl: Option<Duration>,
}

impl StatusMessage {
    pub fn transient(text: String, ttl: Duration) -> Self {
        Self {
            text,
            level: StatusLevel::Info,
            posted_at: Instant::now(),
            ttl: Some(ttl),
        }
    }

    pub fn error(text: String) -> Self {
        Self {
            text,
            level: StatusLevel::Error,
            posted_at: Instant::now(),
            ttl: None,
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        match self.ttl {
            Some(ttl) => now.saturating_duration_since(self.posted_at) < ttl,
            None => true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_transient_message_hides_after_ttl() {
        let message = StatusMessage::transient(String::from("SYNC COMPLETE."), Duration::from_secs(3));
        assert!(message.is_visible());
        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(message.is_visible());
        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!message.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_message_stays() {
        let message = StatusMessage::error(String::from("SYNC FAILED: timed out"));
        tokio::time::advance(Duration::from_secs(60)).await;
        assert!(message.is_visible());
    }
}
