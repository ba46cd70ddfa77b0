use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warn,
}

/// Short-lived message shown over the current screen.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub displayed_at: Option<Instant>,
    pub duration: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            displayed_at: None,
            duration: Duration::from_secs(3),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.displayed_at
            .is_some_and(|start| now.saturating_duration_since(start) > self.duration)
    }

    pub fn mark_displayed(&mut self, now: Instant) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationLevel::Warn, "Roster full", "Ten players max");
        assert_eq!(n.level, NotificationLevel::Warn);
        assert_eq!(n.title, "Roster full");
        assert_eq!(n.duration, Duration::from_secs(3));
        assert!(n.displayed_at.is_none());
    }

    #[test]
    fn test_expiry_starts_when_displayed() {
        let now = Instant::now();
        let mut n = Notification::new(NotificationLevel::Info, "Theme", "Light")
            .with_duration(Duration::from_millis(10));
        assert!(!n.is_expired_at(now + Duration::from_secs(1)));

        n.mark_displayed(now);
        assert!(!n.is_expired_at(now + Duration::from_millis(5)));
        assert!(n.is_expired_at(now + Duration::from_millis(11)));
    }
}
