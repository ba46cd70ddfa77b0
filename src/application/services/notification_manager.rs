use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::domain::{Notification, NotificationLevel};

/// FIFO of notifications, showing one at a time.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        let notification =
            Notification::new(level, title, message).with_duration(self.default_duration);
        // Repeating the same refusal should not stack up copies.
        if self
            .queue
            .back()
            .is_some_and(|last| {
                last.title == notification.title && last.message == notification.message
            })
        {
            return;
        }
        self.queue.push_back(notification);
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, title, message);
    }

    pub fn warn(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Warn, title, message);
    }

    /// Advances the queue, dropping the front notification once expired.
    pub fn tick(&mut self, now: Instant) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_displayed(now);
            if front.is_expired_at(now) {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_displayed(now);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }
}
