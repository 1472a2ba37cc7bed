//! Transient user notifications
//!
//! The presentation layer drains the queue and shows each entry once.

use crate::core::error::AdminError;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl From<&AdminError> for Notification {
    fn from(err: &AdminError) -> Self {
        Notification::error(err.to_string())
    }
}

/// FIFO of pending notifications
#[derive(Debug, Default)]
pub struct Notifications {
    pending: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    pub fn report(&mut self, err: &AdminError) {
        self.push(Notification::from(err));
    }

    /// Take every pending notification, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.pending.back()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
