//! Success and failure signals handed to the host's notification system.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A transient message the host displays after a gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notification {
    /// A link was created.
    LinkCreated { link_id: String },
    /// A link's note was saved.
    Updated { link_id: String },
    /// A create or update did not go through.
    Failed { message: String },
}

impl Notification {
    /// Text shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::LinkCreated { .. } => "Link created",
            Self::Updated { .. } => "Updated",
            Self::Failed { message } => message,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

/// Receives notifications from the creation flow and the note editor.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Forwards notifications to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_success() {
            log::info!("{}", notification.message());
        } else {
            log::warn!("{}", notification.message());
        }
    }
}

/// Buffers notifications until the host drains them, oldest first.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: RefCell<VecDeque<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notification> {
        self.pending.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: Notification) {
        self.pending.borrow_mut().push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let created = Notification::LinkCreated { link_id: "a".to_string() };
        let updated = Notification::Updated { link_id: "a".to_string() };
        let failed = Notification::Failed { message: "Failed to save: disk full".to_string() };

        assert_eq!(created.message(), "Link created");
        assert_eq!(updated.message(), "Updated");
        assert_eq!(failed.message(), "Failed to save: disk full");
        assert!(!failed.is_success());
    }

    #[test]
    fn test_log_notifier_accepts_without_logger() {
        LogNotifier.notify(Notification::Updated { link_id: "1".to_string() });
        LogNotifier.notify(Notification::Failed { message: "Link no longer exists".to_string() });
    }

    #[test]
    fn test_queue_drains_in_order() {
        let queue = NotificationQueue::new();
        queue.notify(Notification::LinkCreated { link_id: "1".to_string() });
        queue.notify(Notification::Updated { link_id: "1".to_string() });

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message(), "Link created");
        assert!(queue.is_empty());
    }
}
