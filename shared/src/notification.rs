//! Transient notifications ("toasts").
//!
//! The center keeps insertion order and each entry's exit state; the
//! frontend renders [`NotificationCenter::items`] and drives the timers.

/// `id` of the fixed container the stack renders into.
pub const CONTAINER_ID: &str = "notification-container";
/// Length of the slide-out animation before an entry is removed.
pub const EXIT_ANIMATION_MS: u32 = 500;

/// Visual flavor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Neutral.
    #[default]
    Info,
    /// Operation succeeded.
    Success,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Error,
}

impl NotificationKind {
    /// Alert class suffix (`alert-{suffix}`).
    pub fn alert_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "danger",
        }
    }
}

/// Identifier handed out by [`NotificationCenter::push`].
pub type NotificationId = u64;

/// One live notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Stable id.
    pub id: NotificationId,
    /// Text content.
    pub message: String,
    /// Flavor.
    pub kind: NotificationKind,
    /// Set once the exit animation started.
    pub leaving: bool,
}

/// Ordered set of live notifications.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    next_id: NotificationId,
    items: Vec<Notification>,
}

impl NotificationCenter {
    /// Empty center.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            leaving: false,
        });
        tracing::debug!(id, ?kind, "notification shown");
        id
    }

    /// Start the exit animation. Returns `false` if the entry is gone or
    /// already leaving, so the auto timer and the close button cannot both
    /// schedule a removal.
    pub fn begin_dismiss(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if !item.leaving => {
                item.leaving = true;
                true
            },
            _ => false,
        }
    }

    /// Drop an entry after its exit animation.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    /// Live entries in insertion order.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_maps_to_danger_alert() {
        assert_eq!(NotificationKind::Error.alert_class(), "danger");
        assert_eq!(NotificationKind::Success.alert_class(), "success");
    }

    #[test]
    fn entries_keep_insertion_order_and_dismiss_independently() {
        let mut center = NotificationCenter::new();
        let first = center.push("one", NotificationKind::Info);
        let second = center.push("two", NotificationKind::Error);
        assert_ne!(first, second);

        assert!(center.begin_dismiss(first));
        assert!(!center.begin_dismiss(first));
        assert!(center.items()[0].leaving);
        assert!(!center.items()[1].leaving);

        assert!(center.remove(first));
        assert!(!center.remove(first));
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].message, "two");
        assert!(!center.begin_dismiss(first));
    }
}
