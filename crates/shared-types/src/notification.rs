use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of an in-app notification.
///
/// Every kind except `Error` is dismissed automatically after a fixed
/// delay; errors stay until the user clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl NotificationKind {
    /// Key used for storage and CSS `data-kind` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Whether notifications of this kind self-delete after the
    /// auto-dismiss delay.
    pub fn auto_dismisses(&self) -> bool {
        !matches!(self, NotificationKind::Error)
    }
}

/// An in-memory notification record shown in the bell dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// Build an unread notification with a fresh random id.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
            read: false,
        }
    }
}

/// Human-readable age of a notification relative to `now`.
pub fn format_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if minutes > 0 {
        format!("{minutes}m ago")
    } else {
        "Just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_notification_starts_unread() {
        let note = Notification::new("Title", "Message", NotificationKind::Info);
        assert!(!note.read);
        assert_eq!(note.title, "Title");
    }

    #[test]
    fn fresh_ids_are_unique() {
        let a = Notification::new("A", "a", NotificationKind::Info);
        let b = Notification::new("B", "b", NotificationKind::Info);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn only_errors_survive_auto_dismiss() {
        assert!(NotificationKind::Info.auto_dismisses());
        assert!(NotificationKind::Warning.auto_dismisses());
        assert!(NotificationKind::Success.auto_dismisses());
        assert!(!NotificationKind::Error.auto_dismisses());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn format_age_buckets() {
        let now = Utc::now();
        assert_eq!(format_age(now, now), "Just now");
        assert_eq!(format_age(now - Duration::minutes(3), now), "3m ago");
        assert_eq!(format_age(now - Duration::hours(2), now), "2h ago");
        assert_eq!(format_age(now - Duration::days(5), now), "5d ago");
    }
}
