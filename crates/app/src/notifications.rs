//! In-memory notification center.
//!
//! Notifications live only for the current page session. Non-error
//! kinds clear themselves after a short TTL; errors stay until the
//! user dismisses them.

use dioxus::prelude::*;
use shared_types::{Notification, NotificationKind};

use crate::time;

/// Signal-backed store provided from the app root.
#[derive(Clone, Copy)]
pub struct NotificationStore {
    entries: Signal<Vec<Notification>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Signal<Vec<Notification>> {
        self.entries
    }

    pub fn unread_count(&self) -> usize {
        unread_in(&self.entries.read())
    }

    /// Prepend a notification so the newest renders first. Kinds that
    /// auto-dismiss get a timer that removes them after the TTL.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> String {
        let note = Notification::new(title, message, kind);
        let id = note.id.clone();
        self.entries.with_mut(|list| list.insert(0, note));

        if kind.auto_dismisses() {
            let mut store = *self;
            let expiring = id.clone();
            spawn(async move {
                time::sleep_ms(time::NOTIFICATION_TTL_MS).await;
                store.dismiss(&expiring);
            });
        }

        id
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.push(title, message, NotificationKind::Info)
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.push(title, message, NotificationKind::Success)
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.push(title, message, NotificationKind::Warning)
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.push(title, message, NotificationKind::Error)
    }

    pub fn mark_read(&mut self, id: &str) {
        self.entries.with_mut(|list| mark_read_in(list, id));
    }

    pub fn mark_all_read(&mut self) {
        self.entries.with_mut(|list| {
            for note in list.iter_mut() {
                note.read = true;
            }
        });
    }

    /// Remove a notification. A stale id (already expired or cleared)
    /// is a no-op.
    pub fn dismiss(&mut self, id: &str) {
        self.entries.with_mut(|list| dismiss_in(list, id));
    }

    pub fn clear_all(&mut self) {
        self.entries.with_mut(Vec::clear);
    }
}

/// Grab the store provided at the app root.
pub fn use_notifications() -> NotificationStore {
    use_context()
}

fn mark_read_in(list: &mut [Notification], id: &str) {
    for note in list.iter_mut() {
        if note.id == id {
            note.read = true;
        }
    }
}

fn dismiss_in(list: &mut Vec<Notification>, id: &str) {
    list.retain(|note| note.id != id);
}

fn unread_in(list: &[Notification]) -> usize {
    list.iter().filter(|note| !note.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(id: &str, read: bool) -> Notification {
        let mut note = Notification::new("Title", "Message", NotificationKind::Info);
        note.id = id.to_string();
        note.read = read;
        note
    }

    #[test]
    fn mark_read_targets_one_entry() {
        let mut list = vec![sample("a", false), sample("b", false)];
        mark_read_in(&mut list, "b");
        assert!(!list[0].read);
        assert!(list[1].read);
    }

    #[test]
    fn dismiss_removes_only_matching_id() {
        let mut list = vec![sample("a", false), sample("b", true)];
        dismiss_in(&mut list, "a");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "b");
    }

    #[test]
    fn dismiss_with_stale_id_is_noop() {
        let mut list = vec![sample("a", false)];
        dismiss_in(&mut list, "gone");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn unread_count_ignores_read_entries() {
        let list = vec![sample("a", false), sample("b", true), sample("c", false)];
        assert_eq!(unread_in(&list), 2);
    }
}
