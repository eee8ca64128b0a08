use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdX};
use dioxus_free_icons::Icon;
use shared_types::notification::format_age;
use shared_types::NotificationKind;
use shared_ui::{Badge, BadgeVariant, DropdownMenu, DropdownMenuContent, DropdownMenuTrigger};

use crate::notifications::use_notifications;

fn kind_variant(kind: NotificationKind) -> BadgeVariant {
    match kind {
        NotificationKind::Info => BadgeVariant::Secondary,
        NotificationKind::Success => BadgeVariant::Primary,
        NotificationKind::Warning => BadgeVariant::Warning,
        NotificationKind::Error => BadgeVariant::Destructive,
    }
}

/// Navbar bell with an unread counter and a dropdown listing the
/// session's notifications.
#[component]
pub fn NotificationBell() -> Element {
    let store = use_notifications();
    let entries = store.entries();
    let unread = store.unread_count();
    let now = Utc::now();

    rsx! {
        div { class: "notification-bell",
            DropdownMenu {
                // Opening the panel counts as seeing everything in it.
                DropdownMenuTrigger {
                    on_open: move |_| {
                        let mut store = store;
                        store.mark_all_read();
                    },
                    Icon { icon: LdBell, width: 18, height: 18 }
                    if unread > 0 {
                        span { class: "bell-count", "{unread}" }
                    }
                }
                DropdownMenuContent {
                    div { class: "bell-panel-header",
                        span { "Notifications" }
                        button {
                            class: "bell-action",
                            onclick: move |_| {
                                let mut store = store;
                                store.clear_all();
                            },
                            "Clear"
                        }
                    }
                    if entries.read().is_empty() {
                        p { class: "bell-empty", "No notifications yet." }
                    }
                    for note in entries.read().iter().cloned() {
                        div {
                            key: "{note.id}",
                            class: "bell-entry",
                            "data-read": note.read,
                            onclick: {
                                let id = note.id.clone();
                                move |_| {
                                    let mut store = store;
                                    store.mark_read(&id);
                                }
                            },
                            div { class: "bell-entry-head",
                                Badge { variant: kind_variant(note.kind), "{note.kind.as_str()}" }
                                span { class: "bell-age", {format_age(note.created_at, now)} }
                                button {
                                    class: "bell-dismiss",
                                    onclick: {
                                        let id = note.id.clone();
                                        move |evt: MouseEvent| {
                                            evt.stop_propagation();
                                            let mut store = store;
                                            store.dismiss(&id);
                                        }
                                    },
                                    Icon { icon: LdX, width: 14, height: 14 }
                                }
                            }
                            p { class: "bell-title", "{note.title}" }
                            p { class: "bell-message", "{note.message}" }
                        }
                    }
                }
            }
        }
    }
}
