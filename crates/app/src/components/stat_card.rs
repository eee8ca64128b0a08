use dioxus::prelude::*;
use shared_ui::{Card, CardContent};

/// Compact metric tile for dashboard summary rows.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-card",
                    span { class: "stat-value", "{value}" }
                    span { class: "stat-label", "{label}" }
                    if !hint.is_empty() {
                        span { class: "stat-hint", "{hint}" }
                    }
                }
            }
        }
    }
}
