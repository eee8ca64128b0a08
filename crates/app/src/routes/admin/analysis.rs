use dioxus::prelude::*;
use shared_types::analytics::bar_percent;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle};

use crate::data;

/// Composition of the incident data: crime type shares and victim
/// demographics.
#[component]
pub fn AdminAnalysis() -> Element {
    let distribution = data::crime_distribution();
    let distribution_max = distribution.iter().map(|s| s.value).max().unwrap_or(0);
    let groups = data::demographics();

    rsx! {
        PageHeader {
            PageTitle { "Crime Analysis" }
            PageSubtitle { "What kinds of incidents occur, and who they affect." }
        }

        Card {
            CardHeader {
                CardTitle { "Incidents by type" }
            }
            CardContent {
                div { class: "bar-chart",
                    for slice in distribution.iter() {
                        div { key: "{slice.name}", class: "bar-group",
                            span { class: "bar-label", "{slice.name}" }
                            div { class: "bar", style: "width: {bar_percent(slice.value, distribution_max)}%",
                                span { "{slice.value}%" }
                            }
                        }
                    }
                }
            }
        }

        div { class: "card-grid",
            for group in groups.iter() {
                Card { key: "{group.category}",
                    CardHeader {
                        CardTitle { "By {group.category}" }
                    }
                    CardContent {
                        div { class: "bar-chart",
                            for entry in group.entries.iter() {
                                div { key: "{entry.group}", class: "bar-group",
                                    span { class: "bar-label", "{entry.group}" }
                                    div { class: "bar", style: "width: {entry.percentage}%",
                                        span { "{entry.percentage}%" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
