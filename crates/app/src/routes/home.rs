use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdFileText, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::Severity;
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, PageSubtitle, PageTitle,
};

use crate::components::StatCard;
use crate::data;
use crate::routes::Route;

fn severity_variant(severity: Severity) -> BadgeVariant {
    match severity {
        Severity::Low => BadgeVariant::Secondary,
        Severity::Medium => BadgeVariant::Warning,
        Severity::High => BadgeVariant::Destructive,
    }
}

/// Landing page: hero, headline numbers, quick links and the latest
/// alerts.
#[component]
pub fn Home() -> Element {
    let latest_alerts: Vec<_> = data::sample_alerts().into_iter().take(3).collect();

    rsx! {
        section { class: "hero",
            h1 { "Stay informed. Stay safe." }
            p {
                "Crime news, community reports and safety alerts for Surat, \
                 in one place."
            }
            div { class: "hero-actions",
                Button {
                    onclick: move |_| { navigator().push(Route::ReportIncident {}); },
                    "Report an incident"
                }
                Button {
                    variant: shared_ui::ButtonVariant::Outline,
                    onclick: move |_| { navigator().push(Route::SafetyAlerts {}); },
                    "View alerts"
                }
            }
        }

        div { class: "stat-row",
            StatCard { label: "Localities covered", value: "38" }
            StatCard { label: "Alerts issued this month", value: "24" }
            StatCard { label: "Community reports", value: "312" }
            StatCard { label: "Cases resolved", value: "87%" }
        }

        div { class: "card-grid",
            Card {
                CardHeader {
                    Icon { icon: LdFileText, width: 20, height: 20 }
                    CardTitle { "Report an incident" }
                    CardDescription { "File a report in minutes; attach a location straight from your phone." }
                }
                CardContent {
                    Link { to: Route::ReportIncident {}, "Go to the report form" }
                }
            }
            Card {
                CardHeader {
                    Icon { icon: LdUsers, width: 20, height: 20 }
                    CardTitle { "Community watch" }
                    CardDescription { "See what neighbours are flagging and share your own warnings." }
                }
                CardContent {
                    Link { to: Route::Community {}, "Open the community forum" }
                }
            }
            Card {
                CardHeader {
                    Icon { icon: LdBell, width: 20, height: 20 }
                    CardTitle { "Safety alerts" }
                    CardDescription { "Emergency, crime and traffic alerts filtered by your area." }
                }
                CardContent {
                    Link { to: Route::SafetyAlerts {}, "Browse current alerts" }
                }
            }
        }

        PageHeader {
            PageTitle { "Latest alerts" }
            PageSubtitle { "The three most recent advisories for the city." }
        }
        div { class: "alert-list",
            for alert in latest_alerts {
                Card { key: "{alert.id}",
                    CardHeader {
                        Badge { variant: severity_variant(alert.severity), {alert.severity.display_name()} }
                        CardTitle { "{alert.title}" }
                        CardDescription { "{alert.location} · {alert.date} {alert.time}" }
                    }
                    CardContent {
                        p { "{alert.description}" }
                    }
                }
            }
        }

        section { class: "safety-tips",
            h2 { "Everyday safety tips" }
            ul {
                li { "Never share OTPs or card details on a call, whoever the caller claims to be." }
                li { "Use covered, well-lit parking and a steering lock for two-wheelers." }
                li { "Save the cyber fraud helpline 1930 before you need it." }
                li { "Report suspicious activity early; small reports build the bigger picture." }
            }
        }
    }
}
